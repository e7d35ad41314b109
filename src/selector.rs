//! Prefix selection: a pure filter over the registry snapshot.

use crate::registry::Registry;
use std::collections::BTreeSet;

/// Prefixes excluded by default: decommissioned sources or ontologies whose
/// edge sets are dominated by non-standard relations.
pub const DEFAULT_SKIP_PREFIXES: &[&str] = &["gaz", "txpo", "apollosv", "aero", "aeo", "cido"];

/// Select the prefixes to process, sorted ascending.
///
/// A prefix is included iff it declares a canonical OBO Foundry URI prefix,
/// is not in the skip set, is not deprecated, and is at or past the optional
/// lexicographic minimum. The minimum is inclusive and doubles as a
/// resumption mechanism: an interrupted run can restart partway through the
/// sequence.
///
/// The output order is significant downstream: it fixes source-list append
/// order and progress reporting order.
pub fn select_prefixes(
    registry: &Registry,
    skip: &BTreeSet<String>,
    minimum: Option<&str>,
) -> Vec<String> {
    registry
        .iter()
        .filter(|(prefix, _)| registry.obofoundry_uri_prefix(prefix).is_some())
        .filter(|(prefix, _)| !skip.contains(*prefix))
        .filter(|(prefix, _)| !registry.is_deprecated(prefix))
        .filter(|(prefix, _)| minimum.map_or(true, |min| *prefix >= min))
        .map(|(prefix, _)| prefix.to_string())
        .collect()
}

/// The default skip set as an owned collection.
pub fn default_skip_set() -> BTreeSet<String> {
    DEFAULT_SKIP_PREFIXES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn registry_with(entries: &[(&str, bool, bool)]) -> Registry {
        // (prefix, has_obofoundry_uri, deprecated)
        let body = entries
            .iter()
            .map(|(prefix, has_uri, deprecated)| {
                let uri = if *has_uri {
                    format!(
                        r#""obofoundry_uri_prefix": "http://purl.obolibrary.org/obo/{}_", "#,
                        prefix.to_uppercase()
                    )
                } else {
                    String::new()
                };
                format!(r#""{}": {{ {}"deprecated": {} }}"#, prefix, uri, deprecated)
            })
            .collect::<Vec<_>>()
            .join(", ");
        Registry::from_json_str(&format!("{{ {} }}", body)).unwrap()
    }

    #[test]
    fn test_filter_correctness() {
        let registry = registry_with(&[
            ("d", true, true),  // deprecated
            ("e", true, false), // eligible
            ("g", true, false), // denylisted below
            ("m", false, false), // no canonical URI prefix
        ]);
        let skip: BTreeSet<String> = ["g".to_string()].into_iter().collect();

        let selected = select_prefixes(&registry, &skip, None);
        assert_eq!(selected, vec!["e"]);
    }

    #[test]
    fn test_minimum_cutoff_is_inclusive() {
        let registry = registry_with(&[
            ("alpha", true, false),
            ("beta", true, false),
            ("gamma", true, false),
        ]);
        let skip = BTreeSet::new();

        let selected = select_prefixes(&registry, &skip, Some("beta"));
        assert_eq!(selected, vec!["beta", "gamma"]);
    }

    #[test]
    fn test_no_minimum_selects_all_eligible_sorted() {
        let registry = registry_with(&[
            ("gamma", true, false),
            ("alpha", true, false),
            ("beta", true, false),
        ]);
        let skip = BTreeSet::new();

        let selected = select_prefixes(&registry, &skip, None);
        assert_eq!(selected, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_default_skip_set() {
        let skip = default_skip_set();
        assert!(skip.contains("gaz"));
        assert!(skip.contains("cido"));
        assert_eq!(skip.len(), DEFAULT_SKIP_PREFIXES.len());
    }
}
