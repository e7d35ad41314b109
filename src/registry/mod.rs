//! Prefix-metadata registry.
//!
//! The registry is a snapshot mapping each ontology prefix to its resource
//! metadata, loaded once at startup from a local JSON file or an HTTP
//! endpoint. The pipeline only consumes a handful of lookups from it: the
//! canonical OBO Foundry URI prefix, the deprecation flag, and a CURIE
//! recognizability check used by the report writer.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Metadata for a single registered prefix.
///
/// Unknown fields in the source document are ignored; everything here is
/// optional so partial registry dumps still load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resource {
    /// Human-readable name of the ontology.
    pub name: Option<String>,

    /// Whether the resource has been marked deprecated upstream.
    #[serde(default)]
    pub deprecated: bool,

    /// Canonical OBO Foundry URI prefix, present only for OBO Foundry
    /// ontologies. Its presence is the selector's eligibility gate.
    pub obofoundry_uri_prefix: Option<String>,

    /// Alternative spellings of the prefix accepted during CURIE checks.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// An immutable registry snapshot.
#[derive(Debug, Clone)]
pub struct Registry {
    resources: BTreeMap<String, Resource>,
    /// Lowercased prefixes and synonyms, for case-insensitive CURIE checks.
    curie_prefixes: BTreeSet<String>,
}

impl Registry {
    /// Build a registry from an already-deserialized resource map.
    pub fn new(resources: BTreeMap<String, Resource>) -> Self {
        let mut curie_prefixes = BTreeSet::new();
        for (prefix, resource) in &resources {
            curie_prefixes.insert(prefix.to_lowercase());
            for synonym in &resource.synonyms {
                curie_prefixes.insert(synonym.to_lowercase());
            }
        }
        Self {
            resources,
            curie_prefixes,
        }
    }

    /// Parse a registry from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let resources: BTreeMap<String, Resource> =
            serde_json::from_str(json).context("Failed to parse registry JSON")?;
        Ok(Self::new(resources))
    }

    /// Load a registry from a local JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry file: {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// Fetch a registry over HTTP.
    pub fn fetch(url: &str, timeout: Duration) -> Result<Self> {
        debug!("Fetching registry from {}", url);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let body = client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("Failed to fetch registry from {}", url))?
            .text()
            .context("Failed to read registry response body")?;
        Self::from_json_str(&body)
    }

    /// Load a registry from a URL or a local path, dispatching on scheme.
    pub fn load_source(source: &str, timeout: Duration) -> Result<Self> {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::fetch(source, timeout)
        } else {
            Self::load(Path::new(source))
        }
    }

    /// Number of registered prefixes.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterate over (prefix, resource) pairs in ascending prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.resources.iter().map(|(p, r)| (p.as_str(), r))
    }

    /// Canonical OBO Foundry URI prefix for a prefix, if declared.
    pub fn obofoundry_uri_prefix(&self, prefix: &str) -> Option<&str> {
        self.resources
            .get(prefix)
            .and_then(|r| r.obofoundry_uri_prefix.as_deref())
    }

    /// Whether a prefix is marked deprecated. Unknown prefixes are not.
    pub fn is_deprecated(&self, prefix: &str) -> bool {
        self.resources.get(prefix).is_some_and(|r| r.deprecated)
    }

    /// Whether a string is a recognizable compact identifier (`prefix:local`
    /// with a registered prefix, case-insensitively, synonyms included).
    ///
    /// Bare relation names like `is_a` have no colon and are never
    /// recognizable. Only used for the boolean column of the tabular
    /// predicate summary.
    pub fn is_normalizable_curie(&self, s: &str) -> bool {
        let Some((prefix, local)) = s.split_once(':') else {
            return false;
        };
        if prefix.is_empty() || local.is_empty() {
            return false;
        }
        // Full URIs slip through a naive colon split ("http://...").
        if local.starts_with("//") {
            return false;
        }
        self.curie_prefixes.contains(&prefix.to_lowercase())
    }
}
