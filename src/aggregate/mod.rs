//! Edge aggregation across all fetched graphs.
//!
//! Folds every standardized edge from every successfully fetched graph into
//! two in-memory structures: the triple table with per-triple provenance,
//! and per-predicate usage counters. Both use `BTreeMap` so iteration is
//! already in the sorted order the report writer needs.

use crate::fetch::{FetchError, FetchOutcome, GraphFetcher};
use crate::models::{Edge, Triple};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use tracing::warn;

/// The two accumulator structures, owned locally and handed to the writer.
#[derive(Debug, Default)]
pub struct EdgeAggregate {
    /// Triple -> list of contributing prefixes, in iteration order. A prefix
    /// appears once per graph that produced the triple, so duplicates are
    /// possible and preserved.
    pub triples: BTreeMap<Triple, Vec<String>>,

    /// Predicate -> (prefix -> edge count).
    pub counters: BTreeMap<String, BTreeMap<String, u64>>,
}

impl EdgeAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one standardized edge contributed by `prefix`.
    pub fn record(&mut self, prefix: &str, edge: Edge) {
        *self
            .counters
            .entry(edge.pred.clone())
            .or_default()
            .entry(prefix.to_string())
            .or_insert(0) += 1;
        self.triples
            .entry(Triple::from(edge))
            .or_default()
            .push(prefix.to_string());
    }

    /// Number of unique triples.
    pub fn num_triples(&self) -> usize {
        self.triples.len()
    }

    /// Number of distinct predicates.
    pub fn num_predicates(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

/// Fetch every selected prefix in order and fold all edges into a fresh
/// [`EdgeAggregate`].
///
/// Per-prefix failures are not fatal: an I/O failure, a decode failure, and
/// an empty document each log a distinct message for the offending prefix,
/// which then contributes nothing. Anything else (there is nothing else in
/// the fetch contract) cannot abort the loop.
pub fn run_aggregation(prefixes: &[String], fetcher: &dyn GraphFetcher) -> EdgeAggregate {
    let bar = ProgressBar::new(prefixes.len() as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos}/{len} prefixes ({eta}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut aggregate = EdgeAggregate::new();
    for prefix in prefixes {
        bar.set_message(prefix.clone());
        match fetcher.fetch(prefix) {
            Ok(FetchOutcome::Graphs(graphs)) => {
                for graph in &graphs {
                    for edge in graph.standardize() {
                        aggregate.record(prefix, edge);
                    }
                }
            }
            Ok(FetchOutcome::Empty) => {
                warn!("[{}] no graphs", prefix);
            }
            Err(err @ FetchError::Io(_)) => {
                warn!("[{}] {}", prefix, err);
            }
            Err(err @ FetchError::Decode(_)) => {
                warn!("[{}] {}", prefix, err);
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates_sources_in_order() {
        let mut aggregate = EdgeAggregate::new();
        aggregate.record("a", Edge::new("X", "part_of", "Y"));
        aggregate.record("b", Edge::new("X", "part_of", "Y"));

        let sources = &aggregate.triples[&Triple::new("X", "part_of", "Y")];
        assert_eq!(sources, &vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_record_permits_duplicate_sources() {
        // Two graphs from the same prefix yielding the same triple: the
        // prefix is appended twice, by design.
        let mut aggregate = EdgeAggregate::new();
        aggregate.record("a", Edge::new("X", "part_of", "Y"));
        aggregate.record("a", Edge::new("X", "part_of", "Y"));

        let sources = &aggregate.triples[&Triple::new("X", "part_of", "Y")];
        assert_eq!(sources, &vec!["a".to_string(), "a".to_string()]);
        assert_eq!(aggregate.counters["part_of"]["a"], 2);
    }

    #[test]
    fn test_counters_per_predicate_per_prefix() {
        let mut aggregate = EdgeAggregate::new();
        aggregate.record("a", Edge::new("X", "part_of", "Y"));
        aggregate.record("b", Edge::new("X", "part_of", "Y"));
        aggregate.record("b", Edge::new("Y", "is_a", "Z"));

        assert_eq!(aggregate.num_triples(), 2);
        assert_eq!(aggregate.num_predicates(), 2);
        assert_eq!(aggregate.counters["part_of"]["a"], 1);
        assert_eq!(aggregate.counters["part_of"]["b"], 1);
        assert_eq!(aggregate.counters["is_a"]["b"], 1);
        assert!(!aggregate.counters.contains_key("unrelated"));
    }

    #[test]
    fn test_triples_iterate_sorted() {
        let mut aggregate = EdgeAggregate::new();
        aggregate.record("p", Edge::new("B", "is_a", "C"));
        aggregate.record("p", Edge::new("A", "is_a", "B"));

        let keys: Vec<&Triple> = aggregate.triples.keys().collect();
        assert_eq!(keys[0], &Triple::new("A", "is_a", "B"));
        assert_eq!(keys[1], &Triple::new("B", "is_a", "C"));
    }
}
