//! Core data types shared across the pipeline.

use std::fmt;

/// A single subject-predicate-object edge, after standardization.
///
/// Fields are CURIE-like string identifiers. The aggregator trusts them
/// exactly as produced by [`crate::fetch::obograph::Graph::standardize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub sub: String,
    pub pred: String,
    pub obj: String,
}

impl Edge {
    pub fn new(sub: impl Into<String>, pred: impl Into<String>, obj: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            pred: pred.into(),
            obj: obj.into(),
        }
    }
}

/// The aggregation key: an ordered (subject, predicate, object) tuple.
///
/// The derived `Ord` compares fields in declaration order, which is exactly
/// the lexicographic tuple order required for the sorted output tables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub sub: String,
    pub pred: String,
    pub obj: String,
}

impl Triple {
    pub fn new(sub: impl Into<String>, pred: impl Into<String>, obj: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            pred: pred.into(),
            obj: obj.into(),
        }
    }
}

impl From<Edge> for Triple {
    fn from(edge: Edge) -> Self {
        Self {
            sub: edge.sub,
            pred: edge.pred,
            obj: edge.obj,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.sub, self.pred, self.obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_ordering_is_lexicographic_tuple_order() {
        let a = Triple::new("A", "part_of", "B");
        let b = Triple::new("A", "part_of", "C");
        let c = Triple::new("A", "rdfs:subClassOf", "B");
        let d = Triple::new("B", "is_a", "A");

        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
    }

    #[test]
    fn test_triple_from_edge() {
        let edge = Edge::new("GO:1", "is_a", "GO:2");
        let triple = Triple::from(edge);
        assert_eq!(triple.sub, "GO:1");
        assert_eq!(triple.pred, "is_a");
        assert_eq!(triple.obj, "GO:2");
    }
}
