//! Obograph JSON document model and edge standardization.
//!
//! Only the slice of the obograph schema this tool reads is modeled: the
//! graph list and each graph's edges. Standardization here is deliberately
//! thin, CURIE-contracting OBO PURLs and deduplicating within a graph;
//! anything it does not recognize passes through unchanged and the
//! aggregator trusts it as given.

use crate::models::Edge;
use serde::Deserialize;
use std::collections::BTreeSet;

const OBO_PURL: &str = "http://purl.obolibrary.org/obo/";

/// Top-level obograph document: a list of graphs.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub graphs: Vec<Graph>,
}

impl GraphDocument {
    /// Parse a document from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A single named graph and its raw edge list.
#[derive(Debug, Clone, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

/// An edge as serialized in the obograph document, before standardization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEdge {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub pred: String,
    #[serde(default)]
    pub obj: String,
}

impl Graph {
    /// Standardize the raw edges: contract identifiers, drop edges with any
    /// missing field, deduplicate within this graph preserving first-seen
    /// order.
    pub fn standardize(&self) -> Vec<Edge> {
        let mut seen: BTreeSet<(String, String, String)> = BTreeSet::new();
        let mut edges = Vec::new();
        for raw in &self.edges {
            let sub = contract(&raw.sub);
            let pred = contract(&raw.pred);
            let obj = contract(&raw.obj);
            if sub.is_empty() || pred.is_empty() || obj.is_empty() {
                continue;
            }
            let key = (sub.clone(), pred.clone(), obj.clone());
            if seen.insert(key) {
                edges.push(Edge { sub, pred, obj });
            }
        }
        edges
    }
}

/// Contract an OBO PURL (`.../obo/GO_0008150`) to CURIE form (`GO:0008150`).
/// Identifiers in any other shape pass through untouched.
fn contract(identifier: &str) -> String {
    let trimmed = identifier.trim();
    if let Some(local) = trimmed.strip_prefix(OBO_PURL) {
        if let Some((prefix, accession)) = local.split_once('_') {
            if !prefix.is_empty() && !accession.is_empty() && !prefix.contains('/') {
                return format!("{}:{}", prefix, accession);
            }
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_obo_purl() {
        assert_eq!(
            contract("http://purl.obolibrary.org/obo/GO_0008150"),
            "GO:0008150"
        );
        assert_eq!(
            contract("http://purl.obolibrary.org/obo/BFO_0000050"),
            "BFO:0000050"
        );
    }

    #[test]
    fn test_contract_passthrough() {
        assert_eq!(contract("is_a"), "is_a");
        assert_eq!(contract("GO:0008150"), "GO:0008150");
        assert_eq!(
            contract("http://www.w3.org/2000/01/rdf-schema#subClassOf"),
            "http://www.w3.org/2000/01/rdf-schema#subClassOf"
        );
        // PURL without an underscore-separated accession stays as-is.
        assert_eq!(
            contract("http://purl.obolibrary.org/obo/go.owl"),
            "http://purl.obolibrary.org/obo/go.owl"
        );
    }

    #[test]
    fn test_standardize_contracts_and_dedups() {
        let document = GraphDocument::from_json_str(
            r#"{
                "graphs": [{
                    "id": "http://purl.obolibrary.org/obo/go.json",
                    "edges": [
                        {"sub": "http://purl.obolibrary.org/obo/GO_1", "pred": "is_a", "obj": "http://purl.obolibrary.org/obo/GO_2"},
                        {"sub": "http://purl.obolibrary.org/obo/GO_1", "pred": "is_a", "obj": "http://purl.obolibrary.org/obo/GO_2"},
                        {"sub": "GO:3", "pred": "", "obj": "GO:4"}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let edges = document.graphs[0].standardize();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0], Edge::new("GO:1", "is_a", "GO:2"));
    }

    #[test]
    fn test_empty_document_has_no_graphs() {
        let document = GraphDocument::from_json_str("{}").unwrap();
        assert!(document.graphs.is_empty());
    }
}
