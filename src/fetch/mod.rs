//! Per-prefix graph fetching.
//!
//! The pipeline consumes fetching through the [`GraphFetcher`] trait so the
//! aggregation loop can be driven by the HTTP client in production and by a
//! stub in tests. The three outcomes the loop distinguishes (graphs present,
//! well-formed but empty, hard failure) are explicit in the types.

pub mod client;
pub mod obograph;

pub use client::ObographClient;

use obograph::Graph;
use thiserror::Error;

/// A hard per-prefix fetch failure. Both variants are handled identically by
/// the aggregation loop (log and skip), but carry distinct diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport or I/O failure reaching the source document.
    #[error("I/O failure: {0}")]
    Io(String),

    /// The response could not be decoded as an obograph document.
    #[error("decode failure: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// A successful fetch: either one or more graphs, or a well-formed document
/// containing none.
#[derive(Debug)]
pub enum FetchOutcome {
    Graphs(Vec<Graph>),
    Empty,
}

/// Capability to fetch the graphs published for a prefix.
pub trait GraphFetcher {
    fn fetch(&self, prefix: &str) -> Result<FetchOutcome, FetchError>;
}
