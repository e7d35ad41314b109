//! HTTP fetcher for published obograph documents.

use super::obograph::GraphDocument;
use super::{FetchError, FetchOutcome, GraphFetcher};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

/// Default base URL for per-prefix obograph documents.
pub const DEFAULT_BASE_URL: &str = "http://purl.obolibrary.org/obo";

/// Blocking HTTP client resolving `{base_url}/{prefix}.json`.
///
/// No retries, caching, or rate limiting; each fetch blocks until the
/// document arrives or the request-level timeout fires.
pub struct ObographClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ObographClient {
    /// Create a client with the given base URL and per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ontosweep/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// URL of the obograph document for a prefix.
    pub fn document_url(&self, prefix: &str) -> String {
        format!("{}/{}.json", self.base_url, prefix)
    }
}

impl GraphFetcher for ObographClient {
    fn fetch(&self, prefix: &str) -> Result<FetchOutcome, FetchError> {
        let url = self.document_url(prefix);
        debug!("GET {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)?
            .text()?;

        let document = GraphDocument::from_json_str(&body)?;
        if document.graphs.is_empty() {
            Ok(FetchOutcome::Empty)
        } else {
            Ok(FetchOutcome::Graphs(document.graphs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url() {
        let client = ObographClient::new(DEFAULT_BASE_URL, Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.document_url("go"),
            "http://purl.obolibrary.org/obo/go.json"
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let client =
            ObographClient::new("http://example.org/obo/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.document_url("chebi"), "http://example.org/obo/chebi.json");
    }
}
