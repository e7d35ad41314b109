//! OBO Foundry-wide ontology graph aggregation.
//!
//! The pipeline is strictly sequential: select eligible prefixes from the
//! registry, fetch and standardize each prefix's obograph document, fold
//! every edge into an in-memory aggregate, and write four deterministic
//! report files.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod models;
pub mod registry;
pub mod report;
pub mod selector;
