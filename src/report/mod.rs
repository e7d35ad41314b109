//! Report generation: the four deterministic output artifacts.
//!
//! All writers iterate the aggregate's `BTreeMap`s directly, so row order is
//! the sorted key order by construction and repeated runs over identical
//! aggregates produce byte-identical files.

use crate::aggregate::EdgeAggregate;
use crate::registry::Registry;
use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default number of rows mirrored into the uncompressed sample.
pub const DEFAULT_SAMPLE_ROWS: usize = 10;

/// Locations of the four artifacts, all inside one output directory.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Gzip-compressed full triple table.
    pub graph: PathBuf,
    /// Uncompressed sample of the first rows of the full table.
    pub sample: PathBuf,
    /// Predicate -> per-prefix counter, as JSON.
    pub summary_detailed: PathBuf,
    /// One-row-per-predicate tabular summary.
    pub summary: PathBuf,
}

impl ReportPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            graph: dir.join("graph.tsv.gz"),
            sample: dir.join("graph_sample.tsv"),
            summary_detailed: dir.join("relation_summary_detailed.json"),
            summary: dir.join("relation_summary.tsv"),
        }
    }
}

/// Counts reported back for the end-of-run banner.
#[derive(Debug, Clone, Copy)]
pub struct ReportSummary {
    pub triples: usize,
    pub predicates: usize,
}

/// Write all four artifacts. Filesystem failures here are fatal and
/// propagate; there is no partial-output recovery.
pub fn write_reports(
    aggregate: &EdgeAggregate,
    registry: &Registry,
    paths: &ReportPaths,
    sample_rows: usize,
) -> Result<ReportSummary> {
    write_triple_table(aggregate, &paths.graph, &paths.sample, sample_rows)?;
    write_detailed_summary(aggregate, &paths.summary_detailed)?;
    write_tabular_summary(aggregate, registry, &paths.summary)?;

    Ok(ReportSummary {
        triples: aggregate.num_triples(),
        predicates: aggregate.num_predicates(),
    })
}

/// Write the compressed full table and its uncompressed sample in a single
/// pass, so the sample is always a byte-for-byte head of the table.
fn write_triple_table(
    aggregate: &EdgeAggregate,
    graph_path: &Path,
    sample_path: &Path,
    sample_rows: usize,
) -> Result<()> {
    info!(
        "writing {} triples to {}",
        aggregate.num_triples(),
        graph_path.display()
    );

    let graph_file = File::create(graph_path)
        .with_context(|| format!("Failed to create {}", graph_path.display()))?;
    let mut graph = GzEncoder::new(BufWriter::new(graph_file), Compression::default());

    let sample_file = File::create(sample_path)
        .with_context(|| format!("Failed to create {}", sample_path.display()))?;
    let mut sample = BufWriter::new(sample_file);

    for (i, (triple, sources)) in aggregate.triples.iter().enumerate() {
        let row = format!(
            "{}\t{}\t{}\t{}",
            triple.sub,
            triple.pred,
            triple.obj,
            sources.join("|")
        );
        writeln!(graph, "{}", row)?;
        if i < sample_rows {
            writeln!(sample, "{}", row)?;
        }
    }

    graph
        .finish()
        .context("Failed to finalize gzip stream")?
        .flush()?;
    sample.flush()?;
    Ok(())
}

/// Serialize the full predicate -> (prefix -> count) structure. `BTreeMap`
/// keys are already sorted, and serde_json's pretty printer uses a stable
/// 2-space indent, so the file is reproducible.
fn write_detailed_summary(aggregate: &EdgeAggregate, path: &Path) -> Result<()> {
    info!("writing detailed predicate summary to {}", path.display());
    let json = serde_json::to_string_pretty(&aggregate.counters)
        .context("Failed to serialize predicate counters")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// One row per predicate: predicate, whether it is a recognizable compact
/// identifier, total edge count, and the sorted set of contributing
/// prefixes.
fn write_tabular_summary(
    aggregate: &EdgeAggregate,
    registry: &Registry,
    path: &Path,
) -> Result<()> {
    info!("writing predicate summary to {}", path.display());
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for (pred, counter) in &aggregate.counters {
        let total: u64 = counter.values().sum();
        let prefixes: Vec<&str> = counter.keys().map(String::as_str).collect();
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            pred,
            registry.is_normalizable_curie(pred),
            total,
            prefixes.join("|")
        )?;
    }

    out.flush()?;
    Ok(())
}
