//! Command-line interface argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// ontosweep - OBO Foundry-wide ontology graph aggregator
///
/// Sweeps every eligible prefix in the registry, extracts all
/// subject-predicate-object edges from the published obograph documents,
/// and writes a deduplicated triple table with provenance plus two
/// predicate usage summaries.
///
/// Examples:
///   ontosweep
///   ontosweep --minimum mondo
///   ontosweep --registry registry.json --output-dir out --limit 5
///   ontosweep --dry-run
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Inclusive lexicographic minimum prefix
    ///
    /// Only prefixes sorting at or after this value are processed. Lets an
    /// interrupted run resume partway through the sequence.
    #[arg(short, long, value_name = "PREFIX")]
    pub minimum: Option<String>,

    /// Maximum number of prefixes to process
    #[arg(long, value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Registry source (URL or local JSON path)
    ///
    /// Overrides the config file setting.
    #[arg(short, long, value_name = "SOURCE", env = "ONTOSWEEP_REGISTRY")]
    pub registry: Option<String>,

    /// Directory the output files are written into
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .ontosweep.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List the selected prefixes without fetching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .ontosweep.toml configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err("Limit must be at least 1".to_string());
            }
        }

        if let Some(ref minimum) = self.minimum {
            if minimum.is_empty() {
                return Err("Minimum prefix must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
