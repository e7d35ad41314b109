//! ontosweep - OBO Foundry-wide ontology graph aggregator
//!
//! A CLI tool that sweeps every eligible ontology prefix in the registry,
//! extracts subject-predicate-object edges from the published obograph
//! documents, and writes a deduplicated triple table with provenance plus
//! predicate usage summaries.
//!
//! Exit codes:
//!   0 - Success (all outputs written, or dry-run/init-config path)
//!   1 - Fatal error (registry load, output write, config parse)

use anyhow::{Context, Result};
use ontosweep::aggregate::run_aggregation;
use ontosweep::cli::Args;
use ontosweep::config::Config;
use ontosweep::fetch::ObographClient;
use ontosweep::registry::Registry;
use ontosweep::report::{write_reports, ReportPaths};
use ontosweep::selector::select_prefixes;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    init_logging(&args);

    info!("ontosweep v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("Run failed: {:#}", e);
        eprintln!("\nError: {:#}", e);
        std::process::exit(1);
    }
}

/// Handle --init-config: generate a default .ontosweep.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".ontosweep.toml");

    if path.exists() {
        anyhow::bail!(".ontosweep.toml already exists; remove it first or edit it manually");
    }

    std::fs::write(path, Config::default_toml()).context("Failed to write .ontosweep.toml")?;
    println!("Created .ontosweep.toml with default settings.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete sweep workflow.
fn run(args: Args) -> Result<()> {
    let start_time = Instant::now();

    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let timeout = Duration::from_secs(config.fetch.timeout_seconds);

    // Step 1: Load the registry. A failure here is fatal.
    println!("Loading registry: {}", config.registry.source);
    let registry = Registry::load_source(&config.registry.source, timeout)?;
    info!("Registry contains {} prefixes", registry.len());

    // Step 2: Select the prefixes to process.
    let skip = config.skip_set();
    let mut prefixes = select_prefixes(&registry, &skip, args.minimum.as_deref());
    if let Some(limit) = args.limit {
        prefixes.truncate(limit);
    }
    println!("Selected {} prefixes", prefixes.len());

    if args.dry_run {
        for prefix in &prefixes {
            println!("  {}", prefix);
        }
        println!("\nDry run complete. Nothing was fetched.");
        return Ok(());
    }

    if prefixes.is_empty() {
        warn!("No eligible prefixes; outputs will be empty");
    }

    // Step 3: Fetch and aggregate, sequentially, skipping failed prefixes.
    let client = ObographClient::new(&config.fetch.base_url, timeout)?;
    println!("Fetching obographs from {}", config.fetch.base_url);
    let aggregate = run_aggregation(&prefixes, &client);

    // Step 4: Write the four report files. Failures here are fatal.
    let output_dir = Path::new(&config.report.output_dir);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
    let paths = ReportPaths::in_dir(output_dir);
    let summary = write_reports(&aggregate, &registry, &paths, config.report.sample_rows)?;

    let duration = start_time.elapsed().as_secs_f64();
    println!("\nSweep complete in {:.1}s", duration);
    println!("   Triples:    {}", summary.triples);
    println!("   Predicates: {}", summary.predicates);
    println!("   Output:     {}", output_dir.display());

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded config from .ontosweep.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
