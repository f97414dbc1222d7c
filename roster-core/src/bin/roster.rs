//! Roster command-line tool.
//!
//! ## Usage
//!
//! ```bash
//! # Rank every raw record and write the annotated CSV
//! roster export linkedin.json wellfound.json --output ranked.csv
//!
//! # Merge, shuffle, and filter; prints the matches as JSON
//! roster query linkedin.json wellfound.json --mentions reddit.json --filter spec.json --seed 7
//!
//! # Distinct colleges and industries offered as filter options
//! roster facets linkedin.json wellfound.json
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `roster=info`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use roster_core::io::{export_file, load_mentions, load_sources};
use roster_core::{
    load_config, shuffled, shuffled_seeded, Engine, EngineConfig, FacetCache, FilterSpec,
};

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Reconcile, rank, and query founder profiles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank raw records and write them as CSV
    Export {
        #[command(flatten)]
        sources: Sources,

        /// CSV file to write
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
    /// Merge profiles and print the ones matching a filter
    Query {
        #[command(flatten)]
        sources: Sources,

        /// Mention dataset (JSON array of query/results entries)
        #[arg(long, short = 'm')]
        mentions: Option<PathBuf>,

        /// Filter spec (JSON object); omitted means no filter
        #[arg(long, short = 'f')]
        filter: Option<PathBuf>,

        /// Seed for the display shuffle; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the distinct colleges and industries of the merged set
    Facets {
        #[command(flatten)]
        sources: Sources,
    },
}

#[derive(Args, Debug)]
struct Sources {
    /// Source documents (JSON arrays of records), concatenated in order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Engine config (TOML); defaults apply when omitted
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

impl Sources {
    fn engine_config(&self) -> Result<EngineConfig> {
        match &self.config {
            Some(path) => Ok(load_config(path)?),
            None => Ok(EngineConfig::default()),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("roster=info".parse()?))
        .init();

    match Cli::parse().command {
        Command::Export { sources, output } => export(&sources, &output),
        Command::Query {
            sources,
            mentions,
            filter,
            seed,
        } => query(&sources, mentions.as_deref(), filter.as_deref(), seed),
        Command::Facets { sources } => facets(&sources),
    }
}

fn export(sources: &Sources, output: &Path) -> Result<()> {
    let config = sources.engine_config()?;
    let records = load_sources(&sources.inputs).context("Failed to load source documents")?;
    let rows = export_file(&records, &config.weights, output)
        .with_context(|| format!("Failed to export {}", output.display()))?;
    info!(rows, output = %output.display(), "Export complete");
    Ok(())
}

fn query(
    sources: &Sources,
    mentions: Option<&Path>,
    filter: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    let config = sources.engine_config()?;
    let mut engine = Engine::new(config);
    if let Some(path) = mentions {
        let entries = load_mentions(path)
            .with_context(|| format!("Failed to load mentions: {}", path.display()))?;
        engine = engine.with_mentions(entries);
    }

    let spec = match filter {
        Some(path) => read_filter(path)?,
        None => FilterSpec::default(),
    };

    let records = load_sources(&sources.inputs).context("Failed to load source documents")?;
    let (profiles, stats) = engine.merge_with_stats(&records);
    info!(%stats, "Merged sources");

    let profiles = match seed {
        Some(seed) => shuffled_seeded(&profiles, seed),
        None => shuffled(&profiles, &mut rand::thread_rng()),
    };

    let output = engine.query(&profiles, &spec);
    info!(count = output.len(), "Query complete");

    let body = serde_json::json!({
        "count": output.len(),
        "results": output,
    });
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn facets(sources: &Sources) -> Result<()> {
    let config = sources.engine_config()?;
    let engine = Engine::new(config);
    let records = load_sources(&sources.inputs).context("Failed to load source documents")?;
    let profiles = engine.merge(&records);

    let mut cache = FacetCache::from_config(engine.config());
    let facets = cache.get_or_collect(&profiles);
    println!("{}", serde_json::to_string_pretty(facets)?);
    Ok(())
}

fn read_filter(path: &Path) -> Result<FilterSpec> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read filter spec: {}", path.display()))?;
    let spec = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse filter spec: {}", path.display()))?;
    Ok(spec)
}
