//! Product Catalog - Batch Driver
//!
//! Reads a script (`N Q`, N records, Q commands) and writes one line per
//! query response.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use product_catalog::service::run_script;
use product_catalog::{CatalogConfig, DuplicatePolicy, MatchAlgorithm, QueryService};

#[derive(Parser, Debug)]
#[command(name = "product-catalog", about = "Run a product catalog command script")]
struct Args {
    /// Script to read (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// File to write responses to (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Substring algorithm: naive, kmp, boyer-moore
    #[arg(short, long, default_value = "boyer-moore")]
    matcher: MatchAlgorithm,

    /// Fail on inserts against an existing id instead of overwriting
    #[arg(long)]
    reject_duplicates: bool,

    /// Node slots to pre-allocate
    #[arg(long, default_value_t = 1024)]
    capacity: usize,

    /// Print the catalog state root to stderr when done
    #[arg(long)]
    digest: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let policy = if args.reject_duplicates {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Overwrite
    };
    let config = CatalogConfig::new()
        .capacity(args.capacity)
        .algorithm(args.matcher)
        .duplicate_policy(policy);
    let mut service = QueryService::with_config(config)?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    // Responses already written are flushed even when the run fails.
    let result = run_script(reader, &mut service, |response| writeln!(writer, "{response}"));
    writer.flush()?;
    let summary = result.context("batch script aborted")?;

    if summary.skipped > 0 {
        warn!(skipped = summary.skipped, "some input lines were skipped");
    }

    if args.digest {
        let digest = service.digest()?;
        eprintln!(
            "records: {}  state root: {}",
            digest.record_count,
            digest.state_root_hex()
        );
    }

    Ok(())
}
