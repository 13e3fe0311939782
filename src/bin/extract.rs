//! calsift-extract: convert the events of an ICS file into normalized JSON
//! records, sorted by start time.

use anyhow::Context;
use calsift::config::Config;
use calsift::{cli, extract, storage};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "calsift-extract",
    version,
    about = "Convert an ICS calendar file to JSON records"
)]
struct Args {
    /// Path to the ICS file
    ics_file: PathBuf,

    /// Output JSON file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// TOML configuration file (internal domains, text policy)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    if let Err(err) = run(&args) {
        cli::fail(&err);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let records = extract::extract_file(&args.ics_file, &config)?;
    log::debug!("extracted {} records", records.len());

    let json = if args.pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    }
    .context("Failed to serialize records")?;

    match &args.output {
        Some(path) => storage::atomic_write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
