//! calsift-filter: keep only the events of an ICS file that start within a
//! date range, preserving calendar metadata and timezone definitions.

use calsift::cli;
use calsift::filter::{self, FilterStats};
use chrono::Days;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "calsift-filter",
    version,
    about = "Filter an ICS calendar file to a date range"
)]
struct Args {
    /// Input ICS calendar file
    #[arg(short, long, default_value = "calendar.ics")]
    input_file: PathBuf,

    /// Output filtered ICS file
    #[arg(short, long, default_value = "filtered_calendar.ics")]
    output_file: PathBuf,

    /// Keep only events on or after this date (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    date_from: String,

    /// Number of days to include after the start date (default: all days)
    #[arg(short = 'D', long)]
    duration: Option<u32>,

    /// Print per-event keep/remove decisions
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    match run(&args) {
        Ok(stats) => report(&args, stats),
        Err(err) => cli::fail(&err),
    }
}

fn run(args: &Args) -> anyhow::Result<FilterStats> {
    let stats = filter::filter_file(
        &args.input_file,
        &args.output_file,
        &args.date_from,
        args.duration,
    )?;
    Ok(stats)
}

fn report(args: &Args, stats: FilterStats) {
    let range = match args.duration.and_then(|days| {
        filter::parse_from_date(&args.date_from)
            .ok()?
            .checked_add_days(Days::new(u64::from(days)))
    }) {
        Some(to) => format!("from {} to {}", args.date_from, to),
        None => format!("from {} onward", args.date_from),
    };
    println!(
        "Successfully filtered calendar. Kept {} of {} events {}.",
        stats.kept, stats.total, range
    );
}
