//! calsift-flatten: convert extracted JSON records to a flat CSV with a
//! fixed column set.

use calsift::{cli, flatten};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "calsift-flatten",
    version,
    about = "Convert extracted calendar records to CSV"
)]
struct Args {
    /// Path to the input JSON file
    json_file: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = flatten::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    match flatten::flatten_file(&args.json_file, &args.output) {
        Ok(count) => println!(
            "Successfully converted {} events to CSV: {}",
            count,
            args.output.display()
        ),
        Err(err) => cli::fail(&err.into()),
    }
}
