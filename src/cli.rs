// File: ./src/cli.rs
//! Shared command-line plumbing: logging setup and the common exit-code
//! convention. All three binaries exit 0 on success and 1 on any reported
//! failure.

use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

pub const FAILURE_EXIT_CODE: i32 = 1;

/// Initialize terminal logging. `--verbose` raises the level to `Debug`,
/// which is where per-entry decisions are reported.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // A second init (e.g. in tests) is harmless; keep the first logger.
    let _ = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

/// Report a fatal error and exit with the shared failure code.
pub fn fail(err: &anyhow::Error) -> ! {
    log::error!("{err:#}");
    std::process::exit(FAILURE_EXIT_CODE);
}
