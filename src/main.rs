//! hc2cce binary entrypoint
//!
//! Thin wrapper over the `cli` module: parse arguments, initialize
//! logging, run the conversion, and exit nonzero on the first error.

use clap::Parser;

use hc2cce::cli::{self, CliArgs};

fn main() {
    let args = CliArgs::parse();

    // --verbose turns on the progress messages; errors are always shown.
    let level = if args.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::new().filter_level(level).init();

    if let Err(e) = cli::run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
