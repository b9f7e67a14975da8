//! Game Table Binary
//!
//! Builds one of the built-in games (or one loaded from JSON) and prints
//! its analysis as a JSON report.

use clap::Parser;
use gametable::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    gametable::log(args.level(), args.log_file)?;
    args.run()
}
