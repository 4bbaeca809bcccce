//! # collision-extract
//!
//! Command-line front end for extracting fixed-width collision event records from
//! ATLAS PHYSLITE Parquet exports.
//!
//! ## Usage
//!
//! ```bash
//! # Extract up to 100000 events into collision_data.bin
//! collision-extract extract DAOD_PHYSLITE.*.parquet
//!
//! # Inspect and export the result
//! collision-extract info collision_data.bin
//! collision-extract export-csv collision_data.bin
//!
//! # Generate synthetic inputs
//! collision-extract demo demo_inputs --files 2 --events 500
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
