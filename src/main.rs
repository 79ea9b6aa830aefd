//! georaster CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, write the raster, and exit
//! with appropriate status. For programmatic use, prefer the library API
//! (`georaster::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
