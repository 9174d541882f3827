use std::path::Path;

use clap::Parser;
use color_eyre::Result;
use cxxbench::{cli::CliArgs, utils::logger::config_logger, worker::run_cxxbench};
use env_logger::Target;

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    // stdout carries the measurements
    config_logger(cli_args.verbose, Target::Stderr)?;
    log::info!("Launching a new cxxbench program");
    run_cxxbench(&cli_args, Path::new("."))?;
    log::info!("Tasks successfully finished");

    Ok(())
}
