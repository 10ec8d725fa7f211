//! CLI entry point for the photo-mosaic generator

use clap::Parser;
use std::process::ExitCode;
use tessera::io::cli::{Cli, MosaicRunner};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match MosaicRunner::new(&cli).and_then(|mut runner| runner.run()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
