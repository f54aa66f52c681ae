//! # Verdant Entry Point
//!
//! Parses arguments and hands off to [`verdant_cli::run`].

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = verdant_cli::Args::parse();

    match verdant_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("verdant: {}", err);
            ExitCode::FAILURE
        }
    }
}
