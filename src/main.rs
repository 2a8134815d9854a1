//! Stylecheck CLI entry point.

use clap::Parser;
use stylecheck::cli::{self, Cli, Commands, EXIT_ERROR};

fn main() {
    let Commands::Analyze(args) = Cli::parse().command;

    let exit_code = cli::run_analyze(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        EXIT_ERROR
    });

    std::process::exit(exit_code);
}
