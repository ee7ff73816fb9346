use clap::Parser;
use std::process;
use ticker_symbols::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments; no subcommand means generate
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(_stats) => {
            // Success - the summary has already been printed
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
