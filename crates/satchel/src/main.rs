//! `satchel` -- shared settings registry demonstration.
//!
//! This is the entry point for the satchel demonstration binary. It parses
//! CLI arguments with clap, sets up logging, and runs the fixed
//! demonstration sequence against the process-wide settings registry.

mod cli;
mod demo;
mod output;

use clap::Parser;

use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("satchel=debug,satchel_core=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Handle errors: print message and exit with code 1
    if let Err(e) = demo::run(&cli) {
        // For JSON mode, output error as JSON
        if cli.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
