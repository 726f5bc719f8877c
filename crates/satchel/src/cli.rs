//! Clap CLI definitions for the `satchel` command.

use std::path::PathBuf;

use clap::Parser;

/// satchel -- Shared settings registry demonstration.
///
/// Runs a fixed sequence against the process-wide settings registry:
/// obtains the shared handle twice, stores a pair of settings through the
/// first handle, reads them back through the second, and reports whether
/// both handles refer to the same instance.
#[derive(Parser, Debug)]
#[command(
    name = "satchel",
    about = "Shared settings registry demonstration",
    version
)]
pub struct Cli {
    /// Save the settings to this properties file and read them back into a
    /// fresh registry.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress non-essential output (print settings lines only).
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
