//! The fixed demonstration sequence for the shared settings registry.
//!
//! Obtains the global registry through two handles, stores a pair of
//! settings through the first, reads them back through the second, and
//! verifies both handles refer to the same instance. With `--file`, the
//! settings are additionally saved to disk and reloaded into a fresh
//! registry.

use std::path::Path;

use anyhow::{Context, Result};
use satchel_core::SettingsRegistry;
use tracing::debug;

use crate::cli::Cli;
use crate::output::{DemoView, output_json};

/// Execute the demonstration sequence.
pub fn run(cli: &Cli) -> Result<()> {
    let first = SettingsRegistry::global();
    let second = SettingsRegistry::global();

    first.set("AppName", "My Application");
    first.set("Version", "3.4");

    let same_instance = std::ptr::eq(first, second);

    let reloaded = match &cli.file {
        Some(path) => Some(roundtrip(first, path)?),
        None => None,
    };

    if cli.json {
        output_json(&DemoView {
            settings: second.snapshot(),
            same_instance,
            file: cli.file.as_ref().map(|p| p.display().to_string()),
            reloaded: reloaded.as_ref().map(SettingsRegistry::snapshot),
        });
        return Ok(());
    }

    if !cli.quiet {
        println!("Current settings:");
    }
    for (key, value) in second.snapshot() {
        println!("{} = {}", key, value);
    }
    if !cli.quiet {
        println!("Same instance: {}", same_instance);
    }

    if let (Some(path), Some(reloaded)) = (&cli.file, &reloaded) {
        if !cli.quiet {
            println!();
            println!(
                "Reloaded {} settings from {}",
                reloaded.len(),
                path.display()
            );
        }
        for (key, value) in reloaded.snapshot() {
            println!("{} = {}", key, value);
        }
    }

    Ok(())
}

/// Save `registry` to `path`, then load the file back into a fresh registry.
fn roundtrip(registry: &SettingsRegistry, path: &Path) -> Result<SettingsRegistry> {
    registry
        .save_to_file(path)
        .with_context(|| format!("failed to save settings to {}", path.display()))?;

    let reloaded = SettingsRegistry::new();
    let count = reloaded
        .load_from_file(path)
        .with_context(|| format!("failed to load settings from {}", path.display()))?;
    debug!(count, "round-trip reload complete");

    Ok(reloaded)
}
