//! Output formatting helpers for the `satchel` CLI.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

/// JSON view of a demonstration run.
///
/// `file` and `reloaded` are present only when `--file` was given.
#[derive(Serialize)]
pub struct DemoView {
    /// All settings in the shared registry, sorted by key.
    pub settings: BTreeMap<String, String>,
    /// Whether both global handles referred to the same instance.
    pub same_instance: bool,
    /// Path the settings were saved to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Settings read back from the file into a fresh registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reloaded: Option<BTreeMap<String, String>>,
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}
