//! Flat `key=value` properties file read/write support.
//!
//! A properties file holds one setting per line in `key=value` form. Lines
//! whose first non-blank character is `#` are comments; blank lines are
//! ignored. Keys and values are split at the first `=` with no further
//! escaping, so values may themselves contain `=`.

use std::io::{self, BufRead, Write};

/// Writes settings as a properties file to the given writer.
///
/// Emits a single `# <header>` comment line followed by one `key=value`
/// line per entry, in the order given. Callers that need deterministic
/// output should pass entries sorted by key.
pub fn write_properties<W: Write>(
    writer: &mut W,
    header: &str,
    entries: &[(String, String)],
) -> io::Result<()> {
    writeln!(writer, "# {header}")?;
    for (key, value) in entries {
        writeln!(writer, "{key}={value}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Returns an iterator that reads settings from a properties reader.
///
/// Comment lines, blank lines, and lines without a `=` separator are
/// skipped.
pub fn read_properties<R: BufRead>(reader: R) -> PropertiesIter<R> {
    PropertiesIter { reader }
}

/// Iterator over the `(key, value)` entries of a properties file.
pub struct PropertiesIter<R> {
    reader: R,
}

impl<R: BufRead> Iterator for PropertiesIter<R> {
    type Item = io::Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    let content = line.trim_end_matches(['\n', '\r']);
                    let lead = content.trim_start();
                    if lead.is_empty() || lead.starts_with('#') {
                        continue;
                    }
                    // Split at the first '='; separator-less lines are
                    // skipped rather than treated as errors.
                    match content.split_once('=') {
                        Some((key, value)) => {
                            return Some(Ok((key.to_string(), value.to_string())));
                        }
                        None => continue,
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
