//! Registry error types.

/// Errors that can occur during registry persistence.
///
/// `set`/`get` on the registry never fail; the only fallible operations are
/// saving to and loading from a settings file, and both surface plain I/O
/// failures. Malformed lines in a settings file are skipped by the parser
/// and are not errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The settings file could not be opened, read, or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the registry crate.
pub type Result<T> = std::result::Result<T, RegistryError>;
