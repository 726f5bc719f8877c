//! Shared settings registry for the satchel system.
//!
//! Provides [`SettingsRegistry`], a process-wide string key/value store with
//! persistence to a flat `key=value` properties file. The global instance is
//! obtained with [`SettingsRegistry::global`] and is created exactly once per
//! process, on first access.

pub mod error;
pub mod properties;
pub mod registry;

// Re-exports for convenience.
pub use error::{RegistryError, Result};
pub use registry::SettingsRegistry;
