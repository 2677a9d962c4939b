//! Unified error type for the lux-lib crate.
//!
//! [`LuxError`] covers input that is rejected before any `g213-led` call is
//! made: malformed colors, unknown preset aliases, empty categories and
//! out-of-range zones. Failures of the external tool itself are not errors;
//! they travel as [`ExitCode`](crate::tool::ExitCode) values instead.

use std::fmt;

/// Unified error type for lux-lib operations.
#[derive(Debug)]
pub enum LuxError {
    /// Color input is not exactly six hex digits.
    Color(String),
    /// No preset is registered under this alias.
    UnknownPreset(String),
    /// A random pick or rotation was requested over a category with no presets.
    EmptyCategory(String),
    /// Zone index outside 1..=5.
    Zone(u8),
}

impl fmt::Display for LuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuxError::Color(e) => write!(f, "{e}"),
            LuxError::UnknownPreset(name) => write!(f, "Unknown preset '{name}'"),
            LuxError::EmptyCategory(category) => {
                write!(f, "No presets found for category '{category}'")
            }
            LuxError::Zone(zone) => write!(f, "Invalid zone {zone} (expected 1-5)"),
        }
    }
}

impl std::error::Error for LuxError {}

/// Crate-level Result alias using [`LuxError`].
pub type Result<T> = std::result::Result<T, LuxError>;
