//! Error types for stringfmtlib

use thiserror::Error;

/// Errors that can occur while building a formatter configuration.
///
/// Formatting itself is total: once a configuration exists, every
/// formatting call succeeds. The only failure point is construction.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Radix outside the supported 2..=36 range
    #[error("radix must be between 2 and 36, got {0}")]
    InvalidRadix(u32),
}
