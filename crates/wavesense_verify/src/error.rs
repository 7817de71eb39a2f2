//! Error types for check configuration.

use thiserror::Error;

/// Errors raised while setting up the behaviour checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// A category name did not match any known claim category.
    #[error("unknown claim category `{name}` (expected one of: {known})")]
    UnknownCategory {
        /// The unrecognised name.
        name: String,
        /// Comma-separated list of the accepted names.
        known: String,
    },
}
