//! Error types for coverage loading.

use std::path::PathBuf;

/// Errors that can occur when reading a coverage tracefile.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    /// The tracefile could not be read.
    #[error("failed to read coverage file {}: {source}", path.display())]
    ReadError {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
