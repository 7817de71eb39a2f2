//! Error types for evaluation.

use std::path::PathBuf;

use wavesense_verify::VerifyError;

/// Errors that stop an evaluation from producing or saving a report.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// The artifacts directory does not exist or is not a directory.
    #[error("artifacts directory {} not found", path.display())]
    ArtifactsNotFound {
        /// The directory that was requested.
        path: PathBuf,
    },

    /// An input file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A report file could not be written.
    #[error("failed to write report {}: {source}", path.display())]
    WriteError {
        /// The destination that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The check configuration is invalid.
    #[error(transparent)]
    Checks(#[from] VerifyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dir_names_path() {
        let err = EvalError::ArtifactsNotFound {
            path: PathBuf::from("temp_artifacts"),
        };
        assert_eq!(err.to_string(), "artifacts directory temp_artifacts not found");
    }

    #[test]
    fn write_error_names_path() {
        let err = EvalError::WriteError {
            path: PathBuf::from("/ro/eval_report.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err
            .to_string()
            .starts_with("failed to write report /ro/eval_report.json:"));
    }
}
