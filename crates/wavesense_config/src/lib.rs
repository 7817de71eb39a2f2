//! Parsing and validation of `wavesense.toml` evaluation settings.
//!
//! Every constant the evaluator depends on (counter bit width, score weights,
//! the hedging-word set, coverage thresholds, artifact file names) lives in
//! one immutable [`EvalConfig`] value that callers thread through the
//! pipeline. A missing file means [`EvalConfig::default`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{discover_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
