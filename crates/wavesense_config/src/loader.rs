//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::EvalConfig;
use std::path::Path;

/// The file name looked up inside an artifacts directory.
pub const CONFIG_FILE_NAME: &str = "wavesense.toml";

/// Loads and validates a configuration file at an explicit path.
///
/// A missing file is an error here; use [`discover_config`] for the
/// fall-back-to-defaults behaviour.
pub fn load_config(path: &Path) -> Result<EvalConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Loads `<dir>/wavesense.toml` if present, otherwise returns the defaults.
pub fn discover_config(dir: &Path) -> Result<EvalConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        load_config(&path)
    } else {
        Ok(EvalConfig::default())
    }
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<EvalConfig, ConfigError> {
    let config: EvalConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates ranges so the quality index stays within [0, 1].
fn validate_config(config: &EvalConfig) -> Result<(), ConfigError> {
    if !(1..=64).contains(&config.checks.width) {
        return Err(ConfigError::ValidationError(format!(
            "checks.width must be in 1..=64, got {}",
            config.checks.width
        )));
    }

    let score = &config.score;
    for (name, weight) in [
        ("structural", score.structural),
        ("behavioral", score.behavioral),
        ("hypothesis", score.hypothesis),
        ("clarity", score.clarity),
    ] {
        if !(0.0..=1.0).contains(&weight) {
            return Err(ConfigError::ValidationError(format!(
                "score.{name} must be in [0, 1], got {weight}"
            )));
        }
    }
    if score.weight_sum() > 1.0 + 1e-9 {
        return Err(ConfigError::ValidationError(format!(
            "score weights must sum to at most 1, got {}",
            score.weight_sum()
        )));
    }
    if score.clarity_penalty.is_nan() || score.clarity_penalty < 0.0 {
        return Err(ConfigError::ValidationError(
            "score.clarity_penalty must be non-negative".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&score.missing_run_command_factor) {
        return Err(ConfigError::ValidationError(
            "score.missing_run_command_factor must be in [0, 1]".to_string(),
        ));
    }

    if config.coverage.fair > config.coverage.good {
        return Err(ConfigError::ValidationError(format!(
            "coverage.fair ({}) must not exceed coverage.good ({})",
            config.coverage.fair, config.coverage.good
        )));
    }
    Ok(())
}
