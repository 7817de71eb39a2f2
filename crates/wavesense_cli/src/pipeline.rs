//! Shared helpers for the CLI commands: configuration lookup and
//! diagnostic output.

use std::path::Path;

use tracing::debug;
use wavesense_config::{discover_config, load_config, ChecksConfig, ConfigError, EvalConfig};
use wavesense_diagnostics::{DiagnosticRenderer, DiagnosticSink, TerminalRenderer};

use crate::GlobalArgs;

/// Loads the configuration for a command.
///
/// `--config` is loaded strictly. Otherwise `<dir>/wavesense.toml` is used
/// when `dir` is given and the file exists, else the defaults.
pub fn resolve_config(global: &GlobalArgs, dir: Option<&Path>) -> Result<EvalConfig, ConfigError> {
    match (&global.config, dir) {
        (Some(path), _) => {
            debug!(path = %path.display(), "loading configuration");
            load_config(path)
        }
        (None, Some(dir)) => discover_config(dir),
        (None, None) => Ok(EvalConfig::default()),
    }
}

/// Adds `--allow` names from the command line to the configured list.
pub fn merge_allow(checks: &mut ChecksConfig, allow: &[String]) {
    for name in allow {
        if !checks.allow.contains(name) {
            checks.allow.push(name.clone());
        }
    }
}

/// Drains `sink` and prints its diagnostics to stderr.
///
/// Under `--quiet` only errors are shown.
pub fn print_diagnostics(sink: &DiagnosticSink, global: &GlobalArgs) {
    let renderer = TerminalRenderer::new(global.color);
    for diag in sink.take_all() {
        if global.quiet && !diag.severity.is_error() {
            continue;
        }
        eprint!("{}", renderer.render(&diag));
    }
}

#[cfg(test)]
pub(crate) fn quiet_global() -> GlobalArgs {
    GlobalArgs {
        quiet: true,
        verbose: false,
        color: false,
        config: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let global = GlobalArgs {
            config: Some(dir.path().join("nope.toml")),
            ..quiet_global()
        };
        assert!(matches!(
            resolve_config(&global, Some(dir.path())),
            Err(ConfigError::IoError { .. })
        ));
    }

    #[test]
    fn discovers_config_in_artifacts_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("wavesense.toml"), "[checks]\nwidth = 16\n").unwrap();
        let config = resolve_config(&quiet_global(), Some(dir.path())).unwrap();
        assert_eq!(config.checks.width, 16);
    }

    #[test]
    fn defaults_without_any_file() {
        let config = resolve_config(&quiet_global(), None).unwrap();
        assert_eq!(config.checks.width, 8);
    }

    #[test]
    fn allow_merge_skips_duplicates() {
        let mut checks = ChecksConfig {
            allow: vec!["wraparound".into()],
            ..ChecksConfig::default()
        };
        merge_allow(&mut checks, &["wraparound".into(), "increment".into()]);
        assert_eq!(checks.allow, vec!["wraparound", "increment"]);
    }
}
