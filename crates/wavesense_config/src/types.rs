//! Configuration types deserialized from `wavesense.toml`.

use serde::Deserialize;

/// The top-level evaluation configuration.
///
/// Every section is optional; omitted sections and fields fall back to the
/// defaults documented on each type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Names of the artifact files inside the artifacts directory.
    pub artifacts: ArtifactsConfig,
    /// Settings shared by the behavioural checks.
    pub checks: ChecksConfig,
    /// Quality-index weights and clarity scoring.
    pub score: ScoreConfig,
    /// Coverage status thresholds.
    pub coverage: CoverageConfig,
}

/// File names, relative to the artifacts directory, that the evaluator reads and writes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// The narrative document of bullet-point claims.
    pub mental_model: String,
    /// The hypothesis document carrying resolution markers.
    pub hypotheses: String,
    /// The recorded simulator command; only its presence matters.
    pub run_command: String,
    /// Default destination of the machine-readable report.
    pub json_report: String,
    /// Default destination of the human-readable report.
    pub markdown_report: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            mental_model: "mental_model.md".to_string(),
            hypotheses: "hypotheses.md".to_string(),
            run_command: "run.cmd".to_string(),
            json_report: "eval_report.json".to_string(),
            markdown_report: "eval_report.md".to_string(),
        }
    }
}

/// Settings for the temporal behaviour checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Bit width of the counter under test, used by the increment and
    /// wraparound checks. Defaults to 8.
    pub width: u32,
    /// Claim categories to skip entirely (e.g. `"wraparound"`).
    pub allow: Vec<String>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            width: 8,
            allow: Vec::new(),
        }
    }
}

/// Weights and penalties that fold the sub-scores into the quality index.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Weight of the evidence-link rate.
    pub structural: f64,
    /// Weight of the behavioural-verified rate.
    pub behavioral: f64,
    /// Weight of the hypothesis-validated ratio.
    pub hypothesis: f64,
    /// Weight of the clarity score.
    pub clarity: f64,
    /// Multiplier applied to the uncertainty ratio before subtracting from 1.
    pub clarity_penalty: f64,
    /// Factor applied to the structural score when no run command was recorded.
    pub missing_run_command_factor: f64,
    /// Lower-case words counted as hedging in the narrative.
    pub hedging_words: Vec<String>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            structural: 0.2,
            behavioral: 0.5,
            hypothesis: 0.2,
            clarity: 0.1,
            clarity_penalty: 5.0,
            missing_run_command_factor: 0.8,
            hedging_words: [
                "maybe", "likely", "probably", "might", "could", "unsure", "assume", "guess",
                "appears",
            ]
            .iter()
            .map(|w| w.to_string())
            .collect(),
        }
    }
}

impl ScoreConfig {
    /// Sum of the four sub-score weights.
    pub fn weight_sum(&self) -> f64 {
        self.structural + self.behavioral + self.hypothesis + self.clarity
    }
}

/// Percent thresholds used to grade line and branch coverage.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// At or above this percentage coverage is graded good.
    pub good: f64,
    /// At or above this percentage (and below `good`) coverage is graded fair.
    pub fair: f64,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            good: 95.0,
            fair: 80.0,
        }
    }
}
