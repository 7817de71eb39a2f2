//! The quality report produced by one evaluation.
//!
//! Field order is the serialized key order of the JSON report.

use serde::Serialize;
use wavesense_verify::ClaimCategory;
use wavesense_wave::SignalKey;

use crate::document::{ClarityStats, HypothesisStats};

/// The complete result of evaluating one artifacts directory.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QualityReport {
    /// Claim counts and evidence linkage.
    pub structural: StructuralStats,
    /// Hypothesis resolution markers.
    pub hypothesis: HypothesisStats,
    /// Inventory of the cited waveform dumps.
    pub wave_metrics: WaveMetrics,
    /// One verdict per (claim, category) pair.
    pub behavioral_claim_checks: Vec<VerificationVerdict>,
    /// Verified verdicts over all verdicts, or 0 with no verdicts.
    pub behavioral_verified_rate: f64,
    /// Hedging-word density of the narrative.
    pub clarity: ClarityStats,
    /// The weighted quality index in `[0, 1]`.
    pub quality_index: f64,
}

/// How many claims there are and how many cite evidence.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StructuralStats {
    /// Number of extracted claims.
    pub features: usize,
    /// Claims citing at least one waveform.
    pub features_with_evidence: usize,
    /// `features_with_evidence / features`, or 0 with no claims.
    pub evidence_link_rate: f64,
    /// Whether the simulator command artifact exists.
    pub run_cmd_present: bool,
}

/// Inventory of the waveform dumps cited across the narrative.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WaveMetrics {
    /// File names of the distinct cited dumps, in reference order.
    pub referenced_wave_files: Vec<String>,
    /// Cited references not present on disk, sorted.
    pub missing_references: Vec<String>,
    /// Canonical signals found in any parsed dump, sorted by name.
    pub unique_signals_seen: Vec<SignalKey>,
    /// Mean value-change count over every parsed (dump, signal) series.
    pub avg_signal_toggles: f64,
}

/// The verdict for one (claim, category) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerificationVerdict {
    /// The claim text.
    pub feature_text: String,
    /// The category the claim was classified into.
    pub category: ClaimCategory,
    /// Whether any cited dump verified the category.
    pub verified: bool,
    /// Whether any cited dump exercised the category's scenario at all.
    pub scenario_observed: bool,
    /// The claim's cited references.
    pub refs: Vec<String>,
}
