//! Mental-model evaluation.
//!
//! Reads an artifacts directory holding a narrative document of bullet-point
//! claims, a hypothesis document and the waveform dumps the claims cite, then
//! scores the narrative against the evidence:
//!
//! 1. [`extract_claims`] pulls every `- ` bullet and its `waves/*.txt` citations.
//! 2. [`Evidence`] parses each distinct cited dump once.
//! 3. [`assess`] classifies each claim, runs the matching behaviour checks
//!    against the claim's cited dumps and folds everything into a
//!    [`QualityReport`].
//!
//! [`evaluate`] wires the three together over a directory on disk. Problems
//! with individual inputs surface as diagnostics; only an unusable artifacts
//! directory or an unwritable report is an [`EvalError`].

#![warn(missing_docs)]

pub mod claims;
pub mod document;
pub mod error;
pub mod evaluate;
pub mod evidence;
pub mod render;
pub mod report;

pub use claims::{extract_claims, Claim};
pub use document::{ClarityStats, HypothesisStats};
pub use error::EvalError;
pub use evaluate::{assess, evaluate, write_reports, Documents};
pub use evidence::Evidence;
pub use render::render_markdown;
pub use report::{QualityReport, StructuralStats, VerificationVerdict, WaveMetrics};
