//! Claim classification and temporal behaviour checks.
//!
//! A narrative claim such as "count wraps from 0xff to 0 when enabled" is
//! mapped by [`classify`] onto zero or more [`ClaimCategory`] values. Each
//! category owns one [`BehaviorCheck`], a predicate evaluated over the
//! [`SignalSeries`] of a waveform dump at every rising clock edge.
//!
//! Every check guards against vacuous passes: a dump that never exercises
//! the scenario a check is about yields [`CheckOutcome::NoScenario`], never
//! [`CheckOutcome::Verified`].

#![warn(missing_docs)]

mod checks;
mod classifier;
mod engine;
mod error;
mod outcome;

pub use checks::{
    EnableGating, Increment, MidStreamReset, ResetClears, ResetPriority, Wraparound,
};
pub use classifier::{classify, ClaimCategory};
pub use engine::CheckEngine;
pub use error::VerifyError;
pub use outcome::CheckOutcome;

use wavesense_wave::{SignalKey, SignalSeries};

/// A temporal predicate over the signal series of one waveform dump.
///
/// Implementations only see series that contain every key listed by
/// [`required_signals`](Self::required_signals); the guard lives in
/// [`evaluate`](Self::evaluate).
pub trait BehaviorCheck: Send + Sync {
    /// The claim category this check verifies.
    fn category(&self) -> ClaimCategory;

    /// Returns a human-readable description of the checked property.
    fn description(&self) -> &str;

    /// The signals that must be present for the check to run at all.
    fn required_signals(&self) -> &'static [SignalKey];

    /// Runs the predicate. `width` is the counter bit width.
    fn check(&self, series: &SignalSeries, width: u32) -> CheckOutcome;

    /// Runs the predicate after confirming the required signals exist.
    fn evaluate(&self, series: &SignalSeries, width: u32) -> CheckOutcome {
        if let Some(&missing) = self
            .required_signals()
            .iter()
            .find(|&&key| !series.contains(key))
        {
            return CheckOutcome::MissingSignal(missing);
        }
        self.check(series, width)
    }
}
