//! The result of running one behaviour check against one dump.

use std::fmt;

use wavesense_wave::SignalKey;

/// How a single behaviour check resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The scenario occurred and every occurrence satisfied the property.
    Verified,
    /// The scenario occurred and was contradicted at this row.
    Violated {
        /// The row (sample position) of the first contradicting sample.
        row: usize,
    },
    /// No qualifying scenario was found in the dump.
    NoScenario,
    /// A signal the check needs is not present in the dump.
    MissingSignal(SignalKey),
}

impl CheckOutcome {
    /// Only [`Verified`](Self::Verified) counts as a pass.
    pub fn is_verified(self) -> bool {
        matches!(self, CheckOutcome::Verified)
    }

    /// Whether the dump exercised the checked scenario at all.
    pub fn scenario_observed(self) -> bool {
        matches!(self, CheckOutcome::Verified | CheckOutcome::Violated { .. })
    }

    /// Builds the outcome of a scan that found no contradiction.
    pub(crate) fn from_scan(saw_case: bool) -> Self {
        if saw_case {
            CheckOutcome::Verified
        } else {
            CheckOutcome::NoScenario
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Verified => f.write_str("PASS"),
            CheckOutcome::Violated { row } => write!(f, "FAIL (row {row})"),
            CheckOutcome::NoScenario => f.write_str("SKIP (no qualifying scenario)"),
            CheckOutcome::MissingSignal(key) => write!(f, "SKIP (missing signal `{key}`)"),
        }
    }
}
