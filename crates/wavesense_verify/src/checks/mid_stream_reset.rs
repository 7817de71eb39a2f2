use wavesense_wave::{SignalKey, SignalSeries};

use crate::{BehaviorCheck, CheckOutcome, ClaimCategory};

/// A reset asserted for a single edge between two deasserted edges clears
/// the counter at the asserted edge.
///
/// One such pulse with a zero count is enough; pulses that leave the count
/// nonzero are only reported when no good pulse exists.
pub struct MidStreamReset;

impl BehaviorCheck for MidStreamReset {
    fn category(&self) -> ClaimCategory {
        ClaimCategory::MidStreamReset
    }

    fn description(&self) -> &str {
        "a one-edge rst pulse between deasserted edges clears count"
    }

    fn required_signals(&self) -> &'static [SignalKey] {
        &[SignalKey::Clock, SignalKey::Reset, SignalKey::Count]
    }

    fn check(&self, series: &SignalSeries, _width: u32) -> CheckOutcome {
        let edges = series.rising_edges();
        let reset = |row| series.sample(SignalKey::Reset, row);
        let mut first_violation = None;
        for window in edges.windows(3) {
            let (before, at, after) = (window[0], window[1], window[2]);
            if reset(before) != Some(0) || reset(at) != Some(1) || reset(after) != Some(0) {
                continue;
            }
            if series.sample(SignalKey::Count, at) == Some(0) {
                return CheckOutcome::Verified;
            }
            first_violation.get_or_insert(at);
        }
        match first_violation {
            Some(row) => CheckOutcome::Violated { row },
            None => CheckOutcome::NoScenario,
        }
    }
}
