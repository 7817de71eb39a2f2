use wavesense_wave::{SignalKey, SignalSeries};

use crate::{BehaviorCheck, CheckOutcome, ClaimCategory};

/// When reset and enable are asserted together, reset wins and the counter
/// reads zero.
pub struct ResetPriority;

impl BehaviorCheck for ResetPriority {
    fn category(&self) -> ClaimCategory {
        ClaimCategory::ResetPriority
    }

    fn description(&self) -> &str {
        "count is 0 at clock edges where rst and en are both asserted"
    }

    fn required_signals(&self) -> &'static [SignalKey] {
        &[
            SignalKey::Clock,
            SignalKey::Reset,
            SignalKey::Enable,
            SignalKey::Count,
        ]
    }

    fn check(&self, series: &SignalSeries, _width: u32) -> CheckOutcome {
        let mut saw_case = false;
        for row in series.rising_edges() {
            let both = series.sample(SignalKey::Reset, row) == Some(1)
                && series.sample(SignalKey::Enable, row) == Some(1);
            if !both {
                continue;
            }
            saw_case = true;
            if series.sample(SignalKey::Count, row) != Some(0) {
                return CheckOutcome::Violated { row };
            }
        }
        CheckOutcome::from_scan(saw_case)
    }
}
