use wavesense_wave::{SignalKey, SignalSeries};

use crate::{BehaviorCheck, CheckOutcome, ClaimCategory};

/// With reset and enable both low, the counter holds its previous value.
///
/// The comparison is against the count sampled at the preceding rising
/// edge, whatever that edge's control inputs were.
pub struct EnableGating;

impl BehaviorCheck for EnableGating {
    fn category(&self) -> ClaimCategory {
        ClaimCategory::EnableGating
    }

    fn description(&self) -> &str {
        "count holds across clock edges where rst and en are both low"
    }

    fn required_signals(&self) -> &'static [SignalKey] {
        &[
            SignalKey::Clock,
            SignalKey::Enable,
            SignalKey::Reset,
            SignalKey::Count,
        ]
    }

    fn check(&self, series: &SignalSeries, _width: u32) -> CheckOutcome {
        let mut saw_case = false;
        let mut held = None;
        for row in series.rising_edges() {
            let count = series.sample(SignalKey::Count, row);
            let gated = series.sample(SignalKey::Reset, row) == Some(0)
                && series.sample(SignalKey::Enable, row) == Some(0);
            if gated {
                saw_case = true;
                if let (Some(prev), Some(now)) = (held, count) {
                    if now != prev {
                        return CheckOutcome::Violated { row };
                    }
                }
            }
            if count.is_some() {
                held = count;
            }
        }
        CheckOutcome::from_scan(saw_case)
    }
}
