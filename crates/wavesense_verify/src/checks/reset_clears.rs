use wavesense_wave::{SignalKey, SignalSeries};

use crate::{BehaviorCheck, CheckOutcome, ClaimCategory};

/// At every rising edge with reset asserted, the counter reads zero.
pub struct ResetClears;

impl BehaviorCheck for ResetClears {
    fn category(&self) -> ClaimCategory {
        ClaimCategory::ResetClears
    }

    fn description(&self) -> &str {
        "count is 0 at every clock edge where rst is asserted"
    }

    fn required_signals(&self) -> &'static [SignalKey] {
        &[SignalKey::Clock, SignalKey::Reset, SignalKey::Count]
    }

    fn check(&self, series: &SignalSeries, _width: u32) -> CheckOutcome {
        let mut saw_case = false;
        for row in series.rising_edges() {
            if series.sample(SignalKey::Reset, row) != Some(1) {
                continue;
            }
            saw_case = true;
            // A count sample lost to a decode failure cannot confirm the clear.
            if series.sample(SignalKey::Count, row) != Some(0) {
                return CheckOutcome::Violated { row };
            }
        }
        CheckOutcome::from_scan(saw_case)
    }
}
