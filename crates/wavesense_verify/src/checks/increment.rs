use wavesense_wave::{SignalKey, SignalSeries};

use super::counter_mask;
use crate::{BehaviorCheck, CheckOutcome, ClaimCategory};

/// With reset low and enable high, the counter advances by exactly one per
/// rising edge, modulo `2^width`.
pub struct Increment;

impl BehaviorCheck for Increment {
    fn category(&self) -> ClaimCategory {
        ClaimCategory::Increment
    }

    fn description(&self) -> &str {
        "count is the previous edge's count plus one (mod 2^width) on enabled edges"
    }

    fn required_signals(&self) -> &'static [SignalKey] {
        &[
            SignalKey::Clock,
            SignalKey::Enable,
            SignalKey::Reset,
            SignalKey::Count,
        ]
    }

    fn check(&self, series: &SignalSeries, width: u32) -> CheckOutcome {
        let mask = counter_mask(width);
        let mut saw_case = false;
        let mut prev: Option<u64> = None;
        for row in series.rising_edges() {
            let count = series.sample(SignalKey::Count, row);
            let counting = series.sample(SignalKey::Reset, row) == Some(0)
                && series.sample(SignalKey::Enable, row) == Some(1);
            if counting {
                if let (Some(prev), Some(now)) = (prev, count) {
                    saw_case = true;
                    if now != prev.wrapping_add(1) & mask {
                        return CheckOutcome::Violated { row };
                    }
                }
            }
            if count.is_some() {
                prev = count;
            }
        }
        CheckOutcome::from_scan(saw_case)
    }
}
