use wavesense_wave::{SignalKey, SignalSeries};

use super::counter_mask;
use crate::{BehaviorCheck, CheckOutcome, ClaimCategory};

/// The counter steps from its all-ones value straight to zero.
///
/// Unlike the other checks this one scans adjacent raw samples rather than
/// clock edges, so a rollover visible between edges still counts and the
/// clock is not required.
pub struct Wraparound;

impl BehaviorCheck for Wraparound {
    fn category(&self) -> ClaimCategory {
        ClaimCategory::Wraparound
    }

    fn description(&self) -> &str {
        "count moves from 2^width - 1 directly to 0"
    }

    fn required_signals(&self) -> &'static [SignalKey] {
        &[SignalKey::Count]
    }

    fn check(&self, series: &SignalSeries, width: u32) -> CheckOutcome {
        let max = counter_mask(width);
        let values = series.get(SignalKey::Count).unwrap_or_default();
        let mut first_violation = None;
        for (i, pair) in values.windows(2).enumerate() {
            if pair[0] != max {
                continue;
            }
            if pair[1] == 0 {
                return CheckOutcome::Verified;
            }
            if pair[1] != max && first_violation.is_none() {
                first_violation = Some(i + 1);
            }
        }
        match first_violation {
            Some(row) => CheckOutcome::Violated { row },
            None => CheckOutcome::NoScenario,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(values: &[u64]) -> SignalSeries {
        SignalSeries::new().with(SignalKey::Count, values)
    }

    #[test]
    fn max_then_zero_passes() {
        assert_eq!(
            Wraparound.evaluate(&count(&[253, 254, 255, 0, 1]), 8),
            CheckOutcome::Verified
        );
    }

    #[test]
    fn skipping_the_max_does_not_pass() {
        let outcome = Wraparound.evaluate(&count(&[253, 254, 0]), 8);
        assert!(!outcome.is_verified());
        assert_eq!(outcome, CheckOutcome::NoScenario);
    }

    #[test]
    fn max_followed_by_nonzero_is_a_violation() {
        assert_eq!(
            Wraparound.evaluate(&count(&[255, 255, 17]), 8),
            CheckOutcome::Violated { row: 2 }
        );
    }

    #[test]
    fn scans_raw_samples_without_a_clock() {
        // No clock at all, and the rollover happens between samples that
        // would not be rising edges. The raw-sample scan still accepts it.
        let series = count(&[254, 255, 0]);
        assert!(!series.contains(SignalKey::Clock));
        assert_eq!(Wraparound.evaluate(&series, 8), CheckOutcome::Verified);
    }

    #[test]
    fn respects_width() {
        assert_eq!(
            Wraparound.evaluate(&count(&[15, 0]), 4),
            CheckOutcome::Verified
        );
        assert_eq!(
            Wraparound.evaluate(&count(&[15, 0]), 8),
            CheckOutcome::NoScenario
        );
    }

    #[test]
    fn requires_count() {
        let series = SignalSeries::new().with(SignalKey::Clock, [0, 1]);
        assert_eq!(
            Wraparound.evaluate(&series, 8),
            CheckOutcome::MissingSignal(SignalKey::Count)
        );
    }
}
