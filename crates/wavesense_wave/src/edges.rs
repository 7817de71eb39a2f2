//! Clock-edge detection and toggle counting over sampled series.

/// Returns the indices `i` at which `clock[i - 1] == 0` and `clock[i] == 1`.
///
/// Indices are positions into the sampled sequence, which the rest of the
/// crate treats as the shared row number. Sequences shorter than two samples
/// have no edges.
pub fn rising_edges(clock: &[u64]) -> Vec<usize> {
    clock
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] == 0 && pair[1] == 1)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Counts adjacent samples whose values differ.
pub fn count_toggles(values: &[u64]) -> usize {
    values.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_have_no_edges() {
        assert!(rising_edges(&[]).is_empty());
        assert!(rising_edges(&[0]).is_empty());
        assert!(rising_edges(&[1]).is_empty());
    }

    #[test]
    fn alternating_yields_half_the_length() {
        for n in 0..12usize {
            let clock: Vec<u64> = (0..n).map(|i| (i % 2) as u64).collect();
            assert_eq!(rising_edges(&clock).len(), n / 2, "length {n}");
        }
    }

    #[test]
    fn constant_clock_has_no_edges() {
        assert!(rising_edges(&[0; 9]).is_empty());
        assert!(rising_edges(&[1; 9]).is_empty());
    }

    #[test]
    fn edge_positions_are_the_high_sample() {
        assert_eq!(rising_edges(&[0, 1, 1, 0, 0, 1]), vec![1, 5]);
        assert_eq!(rising_edges(&[1, 0, 1, 0, 1]), vec![2, 4]);
    }

    #[test]
    fn only_zero_to_one_counts() {
        // 2 -> 1 and 0 -> 2 are not edges.
        assert!(rising_edges(&[2, 1, 0, 2]).is_empty());
    }

    #[test]
    fn edge_count_bounded_by_half_length() {
        let clock = [0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 1];
        assert!(rising_edges(&clock).len() <= clock.len() / 2);
    }

    #[test]
    fn toggles() {
        assert_eq!(count_toggles(&[]), 0);
        assert_eq!(count_toggles(&[5]), 0);
        assert_eq!(count_toggles(&[0, 1, 1, 0, 2]), 3);
    }
}
