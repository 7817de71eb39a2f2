//! Statistics over the hypothesis and narrative documents.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use wavesense_config::ScoreConfig;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Resolution markers counted in the hypothesis document.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HypothesisStats {
    /// Sum of the three marker counts.
    pub total_coverpoints: usize,
    /// Occurrences of `VALIDATED`.
    pub validated: usize,
    /// Occurrences of `PARTIALLY`.
    pub partial: usize,
    /// Occurrences of `NOT TESTED`.
    pub not_tested: usize,
    /// `validated / total_coverpoints`, or 0 when there are no markers.
    pub validated_ratio: f64,
}

impl HypothesisStats {
    /// Counts markers as case-sensitive substrings.
    ///
    /// `PARTIALLY VALIDATED` therefore counts once as partial and once as
    /// validated.
    pub fn from_text(text: &str) -> Self {
        let validated = text.matches("VALIDATED").count();
        let partial = text.matches("PARTIALLY").count();
        let not_tested = text.matches("NOT TESTED").count();
        let total = validated + partial + not_tested;
        Self {
            total_coverpoints: total,
            validated,
            partial,
            not_tested,
            validated_ratio: ratio(validated, total),
        }
    }
}

/// Hedging-word density of the narrative document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClarityStats {
    /// Word tokens in the narrative.
    pub tokens: usize,
    /// Tokens drawn from the hedging-word set.
    pub hedged_tokens: usize,
    /// `hedged_tokens / max(tokens, 1)`.
    pub uncertainty_ratio: f64,
    /// `max(0, 1 - clarity_penalty * uncertainty_ratio)`.
    pub clarity_score: f64,
}

impl ClarityStats {
    /// Tokenizes the lowercased text into word characters and scores it.
    pub fn from_text(text: &str, score: &ScoreConfig) -> Self {
        let hedging: HashSet<String> = score
            .hedging_words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        let lower = text.to_lowercase();
        let mut tokens = 0;
        let mut hedged_tokens = 0;
        for word in WORD.find_iter(&lower) {
            tokens += 1;
            if hedging.contains(word.as_str()) {
                hedged_tokens += 1;
            }
        }
        let uncertainty_ratio = hedged_tokens as f64 / tokens.max(1) as f64;
        Self {
            tokens,
            hedged_tokens,
            uncertainty_ratio,
            clarity_score: (1.0 - score.clarity_penalty * uncertainty_ratio).max(0.0),
        }
    }
}

/// `num / den`, or 0 when `den` is zero.
pub(crate) fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_markers() {
        let doc = "\
- H1: reset clears count. VALIDATED
- H2: enable gates. NOT TESTED
- H3: wraps. PARTIALLY VALIDATED
";
        let stats = HypothesisStats::from_text(doc);
        assert_eq!(stats.validated, 2);
        assert_eq!(stats.partial, 1);
        assert_eq!(stats.not_tested, 1);
        assert_eq!(stats.total_coverpoints, 4);
        assert!((stats.validated_ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn markers_are_case_sensitive() {
        let stats = HypothesisStats::from_text("validated, not tested");
        assert_eq!(stats.total_coverpoints, 0);
        assert_eq!(stats.validated_ratio, 0.0);
    }

    #[test]
    fn hedging_lowers_clarity() {
        let score = ScoreConfig::default();
        // 10 tokens, one hedge.
        let stats = ClarityStats::from_text("The counter probably wraps at 255 after the max value", &score);
        assert_eq!(stats.tokens, 10);
        assert_eq!(stats.hedged_tokens, 1);
        assert!((stats.uncertainty_ratio - 0.1).abs() < 1e-12);
        assert!((stats.clarity_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn heavy_hedging_clamps_to_zero() {
        let stats = ClarityStats::from_text("Maybe. Likely! MIGHT", &ScoreConfig::default());
        assert_eq!(stats.hedged_tokens, 3);
        assert_eq!(stats.clarity_score, 0.0);
    }

    #[test]
    fn empty_text_is_fully_clear() {
        let stats = ClarityStats::from_text("", &ScoreConfig::default());
        assert_eq!(stats.tokens, 0);
        assert_eq!(stats.uncertainty_ratio, 0.0);
        assert_eq!(stats.clarity_score, 1.0);
    }

    #[test]
    fn hedges_must_be_whole_words() {
        let stats = ClarityStats::from_text("couldn't guesswork appearance", &ScoreConfig::default());
        // `couldn` and `t` are tokens; neither is a hedge.
        assert_eq!(stats.tokens, 4);
        assert_eq!(stats.hedged_tokens, 0);
    }
}
