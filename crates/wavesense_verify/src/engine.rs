//! The check engine: category dispatch under a [`ChecksConfig`].
//!
//! The engine carries the counter width shared by the increment and
//! wraparound checks and the set of categories the configuration allows
//! (skips). Allowed categories are never run.

use std::collections::HashSet;

use tracing::debug;
use wavesense_config::ChecksConfig;
use wavesense_wave::SignalSeries;

use crate::{CheckOutcome, ClaimCategory, VerifyError};

/// Runs behaviour checks against signal series.
#[derive(Clone, Debug)]
pub struct CheckEngine {
    width: u32,
    allowed: HashSet<ClaimCategory>,
}

impl CheckEngine {
    /// Creates an engine from the `[checks]` configuration section.
    ///
    /// Fails when `config.allow` names a category that does not exist.
    pub fn new(config: &ChecksConfig) -> Result<Self, VerifyError> {
        let allowed = config
            .allow
            .iter()
            .map(|name| name.parse::<ClaimCategory>())
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self {
            width: config.width,
            allowed,
        })
    }

    /// Creates an engine with an 8-bit counter and nothing allowed.
    pub fn with_defaults() -> Self {
        Self {
            width: ChecksConfig::default().width,
            allowed: HashSet::new(),
        }
    }

    /// The configured counter bit width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether `category` is skipped by configuration.
    pub fn is_allowed(&self, category: ClaimCategory) -> bool {
        self.allowed.contains(&category)
    }

    /// The categories that will run, in classification order.
    pub fn enabled(&self) -> impl Iterator<Item = ClaimCategory> + '_ {
        ClaimCategory::ALL
            .into_iter()
            .filter(|cat| !self.is_allowed(*cat))
    }

    /// Evaluates one category against one series, or `None` if allowed.
    pub fn verify(&self, category: ClaimCategory, series: &SignalSeries) -> Option<CheckOutcome> {
        if self.is_allowed(category) {
            return None;
        }
        let outcome = category.check().evaluate(series, self.width);
        debug!(%category, %outcome, "behaviour check finished");
        Some(outcome)
    }

    /// Evaluates every enabled category against `series`.
    pub fn run_all(&self, series: &SignalSeries) -> Vec<(ClaimCategory, CheckOutcome)> {
        self.enabled()
            .filter_map(|cat| self.verify(cat, series).map(|outcome| (cat, outcome)))
            .collect()
    }
}

impl Default for CheckEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
