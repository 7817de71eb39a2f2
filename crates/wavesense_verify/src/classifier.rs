//! Keyword classification of narrative claims.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checks::{
    EnableGating, Increment, MidStreamReset, ResetClears, ResetPriority, Wraparound,
};
use crate::error::VerifyError;
use crate::BehaviorCheck;

/// The closed set of behaviours a claim can be checked against.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimCategory {
    /// The counter rolls over from its maximum value to zero.
    Wraparound,
    /// The counter advances by one per enabled clock edge.
    Increment,
    /// A deasserted enable holds the counter.
    EnableGating,
    /// Reset wins over a simultaneously asserted enable.
    ResetPriority,
    /// A one-edge reset pulse in the middle of counting clears the counter.
    MidStreamReset,
    /// An asserted reset clears the counter.
    ResetClears,
}

impl ClaimCategory {
    /// All categories, in classification order.
    pub const ALL: [ClaimCategory; 6] = [
        ClaimCategory::Wraparound,
        ClaimCategory::Increment,
        ClaimCategory::EnableGating,
        ClaimCategory::ResetPriority,
        ClaimCategory::MidStreamReset,
        ClaimCategory::ResetClears,
    ];

    /// The snake_case name used in configuration and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ClaimCategory::Wraparound => "wraparound",
            ClaimCategory::Increment => "increment",
            ClaimCategory::EnableGating => "enable_gating",
            ClaimCategory::ResetPriority => "reset_priority",
            ClaimCategory::MidStreamReset => "mid_stream_reset",
            ClaimCategory::ResetClears => "reset_clears",
        }
    }

    /// The check that verifies claims of this category.
    pub fn check(self) -> &'static dyn BehaviorCheck {
        match self {
            ClaimCategory::Wraparound => &Wraparound,
            ClaimCategory::Increment => &Increment,
            ClaimCategory::EnableGating => &EnableGating,
            ClaimCategory::ResetPriority => &ResetPriority,
            ClaimCategory::MidStreamReset => &MidStreamReset,
            ClaimCategory::ResetClears => &ResetClears,
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            ClaimCategory::Wraparound => &["wrap", "rollover", "roll over"],
            ClaimCategory::Increment => &["+1", "increment", "increase by one"],
            ClaimCategory::EnableGating => &["enable", "en=0", "gate"],
            ClaimCategory::ResetPriority => &["priority"],
            ClaimCategory::MidStreamReset => &["mid-stream", "mid stream"],
            ClaimCategory::ResetClears => &["reset"],
        }
    }
}

impl fmt::Display for ClaimCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ClaimCategory {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimCategory::ALL
            .into_iter()
            .find(|cat| cat.as_str() == s)
            .ok_or_else(|| VerifyError::UnknownCategory {
                name: s.to_string(),
                known: ClaimCategory::ALL.map(ClaimCategory::as_str).join(", "),
            })
    }
}

/// Maps claim text to the categories it mentions.
///
/// Matching is case-insensitive substring search. Categories are returned
/// in [`ClaimCategory::ALL`] order, each at most once, so a claim about
/// reset priority yields both `reset_priority` and `reset_clears`.
pub fn classify(text: &str) -> Vec<ClaimCategory> {
    let text = text.to_lowercase();
    ClaimCategory::ALL
        .into_iter()
        .filter(|cat| cat.keywords().iter().any(|kw| text.contains(kw)))
        .collect()
}
