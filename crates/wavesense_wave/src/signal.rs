//! Canonical signal keys and per-signal value decoding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the signals the behavioural checks understand.
///
/// Recognised from the leaf of a hierarchical signal name: `*.clk`,
/// `*.rst`, `*.en`, and `*.count` with or without a `[hi:lo]` range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum SignalKey {
    /// The sampling clock.
    #[serde(rename = "clk")]
    Clock,
    /// The synchronous reset.
    #[serde(rename = "rst")]
    Reset,
    /// The count enable.
    #[serde(rename = "en")]
    Enable,
    /// The counter value.
    #[serde(rename = "count")]
    Count,
}

impl SignalKey {
    /// All keys, in declaration order.
    pub const ALL: [SignalKey; 4] = [
        SignalKey::Clock,
        SignalKey::Reset,
        SignalKey::Enable,
        SignalKey::Count,
    ];

    /// The short name used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            SignalKey::Clock => "clk",
            SignalKey::Reset => "rst",
            SignalKey::Enable => "en",
            SignalKey::Count => "count",
        }
    }

    /// Maps a hierarchical signal name to its canonical key, if any.
    pub fn from_name(name: &str) -> Option<SignalKey> {
        let name = name.trim();
        if name.ends_with(".clk") {
            Some(SignalKey::Clock)
        } else if name.ends_with(".rst") {
            Some(SignalKey::Reset)
        } else if name.ends_with(".en") {
            Some(SignalKey::Enable)
        } else if is_count_name(name) {
            Some(SignalKey::Count)
        } else {
            None
        }
    }

    /// Decodes one table token for this signal.
    ///
    /// The counter is read as hexadecimal when the token is made only of hex
    /// digits (so `10` is sixteen), otherwise as decimal. Every other signal
    /// is decimal.
    pub fn decode(self, token: &str) -> Option<u64> {
        match self {
            SignalKey::Count => decode_value(token, true),
            _ => decode_value(token, false),
        }
    }
}

impl fmt::Display for SignalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes a token as an unsigned integer.
///
/// With `hex_digits` set, a token consisting solely of hexadecimal digits is
/// read in base 16; anything else falls back to base 10.
pub fn decode_value(token: &str, hex_digits: bool) -> Option<u64> {
    if hex_digits && !token.is_empty() && token.chars().all(|c| c.is_ascii_hexdigit()) {
        u64::from_str_radix(token, 16).ok()
    } else {
        token.parse().ok()
    }
}

/// `.count` or `.count[<digits>:<digits>]` at the end of the name.
fn is_count_name(name: &str) -> bool {
    let Some(pos) = name.rfind(".count") else {
        return false;
    };
    let rest = &name[pos + ".count".len()..];
    if rest.is_empty() {
        return true;
    }
    let Some(range) = rest.strip_prefix('[').and_then(|r| r.strip_suffix(']')) else {
        return false;
    };
    let Some((hi, lo)) = range.split_once(':') else {
        return false;
    };
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    digits(hi) && digits(lo)
}
