//! Canonical signal series decoded from a waveform table.

use std::collections::BTreeMap;

use tracing::debug;

use crate::edges::{count_toggles, rising_edges};
use crate::signal::SignalKey;
use crate::table::WaveTable;

/// Per-signal integer series for the recognised signals of one dump.
///
/// Each series holds one value per retained row, minus any row whose token
/// failed to decode for that signal, so series may differ in length. The
/// position within a series is used as the shared row number; look values up
/// with [`sample`](Self::sample) rather than indexing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignalSeries {
    samples: BTreeMap<SignalKey, Vec<u64>>,
}

impl SignalSeries {
    /// Creates an empty series set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses waveform text straight to a series set.
    pub fn parse(text: &str) -> Option<SignalSeries> {
        WaveTable::parse(text).map(|table| Self::from_table(&table))
    }

    /// Decodes the recognised signals of a parsed table.
    ///
    /// When several header names map to the same key, the last one in header
    /// order wins. Unrecognised names are ignored.
    pub fn from_table(table: &WaveTable) -> SignalSeries {
        let mut bindings: BTreeMap<SignalKey, u32> = BTreeMap::new();
        for decl in &table.signals {
            match SignalKey::from_name(&decl.name) {
                Some(key) => {
                    bindings.insert(key, decl.index);
                }
                None => debug!(signal = %decl.name, "ignoring unrecognised signal"),
            }
        }

        let mut samples = BTreeMap::new();
        for (key, index) in bindings {
            let mut values = Vec::with_capacity(table.rows.len());
            for (row, token) in table.column(index).enumerate() {
                let Some(token) = token else { continue };
                match key.decode(token) {
                    Some(value) => values.push(value),
                    None => debug!(%key, row, token, "dropping undecodable sample"),
                }
            }
            samples.insert(key, values);
        }
        SignalSeries { samples }
    }

    /// Adds or replaces the series for `key`.
    pub fn insert(&mut self, key: SignalKey, values: Vec<u64>) {
        self.samples.insert(key, values);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: SignalKey, values: impl Into<Vec<u64>>) -> Self {
        self.insert(key, values.into());
        self
    }

    /// The series for `key`, if the signal was present in the dump.
    pub fn get(&self, key: SignalKey) -> Option<&[u64]> {
        self.samples.get(&key).map(Vec::as_slice)
    }

    /// Whether the dump declared a signal for `key` (even with no samples).
    pub fn contains(&self, key: SignalKey) -> bool {
        self.samples.contains_key(&key)
    }

    /// Whether every key in `keys` is present.
    pub fn contains_all(&self, keys: &[SignalKey]) -> bool {
        keys.iter().all(|&key| self.contains(key))
    }

    /// The value of `key` at `row`, or `None` if the signal is absent or
    /// its series is shorter than `row + 1`.
    pub fn sample(&self, key: SignalKey, row: usize) -> Option<u64> {
        self.samples.get(&key)?.get(row).copied()
    }

    /// Rows at which the clock rose; empty when there is no clock.
    pub fn rising_edges(&self) -> Vec<usize> {
        self.get(SignalKey::Clock).map(rising_edges).unwrap_or_default()
    }

    /// The keys present, in key order.
    pub fn keys(&self) -> impl Iterator<Item = SignalKey> + '_ {
        self.samples.keys().copied()
    }

    /// Number of value changes per present signal.
    pub fn toggle_counts(&self) -> impl Iterator<Item = (SignalKey, usize)> + '_ {
        self.samples
            .iter()
            .map(|(&key, values)| (key, count_toggles(values)))
    }

    /// `true` when no recognised signal was found.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
