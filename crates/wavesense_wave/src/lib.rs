//! Plaintext waveform tables and the signal series derived from them.
//!
//! Simulation dumps are rendered by `vcdcat` into a fixed tabular text
//! format: an index-to-signal header, a column-order line, a row of `=`
//! characters, then one whitespace-separated row per sampled time step.
//! [`WaveTable`] parses that format, [`SignalSeries`] decodes the clock,
//! reset, enable and counter columns into integer series, and
//! [`rising_edges`] finds the rows at which the clock went high.
//!
//! Malformed input is absorbed locally: a short row is dropped, an
//! undecodable token drops only that one sample. Nothing here returns an
//! error; a table without a separator or column-order line is simply `None`.

#![warn(missing_docs)]

pub mod edges;
pub mod series;
pub mod signal;
pub mod table;
pub mod wavejson;

pub use edges::{count_toggles, rising_edges};
pub use series::SignalSeries;
pub use signal::{decode_value, SignalKey};
pub use table::{SignalDecl, WaveTable};
pub use wavejson::{to_wavejson, WaveJson, WaveJsonConfig, WaveJsonHead, WaveJsonSignal};
