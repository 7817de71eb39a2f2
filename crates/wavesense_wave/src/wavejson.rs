//! Conversion of waveform tables to WaveDrom's WaveJSON.
//!
//! See <https://github.com/wavedrom/schema/blob/master/WaveJSON.md>. Clocks
//! render as a periodic `P` wave, counters as data waves labelled in hex,
//! everything else as a 0/1 digital wave.

use serde::Serialize;

use crate::signal::decode_value;
use crate::table::WaveTable;

/// A WaveJSON document.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WaveJson {
    /// One lane per rendered signal.
    pub signal: Vec<WaveJsonSignal>,
    /// Rendering hints.
    pub config: WaveJsonConfig,
    /// Optional title block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<WaveJsonHead>,
}

/// A single WaveJSON lane.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WaveJsonSignal {
    /// The hierarchical signal name.
    pub name: String,
    /// The wave string (`P...`, `0.1.`, `=.=.`).
    pub wave: String,
    /// Labels for each `=` in a data wave.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
}

/// WaveDrom rendering configuration.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WaveJsonConfig {
    /// Horizontal scale factor.
    pub hscale: u32,
    /// The WaveDrom skin name.
    pub skin: String,
}

impl Default for WaveJsonConfig {
    fn default() -> Self {
        Self {
            hscale: 2,
            skin: "narrow".to_string(),
        }
    }
}

/// The title block of a WaveJSON document.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WaveJsonHead {
    /// The diagram title.
    pub text: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LaneKind {
    Clock,
    Data,
    Digital,
}

impl LaneKind {
    fn of(name: &str) -> LaneKind {
        let lower = name.to_lowercase();
        if lower.contains("clk") {
            LaneKind::Clock
        } else if lower.contains("count") {
            LaneKind::Data
        } else {
            LaneKind::Digital
        }
    }
}

/// Builds a WaveJSON document from every header signal of `table`.
///
/// Signals are emitted in column-index order; names containing `time` are
/// skipped. An empty `title` omits the head block.
pub fn to_wavejson(table: &WaveTable, title: &str) -> WaveJson {
    let mut signal = Vec::new();
    for decl in table.signals_by_index() {
        if decl.name.to_lowercase().contains("time") {
            continue;
        }
        let kind = LaneKind::of(&decl.name);
        let values: Vec<u64> = table
            .column(decl.index)
            .flatten()
            .filter_map(|tok| decode_value(tok, kind == LaneKind::Data))
            .collect();
        let (wave, data) = match kind {
            LaneKind::Clock => (clock_wave(&values), Vec::new()),
            LaneKind::Data => data_wave(&values),
            LaneKind::Digital => (digital_wave(&values), Vec::new()),
        };
        signal.push(WaveJsonSignal {
            name: decl.name.clone(),
            wave,
            data,
        });
    }

    WaveJson {
        signal,
        config: WaveJsonConfig::default(),
        head: (!title.is_empty()).then(|| WaveJsonHead {
            text: title.to_string(),
        }),
    }
}

fn clock_wave(values: &[u64]) -> String {
    if values.is_empty() {
        return "0".to_string();
    }
    format!("P{}", ".".repeat(values.len() - 1))
}

fn digital_wave(values: &[u64]) -> String {
    if values.is_empty() {
        return "0".to_string();
    }
    let mut wave = String::with_capacity(values.len());
    let mut current = None;
    for &value in values {
        if current == Some(value) {
            wave.push('.');
        } else {
            wave.push(if value == 0 { '0' } else { '1' });
            current = Some(value);
        }
    }
    wave
}

fn data_wave(values: &[u64]) -> (String, Vec<String>) {
    if values.is_empty() {
        return ("0".to_string(), Vec::new());
    }
    let mut wave = String::with_capacity(values.len());
    let mut data = Vec::new();
    let mut current = None;
    for &value in values {
        if current == Some(value) {
            wave.push('.');
        } else {
            wave.push('=');
            data.push(format!("0x{value:02x}"));
            current = Some(value);
        }
    }
    (wave, data)
}
