//! Loading and parsing of the waveform dumps cited by claims.

use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};
use wavesense_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Location};
use wavesense_wave::{SignalSeries, WaveTable};

/// The parsed series of every cited dump, keyed by reference.
///
/// A reference that is missing on disk, or whose file yields no usable
/// data, has no series.
#[derive(Clone, Debug, Default)]
pub struct Evidence {
    series: BTreeMap<String, SignalSeries>,
    missing: BTreeSet<String>,
}

impl Evidence {
    /// Creates an empty evidence set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads each distinct reference relative to `dir`.
    ///
    /// Missing or unreadable files, files without data and skipped rows are
    /// reported to `sink`. None of them stop the load.
    pub fn load<'a>(
        dir: &Path,
        refs: impl IntoIterator<Item = &'a str>,
        sink: &DiagnosticSink,
    ) -> Evidence {
        let distinct: BTreeSet<&str> = refs.into_iter().collect();
        let mut evidence = Evidence::new();
        for reference in distinct {
            let path = dir.join(reference);
            let bytes = match std::fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    warn!(path = %path.display(), "cited waveform not found");
                    sink.emit(
                        Diagnostic::warning(
                            DiagnosticCode::MISSING_WAVEFORM,
                            format!("cited waveform `{reference}` not found"),
                        )
                        .at(Location::file(&path))
                        .with_help("claims citing it cannot be verified"),
                    );
                    evidence.mark_missing(reference);
                    continue;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cited waveform unreadable");
                    sink.emit(
                        Diagnostic::warning(
                            DiagnosticCode::UNREADABLE_WAVEFORM,
                            format!("cited waveform `{reference}` could not be read: {e}"),
                        )
                        .at(Location::file(&path)),
                    );
                    continue;
                }
            };
            let text = String::from_utf8_lossy(&bytes);
            if let Some(series) = parse_dump(&text, &path, sink) {
                evidence.insert(reference, series);
            }
        }
        evidence
    }

    /// Records the parsed series for `reference`.
    pub fn insert(&mut self, reference: impl Into<String>, series: SignalSeries) {
        self.series.insert(reference.into(), series);
    }

    /// Records `reference` as missing on disk.
    pub fn mark_missing(&mut self, reference: impl Into<String>) {
        self.missing.insert(reference.into());
    }

    /// The series parsed from `reference`, if it yielded data.
    pub fn get(&self, reference: &str) -> Option<&SignalSeries> {
        self.series.get(reference)
    }

    /// References that were not on disk, sorted.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(String::as_str)
    }

    /// Every parsed series, in reference order.
    pub fn parsed(&self) -> impl Iterator<Item = (&str, &SignalSeries)> {
        self.series.iter().map(|(r, s)| (r.as_str(), s))
    }
}

fn parse_dump(text: &str, path: &Path, sink: &DiagnosticSink) -> Option<SignalSeries> {
    let Some(table) = WaveTable::parse(text) else {
        sink.emit(
            Diagnostic::warning(
                DiagnosticCode::EMPTY_WAVEFORM,
                "waveform has no column-order line before a `=` separator",
            )
            .at(Location::file(path)),
        );
        return None;
    };
    if table.skipped_rows > 0 {
        sink.emit(
            Diagnostic::warning(
                DiagnosticCode::SKIPPED_ROWS,
                format!(
                    "skipped {} row(s) with fewer than {} columns",
                    table.skipped_rows,
                    table.column_order.len()
                ),
            )
            .at(Location::file(path)),
        );
    }
    let series = SignalSeries::from_table(&table);
    if series.is_empty() {
        sink.emit(
            Diagnostic::warning(
                DiagnosticCode::EMPTY_WAVEFORM,
                "waveform declares none of the clk, rst, en or count signals",
            )
            .at(Location::file(path))
            .with_note("signals are matched by the suffix of their hierarchical name"),
        );
        return None;
    }
    debug!(
        path = %path.display(),
        rows = table.rows.len(),
        signals = series.keys().count(),
        "parsed waveform"
    );
    Some(series)
}
