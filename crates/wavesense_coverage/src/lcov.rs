//! Parsing of the LCOV tracefile subset written by Verilator.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::CoverageError;

/// Found/hit tallies for one coverage metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counter {
    /// Instrumented points.
    pub found: u64,
    /// Points executed at least once.
    pub hit: u64,
}

impl Counter {
    /// Records one point, hit or not.
    pub fn record(&mut self, hit: bool) {
        self.found += 1;
        if hit {
            self.hit += 1;
        }
    }

    /// `100 * hit / found`, or 100 when nothing was instrumented.
    pub fn percent(&self) -> f64 {
        if self.found == 0 {
            100.0
        } else {
            100.0 * self.hit as f64 / self.found as f64
        }
    }
}

impl std::ops::AddAssign for Counter {
    fn add_assign(&mut self, other: Counter) {
        self.found += other.found;
        self.hit += other.hit;
    }
}

/// Line and branch counters for one source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FileCoverage {
    /// `DA` records.
    pub lines: Counter,
    /// `BRDA` records.
    pub branches: Counter,
}

/// Coverage of every source file in a tracefile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LcovReport {
    /// Per-file counters keyed by the `SF` path.
    pub files: BTreeMap<String, FileCoverage>,
}

impl LcovReport {
    /// Counters summed over all files.
    pub fn totals(&self) -> FileCoverage {
        let mut totals = FileCoverage::default();
        for file in self.files.values() {
            totals.lines += file.lines;
            totals.branches += file.branches;
        }
        totals
    }
}

/// Parses LCOV text.
///
/// Records outside an `SF:` ... `end_of_record` block and malformed `DA` or
/// `BRDA` entries are ignored. A repeated `SF:` path accumulates into the
/// same file.
pub fn parse_lcov(text: &str) -> LcovReport {
    let mut report = LcovReport::default();
    let mut current: Option<String> = None;
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if let Some(path) = line.strip_prefix("SF:") {
            let path = path.trim().to_string();
            report.files.entry(path.clone()).or_default();
            current = Some(path);
        } else if line.starts_with("end_of_record") {
            current = None;
        } else if let Some(file) = current.as_ref().and_then(|p| report.files.get_mut(p)) {
            if let Some(rest) = line.strip_prefix("DA:") {
                match parse_da(rest) {
                    Some(hit) => file.lines.record(hit),
                    None => debug!(line = lineno + 1, "skipping malformed DA record"),
                }
            } else if let Some(rest) = line.strip_prefix("BRDA:") {
                match parse_brda(rest) {
                    Some(hit) => file.branches.record(hit),
                    None => debug!(line = lineno + 1, "skipping malformed BRDA record"),
                }
            }
        }
    }
    report
}

/// Reads and parses a tracefile.
pub fn load_lcov(path: &Path) -> Result<LcovReport, CoverageError> {
    let text = std::fs::read_to_string(path).map_err(|source| CoverageError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_lcov(&text))
}

/// `<line>,<count>[,<checksum>]`; returns whether the line was hit.
fn parse_da(fields: &str) -> Option<bool> {
    let mut parts = fields.split(',');
    parts.next()?.trim().parse::<u64>().ok()?;
    let count: i64 = parts.next()?.trim().parse().ok()?;
    Some(count > 0)
}

/// `<line>,<block>,<branch>,<taken>`; `-` means never evaluated.
fn parse_brda(fields: &str) -> Option<bool> {
    let parts: Vec<&str> = fields.split(',').map(str::trim).collect();
    let [line, _block, _branch, taken] = parts.as_slice() else {
        return None;
    };
    line.parse::<u64>().ok()?;
    if *taken == "-" {
        return Some(false);
    }
    let taken: i64 = taken.parse().ok()?;
    Some(taken > 0)
}
