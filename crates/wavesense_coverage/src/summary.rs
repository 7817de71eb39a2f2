//! Graded coverage summaries for terminal and JSON output.

use std::fmt::{self, Write};

use serde::Serialize;
use wavesense_config::CoverageConfig;

use crate::lcov::{Counter, LcovReport};

/// A coverage grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    /// At or above the `good` threshold.
    Good,
    /// At or above the `fair` threshold.
    Fair,
    /// Below the `fair` threshold.
    Poor,
}

impl CoverageStatus {
    /// Grades a percentage against the configured thresholds.
    pub fn grade(percent: f64, thresholds: &CoverageConfig) -> Self {
        if percent >= thresholds.good {
            CoverageStatus::Good
        } else if percent >= thresholds.fair {
            CoverageStatus::Fair
        } else {
            CoverageStatus::Poor
        }
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageStatus::Good => write!(f, "good"),
            CoverageStatus::Fair => write!(f, "fair"),
            CoverageStatus::Poor => write!(f, "poor"),
        }
    }
}

/// One graded metric.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricSummary {
    /// Points executed.
    pub hit: u64,
    /// Points instrumented.
    pub found: u64,
    /// Hit percentage.
    pub percent: f64,
    /// Grade of `percent`.
    pub status: CoverageStatus,
}

impl MetricSummary {
    fn new(counter: Counter, thresholds: &CoverageConfig) -> Self {
        let percent = counter.percent();
        Self {
            hit: counter.hit,
            found: counter.found,
            percent,
            status: CoverageStatus::grade(percent, thresholds),
        }
    }
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.1}%)", self.hit, self.found, self.percent)
    }
}

/// Graded coverage of one source file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileSummary {
    /// The `SF` path.
    pub file: String,
    /// Line coverage.
    pub lines: MetricSummary,
    /// Branch coverage.
    pub branches: MetricSummary,
}

/// Graded coverage of a whole tracefile.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoverageSummary {
    /// Per-file summaries, sorted by path.
    pub files: Vec<FileSummary>,
    /// Total line coverage.
    pub lines: MetricSummary,
    /// Total branch coverage.
    pub branches: MetricSummary,
}

impl CoverageSummary {
    /// Grades every file and the totals of `report`.
    pub fn new(report: &LcovReport, thresholds: &CoverageConfig) -> Self {
        let files = report
            .files
            .iter()
            .map(|(file, cov)| FileSummary {
                file: file.clone(),
                lines: MetricSummary::new(cov.lines, thresholds),
                branches: MetricSummary::new(cov.branches, thresholds),
            })
            .collect();
        let totals = report.totals();
        Self {
            files,
            lines: MetricSummary::new(totals.lines, thresholds),
            branches: MetricSummary::new(totals.branches, thresholds),
        }
    }

    /// Renders a plain-text table of files followed by the graded totals.
    pub fn render_text(&self) -> String {
        let width = self
            .files
            .iter()
            .map(|f| display_name(&f.file).len())
            .chain(["file".len(), "total".len()])
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "{:<width$}  {:<20}  {:<20}", "file", "lines", "branches");
        for file in &self.files {
            let _ = writeln!(
                out,
                "{:<width$}  {:<20}  {:<20}",
                display_name(&file.file),
                file.lines.to_string(),
                file.branches.to_string()
            );
        }
        let _ = writeln!(
            out,
            "{:<width$}  {:<20}  {:<20}",
            "total",
            self.lines.to_string(),
            self.branches.to_string()
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "line coverage:   {}", self.lines.status);
        let _ = writeln!(out, "branch coverage: {}", self.branches.status);
        out
    }
}

/// The last path component; the full path stays in JSON output.
fn display_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
