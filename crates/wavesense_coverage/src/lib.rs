//! Line and branch coverage summaries from LCOV `.info` files.
//!
//! `verilator_coverage --write-info` emits LCOV tracefiles; [`parse_lcov`]
//! reads the `SF`/`DA`/`BRDA`/`end_of_record` subset into per-file
//! [`Counter`]s and [`CoverageSummary`] grades the totals against the
//! thresholds in [`wavesense_config::CoverageConfig`].

#![warn(missing_docs)]

pub mod error;
pub mod lcov;
pub mod summary;

pub use error::CoverageError;
pub use lcov::{load_lcov, parse_lcov, Counter, FileCoverage, LcovReport};
pub use summary::{CoverageStatus, CoverageSummary, FileSummary, MetricSummary};
