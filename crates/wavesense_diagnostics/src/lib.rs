//! Structured diagnostics for the evaluation pipeline.
//!
//! Conditions that degrade an evaluation without aborting it (a missing
//! hypothesis document, a cited waveform that is not on disk, malformed rows
//! inside a dump) are reported as [`Diagnostic`]s collected in a
//! [`DiagnosticSink`]. [`TerminalRenderer`] formats them for humans; the types
//! also serialize to JSON for machine consumers.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod location;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use location::Location;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
