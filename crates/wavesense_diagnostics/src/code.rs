//! Diagnostic codes with category prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Error diagnostics, prefixed with `E`.
    Error,
    /// Warning diagnostics, prefixed with `W`.
    Warning,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }
}

/// A category prefix plus a numeric identifier, displayed as e.g. `W102`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// A narrative or hypothesis document is missing and was read as empty.
    pub const MISSING_DOCUMENT: DiagnosticCode = DiagnosticCode::new(Category::Warning, 101);
    /// A waveform file cited by a claim does not exist.
    pub const MISSING_WAVEFORM: DiagnosticCode = DiagnosticCode::new(Category::Warning, 102);
    /// A waveform file exists but produced no signal data.
    pub const EMPTY_WAVEFORM: DiagnosticCode = DiagnosticCode::new(Category::Warning, 103);
    /// Malformed data rows were dropped while parsing a waveform.
    pub const SKIPPED_ROWS: DiagnosticCode = DiagnosticCode::new(Category::Warning, 104);
    /// A waveform file cited by a claim exists but could not be read.
    pub const UNREADABLE_WAVEFORM: DiagnosticCode = DiagnosticCode::new(Category::Warning, 105);
    /// A report artifact could not be written.
    pub const REPORT_WRITE: DiagnosticCode = DiagnosticCode::new(Category::Error, 101);

    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
