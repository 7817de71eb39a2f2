//! Diagnostic rendering for terminal output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[W102]: cited waveform not found
///   --> temp_artifacts/waves/wave_3.txt
///    = note: cited by 2 claim(s)
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, severity: Severity, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let ansi = match severity {
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;33m",
        };
        format!("{ansi}{text}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        let header = format!("{}[{}]", diag.severity, diag.code);
        out.push_str(&format!(
            "{}: {}\n",
            self.paint(diag.severity, &header),
            diag.message
        ));

        if let Some(ref location) = diag.location {
            out.push_str(&format!("  --> {location}\n"));
        }
        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::DiagnosticCode;
    use crate::location::Location;

    #[test]
    fn render_with_location_and_notes() {
        let diag = Diagnostic::warning(DiagnosticCode::MISSING_WAVEFORM, "cited waveform not found")
            .at(Location::file("art/waves/wave_3.txt"))
            .with_note("cited by 2 claim(s)")
            .with_help("rerun the experiment that produces this dump");

        let output = TerminalRenderer::new(false).render(&diag);
        assert!(output.starts_with("warning[W102]: cited waveform not found\n"));
        assert!(output.contains("  --> art/waves/wave_3.txt\n"));
        assert!(output.contains("= note: cited by 2 claim(s)"));
        assert!(output.contains("= help: rerun the experiment"));
    }

    #[test]
    fn render_without_location() {
        let diag = Diagnostic::error(DiagnosticCode::REPORT_WRITE, "cannot write report");
        let output = TerminalRenderer::new(false).render(&diag);
        assert_eq!(output, "error[E101]: cannot write report\n");
        assert!(!output.contains("-->"));
    }

    #[test]
    fn color_wraps_header_only() {
        let diag = Diagnostic::error(DiagnosticCode::REPORT_WRITE, "cannot write report");
        let output = TerminalRenderer::new(true).render(&diag);
        assert!(output.starts_with("\x1b[1;31merror[E101]\x1b[0m: cannot write report"));
    }
}
