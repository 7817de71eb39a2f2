//! Markdown rendering of a [`QualityReport`].

use std::fmt::Write;

use crate::report::QualityReport;

/// Renders the human-readable report.
///
/// Sections appear in a fixed order: Structural, Hypotheses, Wave Metrics,
/// Behavioral Checks, Clarity.
pub fn render_markdown(report: &QualityReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &QualityReport) -> std::fmt::Result {
    writeln!(out, "# Mental Model Evaluation Report")?;
    writeln!(out)?;
    writeln!(out, "Quality Index: {:.3}", report.quality_index)?;
    writeln!(out)?;

    let s = &report.structural;
    writeln!(out, "## Structural")?;
    writeln!(out, "- Features: {}", s.features)?;
    writeln!(
        out,
        "- Features with evidence: {} ({})",
        s.features_with_evidence,
        percent(s.evidence_link_rate, 2)
    )?;
    writeln!(out, "- Run command present: {}", yes_no(s.run_cmd_present))?;
    writeln!(out)?;

    let h = &report.hypothesis;
    writeln!(out, "## Hypotheses")?;
    writeln!(
        out,
        "- Coverpoints: {} | Validated: {} | Partial: {} | Not tested: {}",
        h.total_coverpoints, h.validated, h.partial, h.not_tested
    )?;
    writeln!(out, "- Validated ratio: {}", percent(h.validated_ratio, 2))?;
    writeln!(out)?;

    let w = &report.wave_metrics;
    writeln!(out, "## Wave Metrics")?;
    writeln!(out, "- Referenced waves: {}", list_or_none(&w.referenced_wave_files))?;
    if !w.missing_references.is_empty() {
        writeln!(out, "- Missing references: {}", w.missing_references.join(", "))?;
    }
    let signals: Vec<&str> = w.unique_signals_seen.iter().map(|k| k.as_str()).collect();
    writeln!(out, "- Unique signals seen: {}", list_or_none(&signals))?;
    writeln!(out, "- Avg signal toggles: {:.2}", w.avg_signal_toggles)?;
    writeln!(out)?;

    writeln!(out, "## Behavioral Checks")?;
    writeln!(
        out,
        "- Verified rate: {}",
        percent(report.behavioral_verified_rate, 2)
    )?;
    for verdict in &report.behavioral_claim_checks {
        let status = if verdict.verified { "PASS" } else { "FAIL" };
        let refs = if verdict.refs.is_empty() {
            "(no refs)".to_string()
        } else {
            verdict.refs.join(", ")
        };
        writeln!(
            out,
            "- [{status}] {}: {} | refs: {refs}",
            verdict.category, verdict.feature_text
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Clarity")?;
    writeln!(
        out,
        "- Uncertainty ratio: {}",
        percent(report.clarity.uncertainty_ratio, 3)
    )?;
    writeln!(out, "- Clarity score: {:.3}", report.clarity.clarity_score)?;
    Ok(())
}

fn percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn list_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
