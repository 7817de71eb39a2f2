//! The verification aggregator.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};
use wavesense_config::{EvalConfig, ScoreConfig};
use wavesense_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Location};
use wavesense_verify::{classify, CheckEngine, ClaimCategory};
use wavesense_wave::SignalKey;

use crate::claims::{extract_claims, Claim};
use crate::document::{ratio, ClarityStats, HypothesisStats};
use crate::error::EvalError;
use crate::evidence::Evidence;
use crate::render::render_markdown;
use crate::report::{QualityReport, StructuralStats, VerificationVerdict, WaveMetrics};

/// The textual inputs of one evaluation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Documents<'a> {
    /// The narrative document of bullet-point claims.
    pub mental_model: &'a str,
    /// The hypothesis document with resolution markers.
    pub hypotheses: &'a str,
    /// Whether the simulator command was recorded.
    pub run_command_present: bool,
}

/// Evaluates the artifacts directory `dir` under `config`.
///
/// A missing narrative or hypothesis document is read as empty and reported
/// to `sink`, as are missing or unusable waveform dumps.
pub fn evaluate(
    dir: &Path,
    config: &EvalConfig,
    sink: &DiagnosticSink,
) -> Result<QualityReport, EvalError> {
    if !dir.is_dir() {
        return Err(EvalError::ArtifactsNotFound {
            path: dir.to_path_buf(),
        });
    }
    let engine = CheckEngine::new(&config.checks)?;
    info!(dir = %dir.display(), "evaluating artifacts");

    let artifacts = &config.artifacts;
    let mental_model = read_document(dir, &artifacts.mental_model, sink)?;
    let hypotheses = read_document(dir, &artifacts.hypotheses, sink)?;
    let docs = Documents {
        mental_model: &mental_model,
        hypotheses: &hypotheses,
        run_command_present: dir.join(&artifacts.run_command).exists(),
    };

    let claims = extract_claims(docs.mental_model);
    let refs = claims.iter().flat_map(|c| c.refs.iter().map(String::as_str));
    let evidence = Evidence::load(dir, refs, sink);

    let report = assess(&docs, &evidence, &engine, &config.score);
    info!(
        claims = report.structural.features,
        verdicts = report.behavioral_claim_checks.len(),
        quality_index = report.quality_index,
        "evaluation finished"
    );
    Ok(report)
}

/// Scores `docs` against already-loaded `evidence`.
///
/// Each category of each claim is checked against the claim's cited dumps
/// in citation order; the first dump that verifies it settles the verdict.
/// Categories the engine allows are not checked and produce no verdict.
pub fn assess(
    docs: &Documents<'_>,
    evidence: &Evidence,
    engine: &CheckEngine,
    score: &ScoreConfig,
) -> QualityReport {
    let claims = extract_claims(docs.mental_model);

    let mut verdicts = Vec::new();
    for claim in &claims {
        for category in classify(&claim.text) {
            if engine.is_allowed(category) {
                continue;
            }
            verdicts.push(verify_claim(claim, category, evidence, engine));
        }
    }
    let verified = verdicts.iter().filter(|v| v.verified).count();
    let behavioral_verified_rate = ratio(verified, verdicts.len());

    let with_evidence = claims.iter().filter(|c| c.has_evidence()).count();
    let structural = StructuralStats {
        features: claims.len(),
        features_with_evidence: with_evidence,
        evidence_link_rate: ratio(with_evidence, claims.len()),
        run_cmd_present: docs.run_command_present,
    };

    let hypothesis = HypothesisStats::from_text(docs.hypotheses);
    let clarity = ClarityStats::from_text(docs.mental_model, score);
    let wave_metrics = wave_metrics(&claims, evidence);

    let run_factor = if structural.run_cmd_present {
        1.0
    } else {
        score.missing_run_command_factor
    };
    let quality_index = (score.structural * structural.evidence_link_rate * run_factor
        + score.behavioral * behavioral_verified_rate
        + score.hypothesis * hypothesis.validated_ratio
        + score.clarity * clarity.clarity_score)
        .clamp(0.0, 1.0);

    QualityReport {
        structural,
        hypothesis,
        wave_metrics,
        behavioral_claim_checks: verdicts,
        behavioral_verified_rate,
        clarity,
        quality_index,
    }
}

/// Writes the JSON and Markdown renderings of `report`.
///
/// A failed write is reported to `sink` and returned.
pub fn write_reports(
    report: &QualityReport,
    json_path: &Path,
    markdown_path: &Path,
    sink: &DiagnosticSink,
) -> Result<(), EvalError> {
    let json = serde_json::to_string_pretty(report)?;
    write_file(json_path, &json, sink)?;
    write_file(markdown_path, &render_markdown(report), sink)
}

fn write_file(path: &Path, contents: &str, sink: &DiagnosticSink) -> Result<(), EvalError> {
    std::fs::write(path, contents).map_err(|source| {
        sink.emit(
            Diagnostic::error(
                DiagnosticCode::REPORT_WRITE,
                format!("could not write report: {source}"),
            )
            .at(Location::file(path)),
        );
        EvalError::WriteError {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn verify_claim(
    claim: &Claim,
    category: ClaimCategory,
    evidence: &Evidence,
    engine: &CheckEngine,
) -> VerificationVerdict {
    let mut verified = false;
    let mut scenario_observed = false;
    for reference in &claim.refs {
        let Some(series) = evidence.get(reference) else {
            continue;
        };
        let Some(outcome) = engine.verify(category, series) else {
            continue;
        };
        scenario_observed |= outcome.scenario_observed();
        if outcome.is_verified() {
            verified = true;
            break;
        }
    }
    debug!(%category, verified, scenario_observed, claim = %claim.text, "claim verdict");
    VerificationVerdict {
        feature_text: claim.text.clone(),
        category,
        verified,
        scenario_observed,
        refs: claim.refs.clone(),
    }
}

fn wave_metrics(claims: &[Claim], evidence: &Evidence) -> WaveMetrics {
    let referenced: BTreeSet<&str> = claims
        .iter()
        .flat_map(|c| c.refs.iter().map(String::as_str))
        .collect();

    let mut signals: BTreeSet<SignalKey> = BTreeSet::new();
    let mut toggles = Vec::new();
    for (_, series) in evidence.parsed() {
        for (key, count) in series.toggle_counts() {
            signals.insert(key);
            toggles.push(count);
        }
    }
    let mut unique_signals_seen: Vec<SignalKey> = signals.into_iter().collect();
    unique_signals_seen.sort_by_key(|key| key.as_str());
    let avg_signal_toggles = if toggles.is_empty() {
        0.0
    } else {
        toggles.iter().sum::<usize>() as f64 / toggles.len() as f64
    };

    WaveMetrics {
        referenced_wave_files: referenced
            .iter()
            .map(|r| r.rsplit('/').next().unwrap_or(r).to_string())
            .collect(),
        missing_references: evidence
            .missing()
            .filter(|r| referenced.contains(r))
            .map(str::to_string)
            .collect(),
        unique_signals_seen,
        avg_signal_toggles,
    }
}

fn read_document(dir: &Path, name: &str, sink: &DiagnosticSink) -> Result<String, EvalError> {
    let path = dir.join(name);
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            sink.emit(
                Diagnostic::warning(
                    DiagnosticCode::MISSING_DOCUMENT,
                    format!("`{name}` not found, treating it as empty"),
                )
                .at(Location::file(&path)),
            );
            Ok(String::new())
        }
        Err(source) => Err(EvalError::ReadError { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavesense_config::ChecksConfig;
    use wavesense_wave::SignalSeries;

    const RESET_DUMP: &str = "\
1 TOP.clk
2 TOP.rst
3 TOP.en
4 TOP.count[7:0]
1 2 3 4
=======
0 1 0 00
1 1 0 00
0 0 1 00
1 0 1 01
0 0 1 01
1 0 1 02
";

    fn evidence() -> Evidence {
        let mut evidence = Evidence::new();
        evidence.insert("waves/run1.txt", SignalSeries::parse(RESET_DUMP).unwrap());
        evidence.mark_missing("waves/gone.txt");
        evidence
    }

    fn run(docs: Documents<'_>) -> QualityReport {
        assess(
            &docs,
            &evidence(),
            &CheckEngine::with_defaults(),
            &ScoreConfig::default(),
        )
    }

    #[test]
    fn nothing_scores_clarity_only() {
        let report = run(Documents::default());
        assert_eq!(report.structural.features, 0);
        assert!(report.behavioral_claim_checks.is_empty());
        assert_eq!(report.behavioral_verified_rate, 0.0);
        assert_eq!(report.hypothesis.validated_ratio, 0.0);
        assert!((report.quality_index - 0.1).abs() < 1e-12);
    }

    #[test]
    fn verdict_per_claim_category() {
        let report = run(Documents {
            mental_model: "- Reset clears the count (waves/run1.txt)\n\
                           - Count increments each cycle waves/run1.txt\n\
                           - Wraps at 255 waves/run1.txt\n",
            ..Documents::default()
        });
        let verdicts = &report.behavioral_claim_checks;
        assert_eq!(verdicts.len(), 3);
        assert_eq!(verdicts[0].category, ClaimCategory::ResetClears);
        assert!(verdicts[0].verified);
        assert_eq!(verdicts[1].category, ClaimCategory::Increment);
        assert!(verdicts[1].verified);
        // The dump never reaches 255.
        assert_eq!(verdicts[2].category, ClaimCategory::Wraparound);
        assert!(!verdicts[2].verified);
        assert!(!verdicts[2].scenario_observed);
        assert!((report.behavioral_verified_rate - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn later_citation_can_verify() {
        let report = run(Documents {
            mental_model: "- reset clears count waves/gone.txt waves/run1.txt",
            ..Documents::default()
        });
        assert!(report.behavioral_claim_checks[0].verified);
        assert_eq!(
            report.behavioral_claim_checks[0].refs,
            vec!["waves/gone.txt", "waves/run1.txt"]
        );
        assert_eq!(report.wave_metrics.missing_references, vec!["waves/gone.txt"]);
        assert_eq!(
            report.wave_metrics.referenced_wave_files,
            vec!["gone.txt", "run1.txt"]
        );
    }

    #[test]
    fn uncited_claim_is_not_verified() {
        let report = run(Documents {
            mental_model: "- reset clears the counter",
            ..Documents::default()
        });
        assert_eq!(report.behavioral_claim_checks.len(), 1);
        assert!(!report.behavioral_claim_checks[0].verified);
        assert_eq!(report.structural.evidence_link_rate, 0.0);
    }

    #[test]
    fn run_command_discounts_structural() {
        let docs = Documents {
            mental_model: "- plain description waves/run1.txt",
            ..Documents::default()
        };
        let without = run(docs);
        let with = run(Documents {
            run_command_present: true,
            ..docs
        });
        // 0.2 * 1.0 * 0.8 + 0.1 clarity versus 0.2 * 1.0 + 0.1.
        assert!((without.quality_index - 0.26).abs() < 1e-12);
        assert!((with.quality_index - 0.30).abs() < 1e-12);
    }

    #[test]
    fn allowed_categories_produce_no_verdict() {
        let engine = CheckEngine::new(&ChecksConfig {
            allow: vec!["reset_clears".into()],
            ..ChecksConfig::default()
        })
        .unwrap();
        let docs = Documents {
            mental_model: "- reset clears count waves/run1.txt",
            ..Documents::default()
        };
        let report = assess(&docs, &evidence(), &engine, &ScoreConfig::default());
        assert!(report.behavioral_claim_checks.is_empty());
    }

    #[test]
    fn wave_metrics_inventory() {
        let report = run(Documents {
            mental_model: "- see waves/run1.txt",
            ..Documents::default()
        });
        let names: Vec<_> = report
            .wave_metrics
            .unique_signals_seen
            .iter()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(names, vec!["clk", "count", "en", "rst"]);
        // clk 5, rst 1, en 1, count 2 changes.
        assert!((report.wave_metrics.avg_signal_toggles - 2.25).abs() < 1e-12);
    }

    #[test]
    fn hypotheses_feed_the_index() {
        let report = run(Documents {
            hypotheses: "H1 VALIDATED\nH2 NOT TESTED\n",
            ..Documents::default()
        });
        assert!((report.hypothesis.validated_ratio - 0.5).abs() < 1e-12);
        assert!((report.quality_index - 0.2).abs() < 1e-12);
    }

    #[test]
    fn quality_index_stays_in_bounds() {
        let docs = Documents {
            mental_model: "- reset clears count waves/run1.txt\n- increments waves/run1.txt",
            hypotheses: "VALIDATED VALIDATED",
            run_command_present: true,
        };
        let report = run(docs);
        assert!((0.0..=1.0).contains(&report.quality_index));
        assert!((report.quality_index - 1.0).abs() < 1e-12);
    }
}
