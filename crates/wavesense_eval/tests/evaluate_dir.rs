//! End-to-end evaluation of artifact directories on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wavesense_config::{load_config_from_str, EvalConfig};
use wavesense_diagnostics::{DiagnosticCode, DiagnosticSink};
use wavesense_eval::{evaluate, write_reports, EvalError};

const COUNTER_DUMP: &str = "\
1 TOP.counter.clk
2 TOP.counter.rst
3 TOP.counter.en
4 TOP.counter.count[7:0]
1 2 3 4
=======
0 1 0 00
1 1 0 00
0 0 1 00
1 0 1 01
0 0 1 01
1 0 1 02
0 0 0 02
1 0 0 02
";

const WRAP_DUMP: &str = "\
1 TOP.counter.clk
2 TOP.counter.rst
3 TOP.counter.en
4 TOP.counter.count[7:0]
1 2 3 4
=======
0 0 1 fe
1 0 1 ff
0 0 1 ff
1 0 1 00
";

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn artifacts() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "mental_model.md",
        "# Counter\n\
         - Synchronous reset clears count to zero (waves/basic.txt)\n\
         - Count holds when en=0 (waves/basic.txt)\n\
         - Count wraps from 0xff to 0 (waves/basic.txt, waves/wrap.txt)\n\
         - Count probably saturates (waves/missing.txt)\n",
    );
    write(dir.path(), "hypotheses.md", "- reset: VALIDATED\n- saturate: NOT TESTED\n");
    write(dir.path(), "run.cmd", "obj_dir/Vcounter\n");
    write(dir.path(), "waves/basic.txt", COUNTER_DUMP);
    write(dir.path(), "waves/wrap.txt", WRAP_DUMP);
    dir
}

#[test]
fn evaluates_a_full_directory() {
    let dir = artifacts();
    let sink = DiagnosticSink::new();
    let report = evaluate(dir.path(), &EvalConfig::default(), &sink).unwrap();

    assert_eq!(report.structural.features, 4);
    assert_eq!(report.structural.features_with_evidence, 4);
    assert!(report.structural.run_cmd_present);

    let verdicts: Vec<(&str, bool)> = report
        .behavioral_claim_checks
        .iter()
        .map(|v| (v.category.as_str(), v.verified))
        .collect();
    assert_eq!(
        verdicts,
        vec![
            ("reset_clears", true),
            ("enable_gating", true),
            ("wraparound", true),
        ]
    );

    assert_eq!(
        report.wave_metrics.referenced_wave_files,
        vec!["basic.txt", "missing.txt", "wrap.txt"]
    );
    assert_eq!(report.wave_metrics.missing_references, vec!["waves/missing.txt"]);
    assert_eq!(report.hypothesis.validated, 1);

    let diags = sink.take_all();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, DiagnosticCode::MISSING_WAVEFORM);

    assert!((0.0..=1.0).contains(&report.quality_index));
}

#[test]
fn empty_directory_scores_clarity_only() {
    let dir = TempDir::new().unwrap();
    let sink = DiagnosticSink::new();
    let report = evaluate(dir.path(), &EvalConfig::default(), &sink).unwrap();
    assert!((report.quality_index - 0.1).abs() < 1e-12);

    let codes: Vec<_> = sink.take_all().into_iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![DiagnosticCode::MISSING_DOCUMENT, DiagnosticCode::MISSING_DOCUMENT]
    );
}

#[test]
fn unreadable_waveform_still_produces_a_report() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "mental_model.md", "- reset clears count waves/a.txt\n");
    fs::create_dir_all(dir.path().join("waves/a.txt")).unwrap();
    let sink = DiagnosticSink::new();
    let report = evaluate(dir.path(), &EvalConfig::default(), &sink).unwrap();

    assert_eq!(report.behavioral_claim_checks.len(), 1);
    let verdict = &report.behavioral_claim_checks[0];
    assert!(!verdict.verified);
    assert!(!verdict.scenario_observed);
    assert!(report.wave_metrics.missing_references.is_empty());

    let diags = sink.take_all();
    let unreadable: Vec<_> = diags
        .iter()
        .filter(|d| d.code == DiagnosticCode::UNREADABLE_WAVEFORM)
        .collect();
    assert_eq!(unreadable.len(), 1);
    assert!(unreadable[0].message.contains("waves/a.txt"));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("temp_artifacts");
    let err = evaluate(&missing, &EvalConfig::default(), &DiagnosticSink::new()).unwrap_err();
    assert!(matches!(err, EvalError::ArtifactsNotFound { ref path } if *path == missing));
    assert!(err.to_string().contains("temp_artifacts"));
}

#[test]
fn config_changes_artifact_names_and_width() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "notes.md", "- wraps around at 15 waves/nibble.txt\n");
    write(
        dir.path(),
        "waves/nibble.txt",
        "1 TOP.count[3:0]\n1\n==\ne\nf\n0\n",
    );
    let config = load_config_from_str(
        "[artifacts]\nmental_model = \"notes.md\"\n[checks]\nwidth = 4\n",
    )
    .unwrap();
    let report = evaluate(dir.path(), &config, &DiagnosticSink::new()).unwrap();
    assert_eq!(report.behavioral_claim_checks.len(), 1);
    assert!(report.behavioral_claim_checks[0].verified);
}

#[test]
fn unknown_allowed_category_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from_str("[checks]\nallow = [\"rollover\"]\n").unwrap();
    let err = evaluate(dir.path(), &config, &DiagnosticSink::new()).unwrap_err();
    assert!(matches!(err, EvalError::Checks(_)));
}

#[test]
fn writes_json_and_markdown() {
    let dir = artifacts();
    let sink = DiagnosticSink::new();
    let report = evaluate(dir.path(), &EvalConfig::default(), &sink).unwrap();
    let json_path = dir.path().join("eval_report.json");
    let md_path = dir.path().join("eval_report.md");
    write_reports(&report, &json_path, &md_path, &sink).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert!(keys.contains(&"behavioral_claim_checks"));
    assert_eq!(json["behavioral_claim_checks"][0]["category"], "reset_clears");
    assert_eq!(json["wave_metrics"]["unique_signals_seen"][0], "clk");

    let md = fs::read_to_string(&md_path).unwrap();
    assert!(md.starts_with("# Mental Model Evaluation Report\n"));
}

#[test]
fn unwritable_report_is_an_error() {
    let dir = TempDir::new().unwrap();
    let sink = DiagnosticSink::new();
    let report = evaluate(dir.path(), &EvalConfig::default(), &sink).unwrap();
    let bad = dir.path().join("no_such_dir").join("eval_report.json");
    let err = write_reports(&report, &bad, &dir.path().join("r.md"), &sink).unwrap_err();
    assert!(matches!(err, EvalError::WriteError { .. }));
    assert!(sink.has_errors());
}
