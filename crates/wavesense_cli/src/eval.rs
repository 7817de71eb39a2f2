//! `wavesense eval`: Score an artifacts directory.
//!
//! 1. Load config (`--config`, else `<ARTIFACTS>/wavesense.toml`, else defaults)
//! 2. Evaluate claims against their cited waveforms
//! 3. Write the JSON and Markdown reports
//! 4. Print diagnostics and the quality index

use wavesense_diagnostics::DiagnosticSink;
use wavesense_eval::{evaluate, write_reports};

use crate::pipeline::{merge_allow, print_diagnostics, resolve_config};
use crate::{EvalArgs, GlobalArgs, ReportFormat};

/// Runs the `wavesense eval` command.
///
/// Returns exit code 0 once both reports are written, and 1 when a report
/// could not be written (the rendered `E101` names the path).
pub fn run(args: &EvalArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let dir = args.artifacts.as_path();
    let mut config = resolve_config(global, Some(dir))?;
    merge_allow(&mut config.checks, &args.allow);

    if !global.quiet {
        eprintln!("   Evaluating {}", dir.display());
    }

    let sink = DiagnosticSink::new();
    let evaluated = evaluate(dir, &config, &sink);
    print_diagnostics(&sink, global);
    let report = evaluated?;

    let json_path = args
        .out_json
        .clone()
        .unwrap_or_else(|| dir.join(&config.artifacts.json_report));
    let md_path = args
        .out_md
        .clone()
        .unwrap_or_else(|| dir.join(&config.artifacts.markdown_report));
    let written = write_reports(&report, &json_path, &md_path, &sink);
    print_diagnostics(&sink, global);
    if sink.has_errors() {
        return Ok(1);
    }
    written?;

    if !global.quiet {
        eprintln!("        Wrote {}", json_path.display());
        eprintln!("        Wrote {}", md_path.display());
    }

    match args.format {
        ReportFormat::Text => println!("Quality Index: {:.3}", report.quality_index),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(0)
}
