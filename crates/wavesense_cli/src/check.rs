//! `wavesense check`: Run every behaviour check against one dump.

use std::path::Path;

use wavesense_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Location};
use wavesense_verify::{CheckEngine, CheckOutcome, ClaimCategory};
use wavesense_wave::{SignalSeries, WaveTable};

use crate::pipeline::{merge_allow, print_diagnostics, resolve_config};
use crate::{CheckArgs, GlobalArgs};

/// Runs the `wavesense check` command.
///
/// Prints one `PASS`, `FAIL` or `SKIP` line per enabled category, followed
/// by the property the check tests. The exit code is 0 whatever the outcomes.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let mut config = resolve_config(global, None)?;
    if let Some(width) = args.width {
        config.checks.width = width;
    }
    merge_allow(&mut config.checks, &args.allow);
    let engine = CheckEngine::new(&config.checks)?;

    if !global.quiet {
        eprintln!("     Checking {}", args.wave.display());
    }

    let sink = DiagnosticSink::new();
    let series = load_series(&args.wave, &sink)?;
    print_diagnostics(&sink, global);

    for (category, outcome) in engine.run_all(&series) {
        println!("{}", outcome_line(category, outcome));
    }
    Ok(0)
}

fn outcome_line(category: ClaimCategory, outcome: CheckOutcome) -> String {
    format!(
        "{category:<18} {:<32} {}",
        outcome.to_string(),
        category.check().description()
    )
}

pub(crate) fn load_table(path: &Path) -> Result<WaveTable, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    WaveTable::parse(&text).ok_or_else(|| {
        format!(
            "{}: no waveform table (expected a column-order line before a `=` separator)",
            path.display()
        )
        .into()
    })
}

fn load_series(
    path: &Path,
    sink: &DiagnosticSink,
) -> Result<SignalSeries, Box<dyn std::error::Error>> {
    let table = load_table(path)?;
    if table.skipped_rows > 0 {
        sink.emit(
            Diagnostic::warning(
                DiagnosticCode::SKIPPED_ROWS,
                format!("skipped {} malformed row(s)", table.skipped_rows),
            )
            .at(Location::file(path)),
        );
    }
    Ok(SignalSeries::from_table(&table))
}
