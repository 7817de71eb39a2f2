//! `wavesense coverage`: Summarize an LCOV tracefile.

use wavesense_coverage::{load_lcov, CoverageSummary};

use crate::pipeline::resolve_config;
use crate::{CoverageArgs, GlobalArgs, ReportFormat};

/// Runs the `wavesense coverage` command.
///
/// Thresholds come from the `[coverage]` section of `--config`, if given.
pub fn run(args: &CoverageArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global, None)?;
    let report = load_lcov(&args.info)?;
    let summary = CoverageSummary::new(&report, &config.coverage);

    match args.format {
        ReportFormat::Text => print!("{}", summary.render_text()),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(0)
}
