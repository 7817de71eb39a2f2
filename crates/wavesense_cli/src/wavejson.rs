//! `wavesense wavejson`: Convert a dump to WaveDrom WaveJSON.

use wavesense_wave::to_wavejson;

use crate::check::load_table;
use crate::{GlobalArgs, WaveJsonArgs};

/// Runs the `wavesense wavejson` command.
pub fn run(args: &WaveJsonArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let table = load_table(&args.wave)?;
    let wavejson = to_wavejson(&table, &args.title);
    let json = if args.pretty {
        serde_json::to_string_pretty(&wavejson)?
    } else {
        serde_json::to_string(&wavejson)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            if !global.quiet {
                eprintln!("        Wrote {}", path.display());
            }
        }
        None => println!("{json}"),
    }
    Ok(0)
}
