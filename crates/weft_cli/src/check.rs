//! `weft check` — build and validate the chip without writing output.

use serde_json::json;
use weft_diagnostics::DiagnosticSink;
use weft_netlist::Chip;

use crate::pipeline::{build_chip, load_library, load_project, render_diagnostics};
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `weft check` command.
///
/// Returns exit code 0 if no errors, 1 if there are errors.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (root, config) = load_project(global)?;

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!("   Checking {}", config.project.name);
    }

    let mut sink = DiagnosticSink::new();
    let library = load_library(&root, &config, &mut sink);
    let chip = build_chip(&config, &library, &mut sink);
    if let Some(Err(violations)) = chip.as_ref().map(Chip::validate) {
        for violation in &violations {
            sink.extend(violation.to_diagnostics());
        }
    }

    match args.format {
        ReportFormat::Text => {
            render_diagnostics(&sink, global.color);
            if !global.quiet {
                eprintln!(
                    "   Result: {} error(s), {} warning(s)",
                    sink.error_count(),
                    sink.warning_count()
                );
            }
        }
        ReportFormat::Json => {
            let report = json_report(&sink, chip.as_ref());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// The `--format json` document: diagnostics, counts, and the chip summary.
fn json_report(sink: &DiagnosticSink, chip: Option<&Chip>) -> serde_json::Value {
    json!({
        "errors": sink.error_count(),
        "warnings": sink.warning_count(),
        "diagnostics": sink.diagnostics(),
        "chip": chip.map(Chip::summary),
    })
}
