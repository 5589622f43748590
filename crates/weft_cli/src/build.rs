//! `weft build` — manifest to Verilog.
//!
//! 1. Find the project root and load `weft.toml`
//! 2. Describe the listed component sources
//! 3. Build the chip from the manifest
//! 4. Validate and elaborate
//! 5. Write `<chip>.<ext>` atomically, or print it with `--stdout`

use weft_config::ProjectConfig;
use weft_diagnostics::DiagnosticSink;
use weft_netlist::Violation;
use weft_verilog::{ElaborateError, OutputOptions};

use crate::pipeline::{build_chip, load_library, load_project, render_diagnostics};
use crate::{BuildArgs, GlobalArgs};

/// Runs the `weft build` command.
///
/// Returns exit code 0 when the module was produced, 1 if the manifest or the
/// chip has errors.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (root, config) = load_project(global)?;

    if !global.quiet {
        if config.project.version.is_empty() {
            eprintln!("   Building {}", config.project.name);
        } else {
            eprintln!(
                "   Building {} v{}",
                config.project.name, config.project.version
            );
        }
    }

    let mut sink = DiagnosticSink::new();
    let library = load_library(&root, &config, &mut sink);
    let chip = match build_chip(&config, &library, &mut sink) {
        Some(chip) if !sink.has_errors() => chip,
        _ => return Ok(fail(&mut sink, &config, global, &[])),
    };

    let result = if args.stdout {
        weft_verilog::elaborate(&chip).map(|text| {
            print!("{text}");
            None
        })
    } else {
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| root.join(&config.output.dir));
        let options = OutputOptions::new(dir).with_extension(config.output.extension.as_str());
        weft_verilog::write_module(&chip, &options).map(Some)
    };

    match result {
        Ok(Some(path)) => {
            if !global.quiet {
                eprintln!("   Generated {}", path.display());
            }
            Ok(0)
        }
        Ok(None) => Ok(0),
        Err(ElaborateError::IncompleteNetGraph { violations, .. }) => {
            Ok(fail(&mut sink, &config, global, &violations))
        }
        Err(e) => Err(e.into()),
    }
}

/// Reports the collected problems and returns the failing exit code.
fn fail(
    sink: &mut DiagnosticSink,
    config: &ProjectConfig,
    global: &GlobalArgs,
    violations: &[Violation],
) -> i32 {
    sink.extend(violations.iter().flat_map(Violation::to_diagnostics));
    render_diagnostics(sink, global.color);
    eprintln!(
        "error: could not build `{}` due to {} previous error(s)",
        config.project.name,
        sink.error_count()
    );
    1
}
