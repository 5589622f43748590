//! `weft describe` — print what a component source declares.

use std::fmt::Write;

use serde_json::json;
use weft_common::ContentHash;
use weft_config::TomlComponentCompiler;
use weft_netlist::{ComponentCompiler, ComponentDescriptor};

use crate::{DescribeArgs, GlobalArgs, ReportFormat};

/// Runs the `weft describe` command.
pub fn run(args: &DescribeArgs, _global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(&args.source)
        .map_err(|e| format!("cannot read {}: {e}", args.source.display()))?;
    let descriptor = TomlComponentCompiler.describe(&source)?;
    let hash = ContentHash::of_source(&source);

    match args.format {
        ReportFormat::Text => print!("{}", render_text(&descriptor, &hash)),
        ReportFormat::Json => {
            let value = json!({
                "hash": hash.to_string(),
                "descriptor": descriptor,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(0)
}

fn render_text(descriptor: &ComponentDescriptor, hash: &ContentHash) -> String {
    let list = |ports: &[String]| {
        if ports.is_empty() {
            "(none)".to_string()
        } else {
            ports.join(", ")
        }
    };
    let mut out = String::new();
    let _ = writeln!(out, "component {} ({})", descriptor.name, hash.short());
    let _ = writeln!(out, "  inputs:  {}", list(&descriptor.input_ports));
    let _ = writeln!(out, "  outputs: {}", list(&descriptor.output_ports));
    if !descriptor.documentation.is_empty() {
        let _ = writeln!(out);
        for line in descriptor.documentation.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}
