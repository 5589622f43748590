//! Shared pipeline helpers for CLI commands.
//!
//! Contains the steps used by `build` and `check`: project root resolution,
//! manifest loading, describing component sources, building the chip from
//! the manifest, and rendering diagnostics.
//!
//! Building keeps going after a failed step so one run reports every problem
//! in the manifest; each failure becomes a diagnostic in the sink.

use std::path::{Path, PathBuf};

use weft_config::{Binding, ProjectConfig, TomlComponentCompiler, CONFIG_FILE};
use weft_diagnostics::{
    Category, Diagnostic, DiagnosticCode, DiagnosticRenderer, DiagnosticSink, TerminalRenderer,
};
use weft_netlist::{Chip, ComponentLibrary, NetId, NetlistError};

use crate::GlobalArgs;

/// Manifest names a component no source describes.
pub const E308: DiagnosticCode = DiagnosticCode::new(Category::Error, 308);

/// Manifest names a net the chip does not declare.
pub const E309: DiagnosticCode = DiagnosticCode::new(Category::Error, 309);

/// A component source could not be read or described.
pub const E310: DiagnosticCode = DiagnosticCode::new(Category::Error, 310);

/// Walks up from `start` looking for the nearest directory containing `weft.toml`.
///
/// Returns the directory containing `weft.toml`, or an error if none is found.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir → itself).
/// Otherwise walks up from the current directory looking for `weft.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Resolves the project root and loads its manifest.
///
/// An explicit `--config` file is loaded as given, so it need not be called
/// `weft.toml`.
pub fn load_project(
    global: &GlobalArgs,
) -> Result<(PathBuf, ProjectConfig), Box<dyn std::error::Error>> {
    let root = resolve_project_root(global)?;
    let config = match global.config.as_deref().map(Path::new) {
        Some(path) if path.is_file() => weft_config::load_config_file(path)?,
        _ => weft_config::load_config(&root)?,
    };
    tracing::debug!(root = %root.display(), project = %config.project.name, "loaded manifest");
    Ok((root, config))
}

/// Describes every component source listed in the manifest.
///
/// Paths are relative to `root`. Unreadable or rejected sources are reported
/// to `sink` under `E310` and skipped.
pub fn load_library(
    root: &Path,
    config: &ProjectConfig,
    sink: &mut DiagnosticSink,
) -> ComponentLibrary {
    let mut library = ComponentLibrary::new();
    for rel in &config.components.paths {
        let path = root.join(rel);
        let result = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|source| {
                library
                    .describe(&TomlComponentCompiler, &source)
                    .map_err(|e| e.to_string())
            });
        if let Err(reason) = result {
            sink.emit(
                Diagnostic::error(E310, format!("cannot load component source: {reason}"))
                    .with_subject(rel.as_str()),
            );
        }
    }
    library
}

/// Builds the chip declared by the manifest.
///
/// Nets are created in manifest order (inputs, outputs, wires), then
/// instances. Every failure is reported to `sink` and the offending entry is
/// skipped. Returns `None` only if the chip itself cannot be created.
pub fn build_chip(
    config: &ProjectConfig,
    library: &ComponentLibrary,
    sink: &mut DiagnosticSink,
) -> Option<Chip> {
    let mut chip = match Chip::new(config.project.name.as_str()) {
        Ok(chip) => chip,
        Err(e) => {
            sink.emit(e.to_diagnostic().with_note("the chip is named by `project.name`"));
            return None;
        }
    };

    for name in &config.chip.inputs {
        report(sink, chip.create_boundary_input(name), "chip.inputs");
    }
    for name in &config.chip.outputs {
        report(sink, chip.create_boundary_output(name), "chip.outputs");
    }
    for name in &config.chip.wires {
        report(sink, chip.create_internal_named(name), "chip.wires");
    }

    for (index, decl) in config.chip.instances.iter().enumerate() {
        let origin = format!("chip.instances[{index}]");
        let Some(descriptor) = library.get(&decl.component) else {
            sink.emit(
                Diagnostic::error(E308, format!("unknown component `{}`", decl.component))
                    .with_subject(origin.as_str())
                    .with_help("list its source under `components.paths`"),
            );
            continue;
        };

        let result = match decl.binding() {
            Binding::Positional { inputs, outputs } => {
                let inputs = lookup_nets(&chip, inputs.iter(), &origin, sink);
                let outputs = lookup_nets(&chip, outputs.iter(), &origin, sink);
                match (inputs, outputs) {
                    (Some(inputs), Some(outputs)) => {
                        chip.instantiate(descriptor, &inputs, &outputs)
                    }
                    _ => continue,
                }
            }
            Binding::Named(map) => {
                let Some(nets) = lookup_nets(&chip, map.values(), &origin, sink) else {
                    continue;
                };
                let pairs: Vec<(&str, NetId)> =
                    map.keys().map(String::as_str).zip(nets).collect();
                chip.instantiate_by_name(descriptor, pairs)
            }
        };
        report(sink, result, &origin);
    }

    Some(chip)
}

/// Resolves net names, reporting every unknown one. Returns `None` if any is unknown.
fn lookup_nets<'a>(
    chip: &Chip,
    names: impl Iterator<Item = &'a String>,
    origin: &str,
    sink: &mut DiagnosticSink,
) -> Option<Vec<NetId>> {
    let mut nets = Vec::new();
    let mut complete = true;
    for name in names {
        match chip.find_net(name) {
            Some(net) => nets.push(net),
            None => {
                complete = false;
                sink.emit(
                    Diagnostic::error(E309, format!("unknown net `{name}`"))
                        .with_subject(origin)
                        .with_help("declare it under `chip.inputs`, `chip.outputs` or `chip.wires`"),
                );
            }
        }
    }
    complete.then_some(nets)
}

fn report<T>(sink: &mut DiagnosticSink, result: Result<T, NetlistError>, origin: &str) {
    if let Err(e) = result {
        sink.emit(e.to_diagnostic().with_note(format!("in `{origin}`")));
    }
}

/// Renders all diagnostics from a sink to stderr using the terminal renderer.
///
/// Returns the number of diagnostics rendered.
pub fn render_diagnostics(sink: &DiagnosticSink, color: bool) -> usize {
    let renderer = TerminalRenderer::new(color);
    for diag in sink.diagnostics() {
        eprintln!("{}", renderer.render(diag));
    }
    sink.diagnostics().len()
}
