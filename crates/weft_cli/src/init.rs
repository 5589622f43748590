//! `weft init` — project scaffolding command.
//!
//! Creates a `weft.toml` describing a one-adder chip and the matching
//! `components/adder.toml`, so a fresh project builds straight away.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use weft_config::CONFIG_FILE;
use weft_netlist::naming;

use crate::GlobalArgs;

/// Runs the `weft init` command.
///
/// If `name` is `Some`, creates a new subdirectory with that name.
/// Otherwise initializes in the current working directory.
pub fn run(name: Option<String>, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = match &name {
        Some(n) => {
            let dir = PathBuf::from(n);
            if dir.exists() {
                return Err(format!("directory '{n}' already exists").into());
            }
            fs::create_dir_all(&dir)?;
            dir
        }
        None => std::env::current_dir()?,
    };
    if project_dir.join(CONFIG_FILE).exists() {
        return Err(format!("{CONFIG_FILE} already exists in {}", project_dir.display()).into());
    }

    let chip_name = chip_name_for(
        project_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("my_chip"),
    );

    if !global.quiet {
        eprintln!("  Creating new Weft project `{chip_name}`");
    }
    for path in scaffold(&project_dir, &chip_name)? {
        if !global.quiet {
            eprintln!("     Created {}", path.display());
        }
    }
    Ok(0)
}

/// Turns a directory name into a usable chip name.
fn chip_name_for(dir_name: &str) -> String {
    let mut name: String = dir_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if !name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        name.insert(0, '_');
    }
    // Only a keyword can still be rejected here.
    if naming::check_identifier(&name).is_err() {
        name.push('_');
    }
    name
}

/// Writes the template files and returns their paths.
fn scaffold(root: &Path, chip_name: &str) -> io::Result<Vec<PathBuf>> {
    let components = root.join("components");
    fs::create_dir_all(&components)?;

    let manifest = root.join(CONFIG_FILE);
    fs::write(
        &manifest,
        format!(
            r#"[project]
name = "{chip_name}"
version = "0.1.0"

[output]
dir = "build"

[components]
paths = ["components/adder.toml"]

[chip]
inputs = ["a", "b"]
outputs = ["sum"]

[[chip.instances]]
component = "Adder"
inputs = ["a", "b"]
outputs = ["sum"]
"#
        ),
    )?;

    let adder = components.join("adder.toml");
    fs::write(
        &adder,
        r#"name = "Adder"
inputs = ["a", "b"]
outputs = ["z"]
doc = "Adds two 16-bit streams."
"#,
    )?;

    Ok(vec![manifest, adder])
}
