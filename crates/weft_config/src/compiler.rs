//! Component descriptors written as TOML.
//!
//! ```toml
//! name = "Adder"
//! inputs = ["a", "b"]
//! outputs = ["z"]
//! doc = "Adds two streams."
//! ```
//!
//! The name must be a usable Verilog identifier, and a port name may appear
//! only once across `inputs` and `outputs`.

use std::collections::HashSet;

use serde::Deserialize;
use weft_netlist::{naming, ComponentCompiler, ComponentDescriptor, DescribeError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentSource {
    name: String,
    #[serde(default)]
    inputs: Vec<String>,
    #[serde(default)]
    outputs: Vec<String>,
    #[serde(default)]
    doc: String,
}

/// Describes components from TOML sources.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlComponentCompiler;

impl ComponentCompiler for TomlComponentCompiler {
    fn describe(&self, source: &str) -> Result<ComponentDescriptor, DescribeError> {
        let parsed: ComponentSource =
            toml::from_str(source).map_err(|e| DescribeError::new(e.message().to_string()))?;
        if parsed.name.is_empty() {
            return Err(DescribeError::new("component name is empty"));
        }
        naming::check_identifier(&parsed.name).map_err(|e| DescribeError::new(e.to_string()))?;

        let mut seen = HashSet::new();
        if let Some(port) = parsed
            .inputs
            .iter()
            .chain(&parsed.outputs)
            .find(|port| !seen.insert(port.as_str()))
        {
            return Err(DescribeError::new(format!(
                "port `{port}` is declared more than once"
            )));
        }
        Ok(ComponentDescriptor::new(
            parsed.name,
            parsed.inputs,
            parsed.outputs,
            parsed.doc,
        ))
    }
}
