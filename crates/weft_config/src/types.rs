//! Manifest types deserialized from `weft.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The top-level manifest parsed from `weft.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata; the name doubles as the chip name.
    pub project: ProjectMeta,
    /// Where the emitted module goes.
    #[serde(default)]
    pub output: OutputConfig,
    /// Component sources to describe.
    #[serde(default)]
    pub components: ComponentsConfig,
    /// The chip's nets and instances.
    #[serde(default)]
    pub chip: ChipConfig,
}

/// Core project metadata required in every `weft.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project and chip name.
    pub name: String,
    /// The project version string.
    #[serde(default)]
    pub version: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
}

/// Output location settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the project root.
    #[serde(default = "default_output_dir")]
    pub dir: String,
    /// File extension of the emitted module, without a dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            extension: default_extension(),
        }
    }
}

fn default_output_dir() -> String {
    "build".to_string()
}

fn default_extension() -> String {
    "v".to_string()
}

/// Component source files.
#[derive(Debug, Default, Deserialize)]
pub struct ComponentsConfig {
    /// Paths to component descriptor sources, relative to the project root.
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Declaration of the chip's nets and instances, in creation order.
#[derive(Debug, Default, Deserialize)]
pub struct ChipConfig {
    /// Boundary input names.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Boundary output names.
    #[serde(default)]
    pub outputs: Vec<String>,
    /// Named internal nets.
    #[serde(default)]
    pub wires: Vec<String>,
    /// Instances, in registration order.
    #[serde(default)]
    pub instances: Vec<InstanceDecl>,
}

/// One `[[chip.instances]]` entry.
///
/// Nets are given either positionally (`inputs`/`outputs`) or by port name
/// (`connect`), never both.
#[derive(Debug, Deserialize)]
pub struct InstanceDecl {
    /// Name of the component to instantiate.
    pub component: String,
    /// Nets bound to the input ports, in declared port order.
    #[serde(default)]
    pub inputs: Option<Vec<String>>,
    /// Nets bound to the output ports, in declared port order.
    #[serde(default)]
    pub outputs: Option<Vec<String>>,
    /// Port name to net name.
    #[serde(default)]
    pub connect: Option<BTreeMap<String, String>>,
}

/// How an [`InstanceDecl`] binds its nets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    /// Nets listed in declared port order. A missing list is empty.
    Positional {
        /// Input nets.
        inputs: &'a [String],
        /// Output nets.
        outputs: &'a [String],
    },
    /// Nets keyed by port name.
    Named(&'a BTreeMap<String, String>),
}

impl InstanceDecl {
    /// The binding mode of this declaration.
    ///
    /// A validated manifest never mixes the two modes; if it does, `connect`
    /// wins.
    pub fn binding(&self) -> Binding<'_> {
        match &self.connect {
            Some(map) => Binding::Named(map),
            None => Binding::Positional {
                inputs: self.inputs.as_deref().unwrap_or_default(),
                outputs: self.outputs.as_deref().unwrap_or_default(),
            },
        }
    }
}
