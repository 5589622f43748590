//! Component descriptors and the query that produces them.
//!
//! A component is a black box to the netlist: its name becomes the module type
//! of each instantiation and its ordered port lists fix how nets are bound.
//! Descriptors come from a [`ComponentCompiler`], which turns a source
//! description into a [`ComponentDescriptor`]; the [`ComponentLibrary`] makes
//! sure each distinct source is described only once.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use weft_common::ContentHash;

/// Direction of a component port, seen from the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// The component consumes this port; it loads the bound net.
    Input,
    /// The component produces this port; it drives the bound net.
    Output,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortDirection::Input => write!(f, "input"),
            PortDirection::Output => write!(f, "output"),
        }
    }
}

/// Opaque metadata describing a reusable component.
///
/// Immutable once obtained. The netlist only reads the name and the port-name
/// lists; it never checks them for internal consistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Module name used as the type of every instantiation.
    pub name: String,
    /// Input port names, in declaration order.
    pub input_ports: Vec<String>,
    /// Output port names, in declaration order.
    pub output_ports: Vec<String>,
    /// Free-form documentation extracted from the source.
    #[serde(default)]
    pub documentation: String,
}

impl ComponentDescriptor {
    /// Creates a descriptor from its parts.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        input_ports: impl IntoIterator<Item = S>,
        output_ports: impl IntoIterator<Item = S>,
        documentation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input_ports: input_ports.into_iter().map(Into::into).collect(),
            output_ports: output_ports.into_iter().map(Into::into).collect(),
            documentation: documentation.into(),
        }
    }

    /// `(number of input ports, number of output ports)`.
    pub fn arity(&self) -> (usize, usize) {
        (self.input_ports.len(), self.output_ports.len())
    }

    /// Finds a port by name, inputs first.
    ///
    /// Returns the port's direction and its position within that direction's
    /// declared list. A repeated name resolves to its first declaration.
    pub fn find_port(&self, port: &str) -> Option<(PortDirection, usize)> {
        if let Some(index) = self.input_ports.iter().position(|p| p == port) {
            return Some((PortDirection::Input, index));
        }
        self.output_ports
            .iter()
            .position(|p| p == port)
            .map(|index| (PortDirection::Output, index))
    }

    /// Returns the declared port names for one direction.
    pub fn ports(&self, direction: PortDirection) -> &[String] {
        match direction {
            PortDirection::Input => &self.input_ports,
            PortDirection::Output => &self.output_ports,
        }
    }
}

/// The component-compiler query: `describe(source) -> ComponentDescriptor`.
///
/// Implementations must be deterministic and free of side effects observable
/// by the netlist: describing the same source twice yields equal descriptors.
pub trait ComponentCompiler {
    /// Produces the descriptor of the component defined by `source`.
    fn describe(&self, source: &str) -> Result<ComponentDescriptor, DescribeError>;
}

/// A component source the compiler could not describe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot describe component: {reason}")]
pub struct DescribeError {
    /// Why the source was rejected.
    pub reason: String,
}

impl DescribeError {
    /// Creates a new describe error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors from registering components in a [`ComponentLibrary`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LibraryError {
    /// The compiler rejected the source.
    #[error(transparent)]
    Describe(#[from] DescribeError),

    /// Two different sources describe components with the same name.
    #[error("component `{name}` is defined by more than one source")]
    DuplicateComponent {
        /// The clashing component name.
        name: String,
    },
}

/// Descriptors obtained so far, one per distinct component definition.
///
/// Sources are keyed by [`ContentHash`]: describing identical source text a
/// second time returns the already-shared descriptor without querying the
/// compiler again.
#[derive(Debug, Default)]
pub struct ComponentLibrary {
    by_source: HashMap<ContentHash, Arc<ComponentDescriptor>>,
    by_name: BTreeMap<String, Arc<ComponentDescriptor>>,
}

impl ComponentLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes `source` with `compiler`, or returns the cached descriptor.
    pub fn describe<C: ComponentCompiler + ?Sized>(
        &mut self,
        compiler: &C,
        source: &str,
    ) -> Result<Arc<ComponentDescriptor>, LibraryError> {
        let hash = ContentHash::of_source(source);
        if let Some(descriptor) = self.by_source.get(&hash) {
            tracing::trace!(component = %descriptor.name, source = %hash.short(), "descriptor cache hit");
            return Ok(Arc::clone(descriptor));
        }

        let descriptor = compiler.describe(source)?;
        if self.by_name.contains_key(&descriptor.name) {
            return Err(LibraryError::DuplicateComponent {
                name: descriptor.name,
            });
        }

        tracing::debug!(
            component = %descriptor.name,
            inputs = descriptor.input_ports.len(),
            outputs = descriptor.output_ports.len(),
            source = %hash.short(),
            "described component"
        );
        let descriptor = Arc::new(descriptor);
        self.by_source.insert(hash, Arc::clone(&descriptor));
        self.by_name
            .insert(descriptor.name.clone(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Looks up a described component by name.
    pub fn get(&self, name: &str) -> Option<&Arc<ComponentDescriptor>> {
        self.by_name.get(name)
    }

    /// Iterates over descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ComponentDescriptor>> {
        self.by_name.values()
    }

    /// Returns the number of distinct components.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if no component has been described.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
