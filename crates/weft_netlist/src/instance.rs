//! Component instances.

use std::sync::Arc;

use weft_common::Ident;

use crate::component::ComponentDescriptor;
use crate::ids::{InstanceId, NetId};

/// A component bound positionally to nets of its chip.
///
/// `inputs[n]` is connected to the descriptor's n-th declared input port and
/// `outputs[n]` to its n-th output port. Instances only exist once every
/// bind succeeded, so both lists always match the descriptor's arity.
#[derive(Debug, Clone)]
pub struct Instance {
    id: InstanceId,
    name: Ident,
    descriptor: Arc<ComponentDescriptor>,
    inputs: Vec<NetId>,
    outputs: Vec<NetId>,
}

impl Instance {
    pub(crate) fn new(
        id: InstanceId,
        name: Ident,
        descriptor: Arc<ComponentDescriptor>,
        inputs: Vec<NetId>,
        outputs: Vec<NetId>,
    ) -> Self {
        Self {
            id,
            name,
            descriptor,
            inputs,
            outputs,
        }
    }

    /// The registration ID.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The interned instance name; resolve it with
    /// [`Chip::instance_name`](crate::Chip::instance_name).
    pub fn name(&self) -> Ident {
        self.name
    }

    /// The component this is an instance of.
    pub fn descriptor(&self) -> &Arc<ComponentDescriptor> {
        &self.descriptor
    }

    /// Nets loaded by this instance, in input-port order.
    pub fn inputs(&self) -> &[NetId] {
        &self.inputs
    }

    /// Nets driven by this instance, in output-port order.
    pub fn outputs(&self) -> &[NetId] {
        &self.outputs
    }

    /// Input nets followed by output nets: the positional connection order.
    pub fn connections(&self) -> impl Iterator<Item = NetId> + '_ {
        self.inputs.iter().chain(&self.outputs).copied()
    }
}
