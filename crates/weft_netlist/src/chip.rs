//! The chip: owner of every net and instance of one design.
//!
//! Nets and instances live in append-only arenas, so the chip only ever grows
//! and IDs double as creation order. Instance construction is all-or-nothing:
//! the arity check, every bind, and registration either all happen or the
//! chip is left exactly as it was.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use weft_common::{Ident, InternalError, NameTable, WeftResult};

use crate::arena::Arena;
use crate::component::{ComponentDescriptor, PortDirection};
use crate::error::NetlistError;
use crate::ids::{InstanceId, NetId};
use crate::instance::Instance;
use crate::naming::{self, handshake_signals, INSTANCE_PREFIX, WIRE_PREFIX};
use crate::net::{Endpoint, Net, NetKind, Slot, SlotConflict};

/// A top-level design under construction.
#[derive(Debug)]
pub struct Chip {
    name: String,
    names: NameTable,
    net_by_name: HashMap<Ident, NetId>,
    nets: Arena<NetId, Net>,
    instances: Arena<InstanceId, Instance>,
}

impl Chip {
    /// Creates an empty chip. The name becomes the emitted module name.
    pub fn new(name: impl Into<String>) -> Result<Self, NetlistError> {
        let name = name.into();
        naming::check_identifier(&name)?;
        Ok(Self {
            name,
            names: NameTable::new(),
            net_by_name: HashMap::new(),
            nets: Arena::new(),
            instances: Arena::new(),
        })
    }

    /// The chip (module) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates an internal net named `wire_<net index>`.
    ///
    /// If that name is already taken a numeric suffix is appended, so this
    /// never fails.
    pub fn create_internal(&mut self) -> NetId {
        let base = format!("{WIRE_PREFIX}_{}", self.nets.next_id().as_raw());
        let name = naming::first_free(&base, |candidate| self.clash(candidate).is_none());
        self.register_net(&name, NetKind::Internal)
    }

    /// Creates an internal net with a caller-chosen name.
    pub fn create_internal_named(&mut self, name: &str) -> Result<NetId, NetlistError> {
        self.create_named(name, NetKind::Internal)
    }

    /// Creates a net driven from outside the chip.
    pub fn create_boundary_input(&mut self, name: &str) -> Result<NetId, NetlistError> {
        self.create_named(name, NetKind::BoundaryInput)
    }

    /// Creates a net loaded from outside the chip.
    pub fn create_boundary_output(&mut self, name: &str) -> Result<NetId, NetlistError> {
        self.create_named(name, NetKind::BoundaryOutput)
    }

    fn create_named(&mut self, name: &str, kind: NetKind) -> Result<NetId, NetlistError> {
        naming::check_identifier(name)?;
        if let Some(existing) = self.clash(name) {
            return Err(NetlistError::DuplicateName {
                requested: name.to_string(),
                existing,
            });
        }
        Ok(self.register_net(name, kind))
    }

    /// The first signal of `base`'s handshake triple that is already taken.
    fn clash(&self, base: &str) -> Option<String> {
        handshake_signals(base)
            .into_iter()
            .find(|signal| self.names.is_taken(signal))
    }

    fn register_net(&mut self, name: &str, kind: NetKind) -> NetId {
        let [data, strobe, ack] = handshake_signals(name);
        let ident = self.names.claim(&data);
        self.names.claim(&strobe);
        self.names.claim(&ack);

        let id = self.nets.next_id();
        self.nets.alloc(Net::new(id, ident, kind));
        self.net_by_name.insert(ident, id);
        tracing::debug!(chip = %self.name, net = %data, %kind, "created net");
        id
    }

    /// Creates an instance of `descriptor`, binding nets by position.
    ///
    /// `inputs[n]` becomes the load side of the n-th declared input port and
    /// `outputs[n]` the driver side of the n-th output port. Port roles are not
    /// checked beyond their order; see [`instantiate_by_name`](Self::instantiate_by_name)
    /// for a name-checked alternative.
    ///
    /// # Errors
    ///
    /// - [`NetlistError::ArityMismatch`] if the net counts differ from the
    ///   descriptor's port counts.
    /// - [`NetlistError::InvalidName`] if the component name cannot be emitted
    ///   as a module type.
    /// - [`NetlistError::AlreadyBound`] if any slot is taken or implicit. Binds
    ///   already made by this call are undone.
    ///
    /// On error no instance is registered and every net is unchanged.
    pub fn instantiate(
        &mut self,
        descriptor: &Arc<ComponentDescriptor>,
        inputs: &[NetId],
        outputs: &[NetId],
    ) -> Result<InstanceId, NetlistError> {
        let (expected_inputs, expected_outputs) = descriptor.arity();
        if inputs.len() != expected_inputs || outputs.len() != expected_outputs {
            return Err(NetlistError::ArityMismatch {
                component: descriptor.name.clone(),
                expected_inputs,
                expected_outputs,
                got_inputs: inputs.len(),
                got_outputs: outputs.len(),
            });
        }
        naming::check_identifier(&descriptor.name)?;
        for &net in inputs.iter().chain(outputs) {
            self.check_net(net)?;
        }

        let id = self.instances.next_id();
        let binds = inputs
            .iter()
            .map(|&net| (net, Slot::Load))
            .chain(outputs.iter().map(|&net| (net, Slot::Driver)));

        let mut done: Vec<(NetId, Slot)> = Vec::with_capacity(inputs.len() + outputs.len());
        for (net, slot) in binds {
            let result = match slot {
                Slot::Load => self.nets[net].bind_load(id),
                Slot::Driver => self.nets[net].bind_driver(id),
            };
            if let Err(conflict) = result {
                let err = self.conflict_error(net, conflict, id);
                for (net, slot) in done.into_iter().rev() {
                    self.nets[net].unbind(slot);
                }
                tracing::debug!(chip = %self.name, component = %descriptor.name, %err, "instantiation rolled back");
                return Err(err);
            }
            tracing::trace!(net = %self.net_name(net), %slot, instance = %id, "bound");
            done.push((net, slot));
        }

        let base = format!("{INSTANCE_PREFIX}_{}_{}", id.as_raw(), descriptor.name);
        let name = naming::first_free(&base, |candidate| !self.names.is_taken(candidate));
        let ident = self.names.claim(&name);
        self.instances.alloc(Instance::new(
            id,
            ident,
            Arc::clone(descriptor),
            inputs.to_vec(),
            outputs.to_vec(),
        ));
        tracing::debug!(chip = %self.name, instance = %name, component = %descriptor.name, "registered instance");
        Ok(id)
    }

    /// Creates an instance of `descriptor`, binding nets by port name.
    ///
    /// Each `(port, net)` pair is placed at the port's declared position, then
    /// [`instantiate`](Self::instantiate) runs on the resulting lists. Name
    /// errors are reported before any net is touched.
    ///
    /// # Errors
    ///
    /// [`NetlistError::UnknownPort`], [`NetlistError::DuplicatePort`], or
    /// [`NetlistError::UnconnectedPort`] for a bad mapping; otherwise the errors
    /// of [`instantiate`](Self::instantiate).
    ///
    /// Ports are looked up with [`ComponentDescriptor::find_port`], so when a
    /// descriptor repeats a port name only the first declaration can be named
    /// here. Use [`instantiate`](Self::instantiate) for such descriptors.
    pub fn instantiate_by_name<S: AsRef<str>>(
        &mut self,
        descriptor: &Arc<ComponentDescriptor>,
        connections: impl IntoIterator<Item = (S, NetId)>,
    ) -> Result<InstanceId, NetlistError> {
        let mut inputs: Vec<Option<NetId>> = vec![None; descriptor.input_ports.len()];
        let mut outputs: Vec<Option<NetId>> = vec![None; descriptor.output_ports.len()];

        for (port, net) in connections {
            let port = port.as_ref();
            let (direction, index) =
                descriptor
                    .find_port(port)
                    .ok_or_else(|| NetlistError::UnknownPort {
                        component: descriptor.name.clone(),
                        port: port.to_string(),
                    })?;
            let position = match direction {
                PortDirection::Input => &mut inputs[index],
                PortDirection::Output => &mut outputs[index],
            };
            if position.replace(net).is_some() {
                return Err(NetlistError::DuplicatePort {
                    component: descriptor.name.clone(),
                    port: port.to_string(),
                    direction,
                });
            }
        }

        let inputs = fill_ports(descriptor, PortDirection::Input, inputs)?;
        let outputs = fill_ports(descriptor, PortDirection::Output, outputs)?;
        self.instantiate(descriptor, &inputs, &outputs)
    }

    fn check_net(&self, net: NetId) -> WeftResult<()> {
        if self.nets.contains(net) {
            Ok(())
        } else {
            Err(InternalError::new(format!(
                "{net} is not part of chip `{}`",
                self.name
            )))
        }
    }

    fn conflict_error(
        &self,
        net: NetId,
        conflict: SlotConflict,
        pending: InstanceId,
    ) -> NetlistError {
        let holder = match conflict.holder {
            Endpoint::External => "the chip boundary".to_string(),
            Endpoint::Instance(id) if id == pending => "the instance being created".to_string(),
            Endpoint::Instance(id) => format!("instance `{}`", self.instance_name(id)),
        };
        NetlistError::AlreadyBound {
            net: self.net_name(net).to_string(),
            kind: conflict.kind,
            slot: conflict.slot,
            holder,
        }
    }

    /// Returns the net with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not issued by this chip.
    pub fn net(&self, id: NetId) -> &Net {
        &self.nets[id]
    }

    /// Returns the instance with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not issued by this chip.
    pub fn instance(&self, id: InstanceId) -> &Instance {
        &self.instances[id]
    }

    /// All nets, in creation order.
    pub fn nets(&self) -> impl Iterator<Item = &Net> {
        self.nets.values()
    }

    /// Nets of one variant, in creation order.
    pub fn nets_of_kind(&self, kind: NetKind) -> impl Iterator<Item = &Net> {
        self.nets.values().filter(move |net| net.kind() == kind)
    }

    /// All instances, in registration order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> {
        self.instances.values()
    }

    /// Number of nets of every variant.
    pub fn net_count(&self) -> usize {
        self.nets.len()
    }

    /// Number of registered instances.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Looks up a net by its (data signal) name.
    pub fn find_net(&self, name: &str) -> Option<NetId> {
        self.names
            .get(name)
            .and_then(|ident| self.net_by_name.get(&ident).copied())
    }

    /// The name of a net.
    pub fn net_name(&self, id: NetId) -> &str {
        self.names.resolve(self.nets[id].name())
    }

    /// The unique name of an instance, `inst_<registration index>_<component>`.
    pub fn instance_name(&self, id: InstanceId) -> &str {
        self.names.resolve(self.instances[id].name())
    }

    /// A serializable overview of the chip's contents.
    pub fn summary(&self) -> ChipSummary {
        let names_of = |kind| {
            self.nets_of_kind(kind)
                .map(|net| self.names.resolve(net.name()).to_string())
                .collect()
        };
        ChipSummary {
            name: self.name.clone(),
            boundary_inputs: names_of(NetKind::BoundaryInput),
            boundary_outputs: names_of(NetKind::BoundaryOutput),
            internal_nets: names_of(NetKind::Internal),
            instances: self
                .instances()
                .map(|inst| InstanceSummary {
                    name: self.names.resolve(inst.name()).to_string(),
                    component: inst.descriptor().name.clone(),
                })
                .collect(),
        }
    }
}

fn fill_ports(
    descriptor: &ComponentDescriptor,
    direction: PortDirection,
    nets: Vec<Option<NetId>>,
) -> Result<Vec<NetId>, NetlistError> {
    nets.into_iter()
        .zip(descriptor.ports(direction))
        .map(|(net, port)| {
            net.ok_or_else(|| NetlistError::UnconnectedPort {
                component: descriptor.name.clone(),
                port: port.clone(),
                direction,
            })
        })
        .collect()
}

/// Overview of a chip, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipSummary {
    /// The chip name.
    pub name: String,
    /// Boundary input names.
    pub boundary_inputs: Vec<String>,
    /// Boundary output names.
    pub boundary_outputs: Vec<String>,
    /// Internal net names.
    pub internal_nets: Vec<String>,
    /// Instances and their component names.
    pub instances: Vec<InstanceSummary>,
}

/// One instance in a [`ChipSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceSummary {
    /// The instance name.
    pub name: String,
    /// The instantiated component.
    pub component: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adder() -> Arc<ComponentDescriptor> {
        Arc::new(ComponentDescriptor::new("Adder", ["a", "b"], ["z"], ""))
    }

    fn negate() -> Arc<ComponentDescriptor> {
        Arc::new(ComponentDescriptor::new("Negate", ["x"], ["y"], ""))
    }

    #[test]
    fn new_chip_is_empty() {
        let chip = Chip::new("top").unwrap();
        assert_eq!(chip.name(), "top");
        assert_eq!(chip.net_count(), 0);
        assert_eq!(chip.instance_count(), 0);
    }

    #[test]
    fn chip_name_must_be_identifier() {
        assert!(matches!(
            Chip::new("my chip"),
            Err(NetlistError::InvalidName { .. })
        ));
    }

    #[test]
    fn internal_nets_named_by_index() {
        let mut chip = Chip::new("top").unwrap();
        chip.create_boundary_input("a").unwrap();
        let w = chip.create_internal();
        assert_eq!(chip.net_name(w), "wire_1");
        assert_eq!(chip.net(w).kind(), NetKind::Internal);
    }

    #[test]
    fn internal_name_skips_taken_names() {
        let mut chip = Chip::new("top").unwrap();
        chip.create_boundary_input("wire_1").unwrap();
        let w = chip.create_internal();
        assert_eq!(chip.net_name(w), "wire_1_1");
    }

    #[test]
    fn duplicate_boundary_name_rejected() {
        let mut chip = Chip::new("top").unwrap();
        chip.create_boundary_input("a").unwrap();
        let err = chip.create_boundary_output("a").unwrap_err();
        assert_eq!(
            err,
            NetlistError::DuplicateName {
                requested: "a".to_string(),
                existing: "a".to_string(),
            }
        );
        assert_eq!(chip.net_count(), 1);
    }

    #[test]
    fn handshake_suffix_collision_rejected() {
        let mut chip = Chip::new("top").unwrap();
        chip.create_boundary_input("a_stb").unwrap();
        let err = chip.create_boundary_input("a").unwrap_err();
        assert!(matches!(
            err,
            NetlistError::DuplicateName { ref existing, .. } if existing == "a_stb"
        ));
    }

    #[test]
    fn invalid_boundary_name_rejected() {
        let mut chip = Chip::new("top").unwrap();
        assert!(matches!(
            chip.create_boundary_input("wire"),
            Err(NetlistError::InvalidName { .. })
        ));
        assert_eq!(chip.net_count(), 0);
    }

    #[test]
    fn instantiate_binds_positionally() {
        let mut chip = Chip::new("top").unwrap();
        let a = chip.create_boundary_input("a").unwrap();
        let b = chip.create_boundary_input("b").unwrap();
        let sum = chip.create_boundary_output("sum").unwrap();
        let id = chip.instantiate(&adder(), &[a, b], &[sum]).unwrap();

        assert_eq!(chip.net(a).load(), Some(Endpoint::Instance(id)));
        assert_eq!(chip.net(b).load(), Some(Endpoint::Instance(id)));
        assert_eq!(chip.net(sum).driver(), Some(Endpoint::Instance(id)));
        assert_eq!(chip.instance(id).inputs(), [a, b]);
        assert_eq!(chip.instance(id).connections().collect::<Vec<_>>(), vec![a, b, sum]);
        assert_eq!(chip.instance_name(id), "inst_0_Adder");
    }

    #[test]
    fn arity_mismatch_registers_nothing() {
        let mut chip = Chip::new("top").unwrap();
        let a = chip.create_boundary_input("a").unwrap();
        let sum = chip.create_boundary_output("sum").unwrap();
        let err = chip.instantiate(&adder(), &[a], &[sum]).unwrap_err();
        assert!(matches!(
            err,
            NetlistError::ArityMismatch {
                expected_inputs: 2,
                got_inputs: 1,
                ..
            }
        ));
        assert_eq!(chip.instance_count(), 0);
        assert_eq!(chip.net(a).load(), None);
        assert_eq!(chip.net(sum).driver(), None);
    }

    #[test]
    fn component_name_must_be_an_identifier() {
        for bad in ["My Adder", "module", "7seg"] {
            let mut chip = Chip::new("top").unwrap();
            let a = chip.create_boundary_input("a").unwrap();
            let b = chip.create_boundary_input("b").unwrap();
            let sum = chip.create_boundary_output("sum").unwrap();
            let descriptor = Arc::new(ComponentDescriptor::new(bad, ["a", "b"], ["z"], ""));
            let err = chip.instantiate(&descriptor, &[a, b], &[sum]).unwrap_err();
            assert!(
                matches!(&err, NetlistError::InvalidName { name, .. } if name == bad),
                "{bad}: {err}"
            );
            assert_eq!(chip.instance_count(), 0);
            assert_eq!(chip.net(a).load(), None);
            assert_eq!(chip.net(b).load(), None);
            assert_eq!(chip.net(sum).driver(), None);
        }
    }

    #[test]
    fn repeated_port_name_leaves_later_declaration_unconnected() {
        let mut chip = Chip::new("top").unwrap();
        let x = chip.create_boundary_input("x").unwrap();
        let descriptor = Arc::new(ComponentDescriptor::new(
            "Twin",
            ["a", "a"],
            Vec::<&str>::new(),
            "",
        ));
        let err = chip.instantiate_by_name(&descriptor, [("a", x)]).unwrap_err();
        assert!(matches!(err, NetlistError::UnconnectedPort { .. }));
        assert_eq!(chip.net(x).load(), None);
    }

    #[test]
    fn output_arity_checked_too() {
        let mut chip = Chip::new("top").unwrap();
        let a = chip.create_boundary_input("a").unwrap();
        let b = chip.create_boundary_input("b").unwrap();
        let err = chip.instantiate(&adder(), &[a, b], &[]).unwrap_err();
        assert!(matches!(err, NetlistError::ArityMismatch { got_outputs: 0, .. }));
        assert_eq!(chip.net(a).load(), None);
    }

    #[test]
    fn second_load_on_boundary_input_rolls_back() {
        let mut chip = Chip::new("top").unwrap();
        let a = chip.create_boundary_input("a").unwrap();
        let b = chip.create_boundary_input("b").unwrap();
        let c = chip.create_boundary_input("c").unwrap();
        let sum = chip.create_boundary_output("sum").unwrap();
        let y = chip.create_boundary_output("y").unwrap();

        let first = chip.instantiate(&negate(), &[a], &[y]).unwrap();
        // `c` binds before `a` fails.
        let err = chip.instantiate(&adder(), &[c, a], &[sum]).unwrap_err();
        assert_eq!(
            err,
            NetlistError::AlreadyBound {
                net: "a".to_string(),
                kind: NetKind::BoundaryInput,
                slot: Slot::Load,
                holder: "instance `inst_0_Negate`".to_string(),
            }
        );
        assert_eq!(chip.instance_count(), 1);
        assert_eq!(chip.net(c).load(), None);
        assert_eq!(chip.net(sum).driver(), None);
        assert_eq!(chip.net(a).load(), Some(Endpoint::Instance(first)));
        assert_eq!(chip.net(b).load(), None);
    }

    #[test]
    fn output_bound_to_boundary_input_rejected() {
        let mut chip = Chip::new("top").unwrap();
        let x = chip.create_boundary_input("x").unwrap();
        let other = chip.create_boundary_input("other").unwrap();
        let err = chip.instantiate(&negate(), &[x], &[other]).unwrap_err();
        assert_eq!(
            err,
            NetlistError::AlreadyBound {
                net: "other".to_string(),
                kind: NetKind::BoundaryInput,
                slot: Slot::Driver,
                holder: "the chip boundary".to_string(),
            }
        );
        assert_eq!(chip.net(x).load(), None);
        assert_eq!(chip.instance_count(), 0);
    }

    #[test]
    fn same_net_twice_in_one_instance_rejected() {
        let mut chip = Chip::new("top").unwrap();
        let a = chip.create_boundary_input("a").unwrap();
        let sum = chip.create_boundary_output("sum").unwrap();
        let err = chip.instantiate(&adder(), &[a, a], &[sum]).unwrap_err();
        assert!(matches!(
            err,
            NetlistError::AlreadyBound { ref holder, .. } if holder == "the instance being created"
        ));
        assert_eq!(chip.net(a).load(), None);
    }

    #[test]
    fn internal_net_links_two_instances() {
        let mut chip = Chip::new("top").unwrap();
        let x = chip.create_boundary_input("x").unwrap();
        let y = chip.create_boundary_output("y").unwrap();
        let w = chip.create_internal();
        let first = chip.instantiate(&negate(), &[x], &[w]).unwrap();
        let second = chip.instantiate(&negate(), &[w], &[y]).unwrap();
        assert_eq!(chip.net(w).driver(), Some(Endpoint::Instance(first)));
        assert_eq!(chip.net(w).load(), Some(Endpoint::Instance(second)));
        assert_eq!(chip.instance_name(second), "inst_1_Negate");
    }

    #[test]
    fn registration_ids_skip_failed_attempts() {
        let mut chip = Chip::new("top").unwrap();
        let x = chip.create_boundary_input("x").unwrap();
        let y = chip.create_boundary_output("y").unwrap();
        assert!(chip.instantiate(&negate(), &[], &[y]).is_err());
        let id = chip.instantiate(&negate(), &[x], &[y]).unwrap();
        assert_eq!(id.as_raw(), 0);
        assert_eq!(chip.instance_name(id), "inst_0_Negate");
    }

    #[test]
    fn instance_name_avoids_taken_signal() {
        let mut chip = Chip::new("top").unwrap();
        let x = chip.create_boundary_input("inst_0_Negate").unwrap();
        let y = chip.create_boundary_output("y").unwrap();
        let id = chip.instantiate(&negate(), &[x], &[y]).unwrap();
        assert_eq!(chip.instance_name(id), "inst_0_Negate_1");
    }

    #[test]
    fn foreign_net_id_is_internal_error() {
        let mut chip = Chip::new("top").unwrap();
        let x = chip.create_boundary_input("x").unwrap();
        let err = chip
            .instantiate(&negate(), &[x], &[NetId::from_raw(40)])
            .unwrap_err();
        assert!(matches!(err, NetlistError::Internal(_)));
        assert_eq!(chip.net(x).load(), None);
    }

    #[test]
    fn by_name_maps_to_declared_order() {
        let mut chip = Chip::new("top").unwrap();
        let a = chip.create_boundary_input("a").unwrap();
        let b = chip.create_boundary_input("b").unwrap();
        let sum = chip.create_boundary_output("sum").unwrap();
        let id = chip
            .instantiate_by_name(&adder(), [("z", sum), ("b", b), ("a", a)])
            .unwrap();
        assert_eq!(chip.instance(id).inputs(), [a, b]);
        assert_eq!(chip.instance(id).outputs(), [sum]);
    }

    #[test]
    fn by_name_unknown_port() {
        let mut chip = Chip::new("top").unwrap();
        let a = chip.create_boundary_input("a").unwrap();
        let err = chip
            .instantiate_by_name(&negate(), [("q", a)])
            .unwrap_err();
        assert_eq!(
            err,
            NetlistError::UnknownPort {
                component: "Negate".to_string(),
                port: "q".to_string(),
            }
        );
        assert_eq!(chip.net(a).load(), None);
    }

    #[test]
    fn by_name_duplicate_and_unconnected_ports() {
        let mut chip = Chip::new("top").unwrap();
        let a = chip.create_boundary_input("a").unwrap();
        let b = chip.create_boundary_input("b").unwrap();
        let sum = chip.create_boundary_output("sum").unwrap();

        let err = chip
            .instantiate_by_name(&adder(), [("a", a), ("a", b), ("z", sum)])
            .unwrap_err();
        assert!(matches!(err, NetlistError::DuplicatePort { direction: PortDirection::Input, .. }));

        let err = chip
            .instantiate_by_name(&adder(), [("a", a), ("z", sum)])
            .unwrap_err();
        assert_eq!(
            err,
            NetlistError::UnconnectedPort {
                component: "Adder".to_string(),
                port: "b".to_string(),
                direction: PortDirection::Input,
            }
        );
        assert_eq!(chip.instance_count(), 0);
        assert_eq!(chip.net(a).load(), None);
    }

    #[test]
    fn find_net_by_name() {
        let mut chip = Chip::new("top").unwrap();
        let a = chip.create_boundary_input("a").unwrap();
        assert_eq!(chip.find_net("a"), Some(a));
        assert_eq!(chip.find_net("a_stb"), None);
        assert_eq!(chip.find_net("b"), None);
    }

    #[test]
    fn summary_lists_in_creation_order() {
        let mut chip = Chip::new("top").unwrap();
        let x = chip.create_boundary_input("x").unwrap();
        let y = chip.create_boundary_output("y").unwrap();
        let w = chip.create_internal_named("mid").unwrap();
        chip.instantiate(&negate(), &[x], &[w]).unwrap();
        chip.instantiate(&negate(), &[w], &[y]).unwrap();

        let summary = chip.summary();
        assert_eq!(summary.boundary_inputs, vec!["x"]);
        assert_eq!(summary.boundary_outputs, vec!["y"]);
        assert_eq!(summary.internal_nets, vec!["mid"]);
        let names: Vec<_> = summary.instances.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["inst_0_Negate", "inst_1_Negate"]);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["instances"][1]["component"], "Negate");
    }
}
