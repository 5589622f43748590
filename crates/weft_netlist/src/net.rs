//! Point-to-point nets and their driver/load slots.
//!
//! A net has two ends: the *driver* produces the signal and the *load*
//! consumes it. Internal nets have both ends inside the chip; boundary nets
//! have one end fixed to the chip's external environment. Each settable end is
//! bound at most once.

use std::fmt;

use serde::{Deserialize, Serialize};
use weft_common::Ident;

use crate::ids::{InstanceId, NetId};

/// The three variants of net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetKind {
    /// Driven by one instance, loaded by another.
    Internal,
    /// Driven by the external caller, loaded by one instance.
    BoundaryInput,
    /// Driven by one instance, loaded by the external caller.
    BoundaryOutput,
}

impl NetKind {
    /// Returns `true` for the two boundary variants.
    pub fn is_boundary(self) -> bool {
        !matches!(self, NetKind::Internal)
    }
}

impl fmt::Display for NetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetKind::Internal => write!(f, "internal net"),
            NetKind::BoundaryInput => write!(f, "boundary input"),
            NetKind::BoundaryOutput => write!(f, "boundary output"),
        }
    }
}

/// One end of a net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// The producing end.
    Driver,
    /// The consuming end.
    Load,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Driver => write!(f, "driver"),
            Slot::Load => write!(f, "load"),
        }
    }
}

/// What occupies a bound slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The chip boundary: fixed by the net's variant, never settable.
    External,
    /// An instance of the chip.
    Instance(InstanceId),
}

/// A refused bind: the slot was already occupied, or is implicitly external.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotConflict {
    /// Variant of the net that refused the bind.
    pub kind: NetKind,
    /// The slot that was asked for.
    pub slot: Slot,
    /// Who holds the slot already.
    pub holder: Endpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connection {
    Internal {
        driver: Option<InstanceId>,
        load: Option<InstanceId>,
    },
    BoundaryInput {
        load: Option<InstanceId>,
    },
    BoundaryOutput {
        driver: Option<InstanceId>,
    },
}

/// A single point-to-point connection owned by a [`Chip`](crate::Chip).
#[derive(Debug, Clone)]
pub struct Net {
    id: NetId,
    name: Ident,
    connection: Connection,
}

impl Net {
    pub(crate) fn new(id: NetId, name: Ident, kind: NetKind) -> Self {
        let connection = match kind {
            NetKind::Internal => Connection::Internal {
                driver: None,
                load: None,
            },
            NetKind::BoundaryInput => Connection::BoundaryInput { load: None },
            NetKind::BoundaryOutput => Connection::BoundaryOutput { driver: None },
        };
        Self {
            id,
            name,
            connection,
        }
    }

    /// The net's ID within its chip.
    pub fn id(&self) -> NetId {
        self.id
    }

    /// The interned name; resolve it with [`Chip::net_name`](crate::Chip::net_name).
    pub fn name(&self) -> Ident {
        self.name
    }

    /// Which of the three variants this net is.
    pub fn kind(&self) -> NetKind {
        match self.connection {
            Connection::Internal { .. } => NetKind::Internal,
            Connection::BoundaryInput { .. } => NetKind::BoundaryInput,
            Connection::BoundaryOutput { .. } => NetKind::BoundaryOutput,
        }
    }

    /// The occupant of `slot`, or `None` while it is unbound.
    pub fn endpoint(&self, slot: Slot) -> Option<Endpoint> {
        match (self.connection, slot) {
            (Connection::Internal { driver, .. }, Slot::Driver)
            | (Connection::BoundaryOutput { driver }, Slot::Driver) => {
                driver.map(Endpoint::Instance)
            }
            (Connection::Internal { load, .. }, Slot::Load)
            | (Connection::BoundaryInput { load }, Slot::Load) => load.map(Endpoint::Instance),
            (Connection::BoundaryInput { .. }, Slot::Driver)
            | (Connection::BoundaryOutput { .. }, Slot::Load) => Some(Endpoint::External),
        }
    }

    /// The driving end.
    pub fn driver(&self) -> Option<Endpoint> {
        self.endpoint(Slot::Driver)
    }

    /// The loading end.
    pub fn load(&self) -> Option<Endpoint> {
        self.endpoint(Slot::Load)
    }

    /// Binds `instance` as the driver.
    ///
    /// Fails if a driver is already bound, or if this is a boundary input
    /// (its driver is the external caller).
    pub fn bind_driver(&mut self, instance: InstanceId) -> Result<(), SlotConflict> {
        self.bind(Slot::Driver, instance)
    }

    /// Binds `instance` as the load.
    ///
    /// Fails if a load is already bound, or if this is a boundary output
    /// (its load is the external caller).
    pub fn bind_load(&mut self, instance: InstanceId) -> Result<(), SlotConflict> {
        self.bind(Slot::Load, instance)
    }

    fn bind(&mut self, slot: Slot, instance: InstanceId) -> Result<(), SlotConflict> {
        let kind = self.kind();
        let cell = self.settable(slot).ok_or(SlotConflict {
            kind,
            slot,
            holder: Endpoint::External,
        })?;
        if let Some(holder) = *cell {
            return Err(SlotConflict {
                kind,
                slot,
                holder: Endpoint::Instance(holder),
            });
        }
        *cell = Some(instance);
        Ok(())
    }

    /// Clears a slot bound during an instance construction that is being
    /// rolled back.
    pub(crate) fn unbind(&mut self, slot: Slot) {
        if let Some(cell) = self.settable(slot) {
            *cell = None;
        }
    }

    fn settable(&mut self, slot: Slot) -> Option<&mut Option<InstanceId>> {
        match (&mut self.connection, slot) {
            (Connection::Internal { driver, .. }, Slot::Driver)
            | (Connection::BoundaryOutput { driver }, Slot::Driver) => Some(driver),
            (Connection::Internal { load, .. }, Slot::Load)
            | (Connection::BoundaryInput { load }, Slot::Load) => Some(load),
            _ => None,
        }
    }

    /// The settable slots that are still unbound, driver first.
    pub fn missing_slots(&self) -> Vec<Slot> {
        [Slot::Driver, Slot::Load]
            .into_iter()
            .filter(|&slot| self.endpoint(slot).is_none())
            .collect()
    }

    /// Returns `true` if every settable slot is bound.
    pub fn is_complete(&self) -> bool {
        self.driver().is_some() && self.load().is_some()
    }
}
