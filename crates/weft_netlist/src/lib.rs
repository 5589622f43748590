//! The netlist graph model of a Weft chip.
//!
//! A [`Chip`] owns every [`Net`] and [`Instance`] created under it in
//! append-only arenas. Nets refer to the instances driving and loading them by
//! [`InstanceId`]; instances list their nets by [`NetId`]. Connection rules are
//! enforced when an instance is created, and completeness is checked by
//! [`Chip::validate`] before elaboration.
//!
//! ```ignore
//! let mut chip = Chip::new("adder_chip")?;
//! let a = chip.create_boundary_input("a")?;
//! let b = chip.create_boundary_input("b")?;
//! let sum = chip.create_boundary_output("sum")?;
//! chip.instantiate(&adder, &[a, b], &[sum])?;
//! chip.validate()?;
//! ```

#![warn(missing_docs)]

pub mod arena;
pub mod chip;
pub mod codes;
pub mod component;
pub mod error;
pub mod ids;
pub mod instance;
pub mod naming;
pub mod net;
pub mod validate;

pub use arena::{Arena, ArenaId};
pub use chip::{Chip, ChipSummary, InstanceSummary};
pub use component::{
    ComponentCompiler, ComponentDescriptor, ComponentLibrary, DescribeError, LibraryError,
    PortDirection,
};
pub use error::NetlistError;
pub use ids::{InstanceId, NetId};
pub use instance::Instance;
pub use net::{Endpoint, Net, NetKind, Slot, SlotConflict};
pub use validate::Violation;
