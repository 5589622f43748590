//! Completeness check of a chip's net graph.

use std::fmt;

use serde::Serialize;

use crate::chip::Chip;
use crate::ids::NetId;
use crate::net::{NetKind, Slot};

/// A net with at least one settable slot left unbound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The net's name.
    pub net: String,
    /// The net's ID.
    #[serde(skip)]
    pub net_id: NetId,
    /// The net's variant.
    pub kind: NetKind,
    /// The unbound slots, driver first.
    pub missing: Vec<Slot>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` has no ", self.kind, self.net)?;
        match self.missing.as_slice() {
            [slot] => write!(f, "{slot}"),
            _ => write!(f, "driver and no load"),
        }
    }
}

impl Chip {
    /// Checks that every net has both ends bound.
    ///
    /// Boundary nets count their implicit external side as bound. Returns one
    /// [`Violation`] per incomplete net, in net creation order.
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let violations: Vec<Violation> = self
            .nets()
            .filter(|net| !net.is_complete())
            .map(|net| Violation {
                net: self.net_name(net.id()).to_string(),
                net_id: net.id(),
                kind: net.kind(),
                missing: net.missing_slots(),
            })
            .collect();

        for violation in &violations {
            tracing::debug!(chip = %self.name(), net = %violation.net, "{violation}");
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
