//! Errors raised while constructing a netlist.
//!
//! Every error is fatal to the operation that raised it and leaves the chip
//! exactly as it was before the call.

use weft_common::InternalError;

use crate::component::PortDirection;
use crate::net::{NetKind, Slot};

/// Errors from creating nets and instances.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetlistError {
    /// Instance construction supplied the wrong number of input or output nets.
    #[error(
        "`{component}` expects {expected_inputs} input(s) and {expected_outputs} output(s), \
         but {got_inputs} input(s) and {got_outputs} output(s) were supplied"
    )]
    ArityMismatch {
        /// The component being instantiated.
        component: String,
        /// Declared input port count.
        expected_inputs: usize,
        /// Declared output port count.
        expected_outputs: usize,
        /// Supplied input net count.
        got_inputs: usize,
        /// Supplied output net count.
        got_outputs: usize,
    },

    /// A net's slot was bound a second time, or is implicitly external.
    #[error("{slot} of {kind} `{net}` is already bound to {holder}")]
    AlreadyBound {
        /// The net's name.
        net: String,
        /// The net's variant.
        kind: NetKind,
        /// The slot the bind targeted.
        slot: Slot,
        /// Who holds the slot, e.g. ``instance `inst_0_Adder` ``.
        holder: String,
    },

    /// A requested name collides with a signal or instance already in the chip.
    #[error("`{requested}` clashes with existing signal `{existing}`")]
    DuplicateName {
        /// The name that was asked for.
        requested: String,
        /// The signal or instance name it collides with.
        existing: String,
    },

    /// A requested name cannot be emitted as a Verilog identifier.
    #[error("`{name}` is not a valid signal name: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A name-checked binding referred to a port the component does not declare.
    #[error("component `{component}` has no port named `{port}`")]
    UnknownPort {
        /// The component being instantiated.
        component: String,
        /// The unknown port.
        port: String,
    },

    /// A name-checked binding connected the same port twice.
    #[error("{direction} port `{port}` of `{component}` is connected more than once")]
    DuplicatePort {
        /// The component being instantiated.
        component: String,
        /// The repeated port.
        port: String,
        /// Direction of the port.
        direction: PortDirection,
    },

    /// A name-checked binding left a declared port without a net.
    #[error("{direction} port `{port}` of `{component}` is not connected")]
    UnconnectedPort {
        /// The component being instantiated.
        component: String,
        /// The unconnected port.
        port: String,
        /// Direction of the port.
        direction: PortDirection,
    },

    /// An ID that does not belong to this chip was passed in.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_arity_mismatch() {
        let err = NetlistError::ArityMismatch {
            component: "Adder".to_string(),
            expected_inputs: 2,
            expected_outputs: 1,
            got_inputs: 1,
            got_outputs: 1,
        };
        assert_eq!(
            err.to_string(),
            "`Adder` expects 2 input(s) and 1 output(s), but 1 input(s) and 1 output(s) were supplied"
        );
    }

    #[test]
    fn display_already_bound() {
        let err = NetlistError::AlreadyBound {
            net: "a".to_string(),
            kind: NetKind::BoundaryInput,
            slot: Slot::Load,
            holder: "instance `inst_0_Adder`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "load of boundary input `a` is already bound to instance `inst_0_Adder`"
        );
    }

    #[test]
    fn display_duplicate_name() {
        let err = NetlistError::DuplicateName {
            requested: "a".to_string(),
            existing: "a_stb".to_string(),
        };
        assert_eq!(err.to_string(), "`a` clashes with existing signal `a_stb`");
    }

    #[test]
    fn internal_is_transparent() {
        let err: NetlistError = InternalError::new("net#9 is not part of chip `top`").into();
        assert_eq!(
            err.to_string(),
            "internal error: net#9 is not part of chip `top`"
        );
    }
}
