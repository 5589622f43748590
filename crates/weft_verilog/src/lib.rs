//! Structural Verilog emission for Weft chips.
//!
//! [`elaborate`] validates a [`Chip`](weft_netlist::Chip) and renders it as a
//! single Verilog-2001 module; [`write_module`] persists that text to
//! `<dir>/<chip>.<extension>` only once the whole module has been rendered.

#![warn(missing_docs)]

pub mod emit;
pub mod error;
pub mod writer;

pub use emit::{elaborate, emit_module, DATA_WIDTH};
pub use error::ElaborateError;
pub use writer::{write_module, OutputOptions};
