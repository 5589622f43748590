//! Shared foundational types used across the Weft netlist toolchain.
//!
//! This crate provides interned signal names, content hashing for component
//! sources, and the internal-error result type.

#![warn(missing_docs)]

pub mod hash;
pub mod ident;
pub mod result;

pub use hash::ContentHash;
pub use ident::{Ident, NameTable};
pub use result::{InternalError, WeftResult};
