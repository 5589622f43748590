//! Structured diagnostics for netlist construction and elaboration.
//!
//! A [`Diagnostic`] carries a severity, a stable [`DiagnosticCode`], the name
//! of the signal or instance it concerns, and optional notes and help. The
//! [`DiagnosticSink`] accumulates them for one run, and [`DiagnosticRenderer`]
//! implementations format them for the terminal.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::{Diagnostic, Severity};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use sink::DiagnosticSink;
