//! Diagnostic codes for netlist construction and validation.
//!
//! Error codes `E300`--`E307` cover incomplete nets (`E300`, `E301`) and
//! rejected construction calls (`E302`--`E307`).

use weft_diagnostics::{Category, Diagnostic, DiagnosticCode};

use crate::error::NetlistError;
use crate::net::Slot;
use crate::validate::Violation;

/// Net has no driver.
pub const E300: DiagnosticCode = DiagnosticCode::new(Category::Error, 300);

/// Net has no load.
pub const E301: DiagnosticCode = DiagnosticCode::new(Category::Error, 301);

/// Instance net counts differ from the component's port counts.
pub const E302: DiagnosticCode = DiagnosticCode::new(Category::Error, 302);

/// Net slot already bound or implicitly external.
pub const E303: DiagnosticCode = DiagnosticCode::new(Category::Error, 303);

/// Signal name collides with an existing signal or instance.
pub const E304: DiagnosticCode = DiagnosticCode::new(Category::Error, 304);

/// Signal name is not a plain Verilog identifier.
pub const E305: DiagnosticCode = DiagnosticCode::new(Category::Error, 305);

/// Named binding refers to an undeclared port.
pub const E306: DiagnosticCode = DiagnosticCode::new(Category::Error, 306);

/// Named binding connects a port twice or leaves one unconnected.
pub const E307: DiagnosticCode = DiagnosticCode::new(Category::Error, 307);

impl Violation {
    /// One diagnostic per missing slot.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        self.missing
            .iter()
            .map(|slot| {
                let code = match slot {
                    Slot::Driver => E300,
                    Slot::Load => E301,
                };
                let help = match slot {
                    Slot::Driver => "connect it to an output port of some instance",
                    Slot::Load => "connect it to an input port of some instance",
                };
                Diagnostic::error(code, format!("{} `{}` has no {slot}", self.kind, self.net))
                    .with_subject(&self.net)
                    .with_help(help)
            })
            .collect()
    }
}

impl NetlistError {
    /// The stable diagnostic code of this error.
    ///
    /// Returns `None` for [`NetlistError::Internal`], which is a bug rather
    /// than a user error.
    pub fn code(&self) -> Option<DiagnosticCode> {
        match self {
            NetlistError::ArityMismatch { .. } => Some(E302),
            NetlistError::AlreadyBound { .. } => Some(E303),
            NetlistError::DuplicateName { .. } => Some(E304),
            NetlistError::InvalidName { .. } => Some(E305),
            NetlistError::UnknownPort { .. } => Some(E306),
            NetlistError::DuplicatePort { .. } | NetlistError::UnconnectedPort { .. } => {
                Some(E307)
            }
            NetlistError::Internal(_) => None,
        }
    }

    /// Converts this error into a diagnostic.
    ///
    /// Internal errors are reported under `E000`.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = self
            .code()
            .unwrap_or(DiagnosticCode::new(Category::Error, 0));
        let diagnostic = Diagnostic::error(code, self.to_string());
        match self {
            NetlistError::AlreadyBound { net, .. } => diagnostic
                .with_subject(net)
                .with_note("every net has exactly one driver and one load"),
            NetlistError::DuplicateName { requested, .. } => diagnostic
                .with_subject(requested)
                .with_note("each net also claims `<name>_stb` and `<name>_ack`"),
            NetlistError::InvalidName { name, .. } => diagnostic.with_subject(name),
            NetlistError::Internal(_) => {
                diagnostic.with_note("this is a bug in weft, please report it")
            }
            _ => diagnostic,
        }
    }
}
