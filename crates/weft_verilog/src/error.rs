//! Error types for elaboration and output.

use std::path::PathBuf;

use weft_netlist::Violation;

/// Errors that can occur while elaborating or writing a chip.
#[derive(Debug, thiserror::Error)]
pub enum ElaborateError {
    /// Validation found nets with an unbound driver or load. Nothing was written.
    #[error("chip `{chip}` has {} incomplete net(s)", violations.len())]
    IncompleteNetGraph {
        /// The chip that failed validation.
        chip: String,
        /// Every incomplete net, in creation order.
        violations: Vec<Violation>,
    },

    /// Rendering the module text failed.
    #[error("failed to render module text")]
    Format(#[from] std::fmt::Error),

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
