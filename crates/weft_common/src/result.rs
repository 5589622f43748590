//! Internal-error result type.

/// Result of an operation that can only fail through a bug in Weft.
///
/// User mistakes (bad wiring, bad config) have their own error enums in the
/// crates that detect them; `Err(InternalError)` means an invariant of the
/// toolchain itself was broken.
pub type WeftResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug in Weft, not a problem with the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the broken invariant.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
