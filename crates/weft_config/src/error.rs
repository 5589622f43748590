//! Error types for manifest loading and validation.

/// Errors that can occur when loading or validating a `weft.toml` manifest.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the manifest.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A manifest value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}
