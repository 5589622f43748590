//! Parsing and validation of `weft.toml` project manifests.
//!
//! A manifest names the chip, lists the component sources to describe, and
//! declares the chip's nets and instances. This crate also ships
//! [`TomlComponentCompiler`], which describes components written as small TOML
//! documents.

#![warn(missing_docs)]

pub mod compiler;
pub mod error;
pub mod loader;
pub mod types;

pub use compiler::TomlComponentCompiler;
pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, validate_config, CONFIG_FILE};
pub use types::*;
