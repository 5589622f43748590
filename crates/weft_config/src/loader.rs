//! Manifest loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// File name of the project manifest.
pub const CONFIG_FILE: &str = "weft.toml";

/// Loads and validates the `weft.toml` of a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE))
}

/// Loads and validates a manifest from an explicit path.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a manifest from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are consistent.
///
/// Net and component names are checked later, when the chip is built.
pub fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.output.dir.is_empty() {
        return Err(ConfigError::MissingField("output.dir".to_string()));
    }
    let extension = &config.output.extension;
    if extension.is_empty() {
        return Err(ConfigError::MissingField("output.extension".to_string()));
    }
    if extension.contains('.') || extension.contains('/') || extension.contains('\\') {
        return Err(ConfigError::ValidationError(format!(
            "output.extension `{extension}` must be a bare extension such as `v`"
        )));
    }

    for (index, instance) in config.chip.instances.iter().enumerate() {
        if instance.component.is_empty() {
            return Err(ConfigError::MissingField(format!(
                "chip.instances[{index}].component"
            )));
        }
        let positional = instance.inputs.is_some() || instance.outputs.is_some();
        match (positional, instance.connect.is_some()) {
            (true, true) => {
                return Err(ConfigError::ValidationError(format!(
                    "chip.instances[{index}] (`{}`) gives both positional nets and `connect`",
                    instance.component
                )))
            }
            (false, false) => {
                return Err(ConfigError::ValidationError(format!(
                    "chip.instances[{index}] (`{}`) needs `inputs`/`outputs` or `connect`",
                    instance.component
                )))
            }
            _ => {}
        }
    }
    Ok(())
}
