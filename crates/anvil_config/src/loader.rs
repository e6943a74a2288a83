//! Settings file loading and validation.

use crate::error::ConfigError;
use crate::types::CompileSettings;
use std::path::Path;

/// Loads and validates an `anvil.toml` settings file from a module directory.
///
/// Reads `<module_dir>/anvil.toml`, parses it, and validates required
/// fields and value ranges.
pub fn load_settings(module_dir: &Path) -> Result<CompileSettings, ConfigError> {
    let settings_path = module_dir.join("anvil.toml");
    let content = std::fs::read_to_string(&settings_path)?;
    load_settings_from_str(&content)
}

/// Parses and validates settings from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_settings_from_str(content: &str) -> Result<CompileSettings, ConfigError> {
    let settings: CompileSettings =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Validates required fields and numeric ranges.
fn validate_settings(settings: &CompileSettings) -> Result<(), ConfigError> {
    if settings.module.name.is_empty() {
        return Err(ConfigError::MissingField("module.name".to_string()));
    }
    if settings.module.output.is_empty() {
        return Err(ConfigError::MissingField("module.output".to_string()));
    }
    if settings.incremental.transitive_step < 1 {
        return Err(ConfigError::ValidationError(
            "incremental.transitive-step must be at least 1".to_string(),
        ));
    }
    let fraction = settings.incremental.recompile_all_fraction;
    if !(0.0..=1.0).contains(&fraction) {
        return Err(ConfigError::ValidationError(format!(
            "incremental.recompile-all-fraction must be in [0, 1], got {fraction}"
        )));
    }
    Ok(())
}
