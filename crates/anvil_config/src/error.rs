//! Error types for settings loading and validation.

/// Errors that can occur when loading or validating an `anvil.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the settings file.
    #[error("failed to read settings: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse settings: {0}")]
    ParseError(String),

    /// A required field is missing from the settings.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A settings value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_field() {
        let err = ConfigError::MissingField("module.output".to_string());
        assert_eq!(format!("{err}"), "missing required field: module.output");
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 4".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse settings: expected '=' at line 4"
        );
    }

    #[test]
    fn display_validation_error() {
        let err = ConfigError::ValidationError("recompile-all-fraction out of range".to_string());
        assert!(format!("{err}").starts_with("validation error:"));
    }
}
