//! Tooltip settings types and validation.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::Color;

/// A single settings validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "fontSize")
    pub field_path: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for one field.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Settings loading / validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more fields failed validation.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file could not be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid JSON.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbers the validation failures for the aggregate error message.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Smallest accepted font size.
pub const MIN_FONT_SIZE: f32 = 10.0;
/// Largest accepted font size.
pub const MAX_FONT_SIZE: f32 = 40.0;

/// Feature toggles and display hints for tooltip composition.
///
/// Owned by an external settings system; the engine reads a value-typed
/// snapshot per compose call so a mid-composition settings change can never
/// tear the output.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipSettings {
    /// Show the quality line.
    pub show_quality: bool,
    /// Show the tags line.
    pub show_tags: bool,
    /// Show the stackable line.
    pub show_stackable: bool,
    /// Show the durability line.
    pub show_durability: bool,
    /// Show the value lines.
    pub show_value: bool,

    /// Show the developer block (off by default).
    pub show_developer_id: bool,

    /// Font size for the rendered text, recognized range 10–40.
    pub font_size: f32,
    /// Text color as a hex string (e.g. `"#FFFFFF"`).
    pub text_color: String,

    /// Opaque token used by the host to force downstream cache
    /// invalidation. Has no effect on composition.
    pub config_token: String,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            show_quality: true,
            show_tags: true,
            show_stackable: true,
            show_durability: true,
            show_value: true,
            show_developer_id: false,
            font_size: 20.0,
            text_color: "#FFFFFF".to_string(),
            config_token: "item_info_v1".to_string(),
        }
    }
}

impl TooltipSettings {
    /// # Errors
    /// - Font size outside the recognized range
    /// - Text color that is not a hex color string
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            errors.push(ValidationError::new(
                "fontSize",
                format!(
                    "Font size {} is outside the recognized range {MIN_FONT_SIZE}-{MAX_FONT_SIZE}",
                    self.font_size
                ),
            ));
        }

        if Color::parse_hex(&self.text_color).is_none() {
            errors.push(ValidationError::new(
                "textColor",
                format!(
                    "'{}' is not a hex color. Expected a form like \"#FFFFFF\"",
                    self.text_color
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
