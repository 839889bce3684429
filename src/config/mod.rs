//! Tooltip settings: types, validation and file loading.

mod loader;
mod types;

use std::path::Path;

pub use types::{
    ConfigError,
    MAX_FONT_SIZE,
    MIN_FONT_SIZE,
    TooltipSettings,
    ValidationError,
};

/// Loads settings from a directory, if a settings file is present.
///
/// See [`TooltipSettings`] for the file format; missing fields default.
///
/// # Errors
/// Read or parse failures of an existing settings file.
pub fn load_settings(dir: &Path) -> Result<Option<TooltipSettings>, ConfigError> {
    loader::load_from_dir(dir)
}
