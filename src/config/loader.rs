//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    TooltipSettings,
};

/// Name of the optional settings file.
const SETTINGS_FILE_NAME: &str = ".item-info.json";

/// Loads tooltip settings from a directory.
///
/// Looks for a `.item-info.json` file; fields absent from the file keep
/// their defaults.
///
/// # Arguments
/// * `dir` - Directory to look in
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: no settings file present
/// - `Err(ConfigError)`: read or parse failure
///
/// # Errors
/// - File read errors
/// - JSON parse errors
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<TooltipSettings>, ConfigError> {
    let settings_path = dir.join(SETTINGS_FILE_NAME);

    if !settings_path.exists() {
        tracing::debug!("Settings file not found: {:?}", settings_path);
        return Ok(None);
    }

    tracing::debug!("Loading settings from: {:?}", settings_path);

    let content = std::fs::read_to_string(&settings_path)?;
    let settings: TooltipSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
