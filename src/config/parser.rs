use crate::config::types::Preferences;
use crate::ConfigError;
use std::path::Path;

/// Loads crawl preferences from a TOML file.
///
/// Keys absent from the file fall back to the built-in defaults, so a
/// file overriding only `unwanted-links` keeps the default extension
/// list.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use asset_atlas::config::load_preferences;
///
/// let preferences = load_preferences(Path::new("preferences.toml")).unwrap();
/// println!("Ignoring rels: {:?}", preferences.unwanted_links);
/// ```
pub fn load_preferences(path: &Path) -> Result<Preferences, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let preferences: Preferences = toml::from_str(&content)?;
    Ok(preferences)
}
