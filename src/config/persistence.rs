use std::fs;
use std::path::{Path, PathBuf};

use super::AppConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub(crate) fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/geolang/config.ron`.
pub(crate) fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("geolang").join("config.ron"))
}

/// Where the language preference lives: the configured override, or
/// `~/.config/geolang/preferences.ron`.
pub(crate) fn preferences_path(config: &AppConfig) -> Option<PathBuf> {
    config
        .storage
        .preferences_path
        .clone()
        .or_else(|| config_base_dir().map(|base| base.join("geolang").join("preferences.ron")))
}

/// Loads the config from the default location, falling back to defaults on any error.
pub(crate) fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => AppConfig::default(),
    }
}

/// Loads the config from `path`, falling back to defaults on any error.
pub(crate) fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match ron::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            AppConfig::default()
        }
    }
}

/// Persists the config to `path`. Returns `false` when nothing was written.
pub(crate) fn save_config_to(config: &AppConfig, path: &Path) -> bool {
    let Some(dir) = path.parent() else {
        return false;
    };
    if fs::create_dir_all(dir).is_err() {
        return false;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let Ok(serialized) = ron::ser::to_string_pretty(config, pretty) else {
        return false;
    };
    fs::write(path, serialized).is_ok()
}
