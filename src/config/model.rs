use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub geo: GeoConfig,
    pub startup: StartupConfig,
    pub storage: StorageConfig,
}

/// Geolocation providers and the limits applied to each request.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct GeoConfig {
    pub primary_url: String,
    pub secondary_url: String,
    /// Per-request timeout, connect through body. `0` means the default.
    pub timeout_ms: u64,
    /// Extra attempts per provider after the first one fails.
    pub retries: u32,
    pub user_agent: String,
}

const DEFAULT_TIMEOUT_MS: u64 = 5000;

impl GeoConfig {
    pub fn timeout(&self) -> Duration {
        match self.timeout_ms {
            0 => Duration::from_millis(DEFAULT_TIMEOUT_MS),
            ms => Duration::from_millis(ms),
        }
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            primary_url: "https://ipapi.co/json/".to_string(),
            secondary_url: "http://ip-api.com/json/".to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: 0,
            user_agent: format!("geolang/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StartupConfig {
    /// Upper bound on how long startup waits for language resolution.
    pub deadline_ms: u64,
    /// Language the translation runtime is in before resolution runs.
    pub default_locale: Locale,
}

impl StartupConfig {
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            deadline_ms: 8000,
            default_locale: Locale::FALLBACK,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StorageConfig {
    /// Overrides `<config dir>/geolang/preferences.ron`.
    pub preferences_path: Option<PathBuf>,
}
