//! Best-guess locale for visitors without a manual preference.
//!
//! Tries the primary provider, then the secondary one, then the host's
//! reported language. Every failure along the way is logged and absorbed.

pub(crate) mod mapping;
pub(crate) mod providers;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::config::GeoConfig;
use crate::i18n::{Locale, RuntimeLanguage, SystemLanguage};
use crate::store::LocaleStore;

use providers::{HttpFetcher, IpApiCo, IpApiCom};

#[derive(Debug, Error)]
pub(crate) enum GeoError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("provider reported failure: {0}")]
    ProviderFailure(String),
}

/// Normalized result of one provider query. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct GeoInfo {
    pub source: &'static str,
    pub ip: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    /// Comma-separated language hint, e.g. `pt-BR,en`.
    pub languages: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

pub(crate) trait GeoProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn lookup(&self) -> Result<GeoInfo, GeoError>;
}

/// Which step produced a detection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DetectionSource {
    Provider(GeoInfo),
    /// Both providers failed; carries the host tag that was inspected.
    RuntimeTag(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Detection {
    pub locale: Locale,
    pub source: DetectionSource,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            DetectionSource::Provider(info) => write!(
                f,
                "{} via {} (country={}, languages={})",
                self.locale,
                info.source,
                info.country_code.as_deref().unwrap_or("-"),
                info.languages.as_deref().unwrap_or("-"),
            ),
            DetectionSource::RuntimeTag(tag) => write!(
                f,
                "{} via runtime language (tag={})",
                self.locale,
                tag.as_deref().unwrap_or("-"),
            ),
        }
    }
}

pub(crate) struct GeoResolver {
    primary: Box<dyn GeoProvider>,
    secondary: Box<dyn GeoProvider>,
    runtime_language: Box<dyn RuntimeLanguage>,
}

impl GeoResolver {
    pub(crate) fn new(
        primary: Box<dyn GeoProvider>,
        secondary: Box<dyn GeoProvider>,
        runtime_language: Box<dyn RuntimeLanguage>,
    ) -> Self {
        Self {
            primary,
            secondary,
            runtime_language,
        }
    }

    /// Production wiring: `ipapi.co`, then `ip-api.com`, then the OS locale.
    pub(crate) fn from_config(config: &GeoConfig) -> Self {
        let http = HttpFetcher::new(config);
        Self::new(
            Box::new(IpApiCo::new(http.clone(), config.primary_url.clone())),
            Box::new(IpApiCom::new(http, config.secondary_url.clone())),
            Box::new(SystemLanguage),
        )
    }

    /// First successful provider result, primary before secondary.
    /// The secondary is only queried after the primary definitively failed.
    pub(crate) fn lookup(&self) -> Option<GeoInfo> {
        for provider in [&self.primary, &self.secondary] {
            match provider.lookup() {
                Ok(info) => {
                    tracing::info!(
                        provider = provider.name(),
                        ip = info.ip.as_deref().unwrap_or("-"),
                        country_code = info.country_code.as_deref().unwrap_or("-"),
                        country_name = info.country_name.as_deref().unwrap_or("-"),
                        languages = info.languages.as_deref().unwrap_or("-"),
                        region = info.region.as_deref().unwrap_or("-"),
                        city = info.city.as_deref().unwrap_or("-"),
                        "geo lookup succeeded"
                    );
                    return Some(info);
                }
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "geo lookup failed");
                }
            }
        }
        None
    }

    /// Runs every step and reports where the locale came from.
    pub(crate) fn infer(&self) -> Detection {
        if let Some(info) = self.lookup() {
            let locale = mapping::locale_from_geo(&info);
            tracing::info!(provider = info.source, %locale, "locale inferred from geo lookup");
            return Detection {
                locale,
                source: DetectionSource::Provider(info),
            };
        }
        let tag = self.runtime_language.language_tag();
        let locale = mapping::locale_from_runtime_tag(tag.as_deref());
        tracing::info!(
            tag = tag.as_deref().unwrap_or("-"),
            %locale,
            "geo providers unavailable, locale inferred from runtime language"
        );
        Detection {
            locale,
            source: DetectionSource::RuntimeTag(tag),
        }
    }

    /// Locale to auto-apply, or `None` when the store already holds a manual
    /// choice. Detection still runs in that case so the trail gets logged.
    pub(crate) fn detect_locale(&self, store: &LocaleStore) -> Option<Locale> {
        let detection = self.infer();
        if let Some(manual) = store.manual_preference() {
            tracing::info!(
                stored = %manual,
                detected = %detection.locale,
                "manual language preference present, ignoring detection"
            );
            return None;
        }
        Some(detection.locale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo_resolver.rs"]
mod tests;
