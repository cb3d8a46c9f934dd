//! Startup language resolution and the manual-selection path.
//!
//! `resolve_startup_language` never fails: it always lands on one of the
//! `Outcome` variants so a language problem cannot block startup.

use std::fmt;
use std::sync::mpsc;

use thiserror::Error;

use crate::geo::GeoResolver;
use crate::i18n::{self, Locale};
use crate::store::LocaleStore;

#[derive(Debug, Error)]
#[error("translation runtime rejected {locale}: {reason}")]
pub(crate) struct RuntimeError {
    pub locale: Locale,
    pub reason: String,
}

/// The i18n layer the coordinator drives.
pub(crate) trait TranslationRuntime: Send + Sync {
    fn change_language(&self, locale: Locale) -> Result<(), RuntimeError>;
    fn current_language(&self) -> Locale;
}

/// Drives the process-wide translation tables in `crate::i18n`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GlobalRuntime;

impl TranslationRuntime for GlobalRuntime {
    fn change_language(&self, locale: Locale) -> Result<(), RuntimeError> {
        i18n::set_locale(locale);
        Ok(())
    }

    fn current_language(&self) -> Locale {
        i18n::current()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The stored manual choice was applied; no detection ran.
    Manual(Locale),
    /// Detection picked a locale, which was persisted and applied.
    Auto(Locale),
    /// Nothing applied; the runtime keeps its current language.
    Fallback,
    /// Applying a language failed.
    Error,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Manual(locale) => write!(f, "manual ({locale})"),
            Outcome::Auto(locale) => write!(f, "auto ({locale})"),
            Outcome::Fallback => f.write_str("fallback"),
            Outcome::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum SelectError {
    #[error("unsupported language code {0:?}")]
    Unsupported(String),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

pub(crate) struct LanguageCoordinator<R> {
    store: LocaleStore,
    resolver: GeoResolver,
    runtime: R,
}

impl<R: TranslationRuntime> LanguageCoordinator<R> {
    pub(crate) fn new(store: LocaleStore, resolver: GeoResolver, runtime: R) -> Self {
        Self {
            store,
            resolver,
            runtime,
        }
    }

    pub(crate) fn store(&self) -> &LocaleStore {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn runtime(&self) -> &R {
        &self.runtime
    }

    pub(crate) fn resolve_startup_language(&self) -> Outcome {
        if self.store.is_manual_selection() {
            match self.store.stored_language().as_deref().map(Locale::from_code) {
                Some(Some(locale)) => {
                    tracing::info!(%locale, "applying manual language preference");
                    return self.apply(locale, Outcome::Manual(locale));
                }
                Some(None) => {
                    tracing::warn!("manual language flag set but stored code is unsupported");
                }
                None => {
                    tracing::warn!("manual language flag set without a stored code");
                }
            }
        }

        match self.resolver.detect_locale(&self.store) {
            Some(locale) => {
                self.store.set_preference(locale.code(), false);
                tracing::info!(%locale, "applying detected language");
                self.apply(locale, Outcome::Auto(locale))
            }
            None => {
                tracing::info!(
                    current = %self.runtime.current_language(),
                    "no language to apply, keeping runtime default"
                );
                Outcome::Fallback
            }
        }
    }

    /// The one path for explicit user choices: validates, persists as
    /// manual, then applies. Unsupported codes change nothing.
    pub(crate) fn select_language(&self, code: &str) -> Result<Locale, SelectError> {
        let Some(locale) = Locale::from_code(code) else {
            tracing::warn!(code, "rejected unsupported language selection");
            return Err(SelectError::Unsupported(code.to_string()));
        };
        self.store.set_preference(locale.code(), true);
        self.runtime.change_language(locale)?;
        tracing::info!(%locale, "language selected manually");
        Ok(locale)
    }

    /// Re-enables geo detection on the next start; the stored code stays.
    pub(crate) fn clear_manual_flag(&self) {
        self.store.clear_manual_flag();
    }

    fn apply(&self, locale: Locale, outcome: Outcome) -> Outcome {
        match self.runtime.change_language(locale) {
            Ok(()) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "failed to apply language");
                Outcome::Error
            }
        }
    }
}

/// Runs startup resolution on a detached background thread.
///
/// Sends exactly one `Outcome` to `tx` unless the thread dies first, in
/// which case the receiver sees a disconnect.
pub(crate) fn spawn_startup_resolution<R>(
    coordinator: LanguageCoordinator<R>,
    tx: mpsc::Sender<Outcome>,
) -> bool
where
    R: TranslationRuntime + 'static,
{
    std::thread::Builder::new()
        .name("language-resolution".to_string())
        .spawn(move || {
            let _ = tx.send(coordinator.resolve_startup_language());
        })
        .is_ok()
}

#[cfg(test)]
#[path = "../tests/unit/coordinator.rs"]
mod tests;
