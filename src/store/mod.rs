//! Persisted language preference.
//!
//! Two string keys: the locale code and a manual-selection marker. Every
//! operation tolerates a failing backend; a lost preference only means
//! detection runs again on the next start.

mod backend;

pub(crate) use backend::{FileStore, KeyValueStore, MemoryStore};
#[cfg(test)]
pub(crate) use backend::StoreError;

/// Key holding the locale code.
pub(crate) const LANGUAGE_KEY: &str = "i18nextLng";
/// Key holding `"true"` when the user picked the language explicitly.
pub(crate) const MANUAL_KEY: &str = "i18nextLng_manual";

const MANUAL_MARKER: &str = "true";

pub(crate) struct LocaleStore {
    backend: Box<dyn KeyValueStore>,
}

impl LocaleStore {
    pub(crate) fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub(crate) fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }

    /// Stored locale code, or `None` when absent or unreadable.
    /// The value is returned as written; callers validate it.
    pub(crate) fn stored_language(&self) -> Option<String> {
        match self.backend.get(LANGUAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored language");
                None
            }
        }
    }

    pub(crate) fn is_manual_selection(&self) -> bool {
        match self.backend.get(MANUAL_KEY) {
            Ok(value) => value.as_deref() == Some(MANUAL_MARKER),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read manual language flag");
                false
            }
        }
    }

    /// Writes `code`; with `manual` also sets the manual marker. A
    /// non-manual write leaves an existing marker untouched.
    pub(crate) fn set_preference(&self, code: &str, manual: bool) {
        if let Err(e) = self.backend.set(LANGUAGE_KEY, code) {
            tracing::warn!(code, error = %e, "failed to persist language preference");
            return;
        }
        if manual && let Err(e) = self.backend.set(MANUAL_KEY, MANUAL_MARKER) {
            tracing::warn!(code, error = %e, "failed to persist manual language flag");
        }
    }

    /// Drops the manual marker; the stored code stays.
    pub(crate) fn clear_manual_flag(&self) {
        if let Err(e) = self.backend.remove(MANUAL_KEY) {
            tracing::warn!(error = %e, "failed to clear manual language flag");
        }
    }

    /// Stored code when a manual selection with a non-empty code exists.
    pub(crate) fn manual_preference(&self) -> Option<String> {
        if !self.is_manual_selection() {
            return None;
        }
        self.stored_language().filter(|code| !code.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store.rs"]
mod tests;
