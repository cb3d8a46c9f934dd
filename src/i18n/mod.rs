mod detect;
mod en;
mod es;
mod ja;
mod ko;
mod pt;
mod translations;
mod vi;
mod zh;

use std::fmt;
use std::sync::{OnceLock, RwLock};

use serde::{Deserialize, Serialize};

pub(crate) use detect::{RuntimeLanguage, SystemLanguage};
pub use translations::Translations;

/// Supported UI locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
    Ko,
    Vi,
    Ja,
    Pt,
    Es,
}

impl Locale {
    /// All variants in display order.
    pub const ALL: &'static [Locale] = &[
        Locale::En,
        Locale::Zh,
        Locale::Ko,
        Locale::Vi,
        Locale::Ja,
        Locale::Pt,
        Locale::Es,
    ];

    /// Human-readable display names, aligned with `ALL`.
    pub const DISPLAY_NAMES: &'static [&'static str] = &[
        "English",
        "中文",
        "한국어",
        "Tiếng Việt",
        "日本語",
        "Português",
        "Español",
    ];

    /// Locale the translation runtime starts in and the one used when a
    /// mapped code falls outside the supported set.
    pub const FALLBACK: Locale = Locale::Zh;

    /// Short code as persisted in the preference store.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ko => "ko",
            Locale::Vi => "vi",
            Locale::Ja => "ja",
            Locale::Pt => "pt",
            Locale::Es => "es",
        }
    }

    /// Parses a short locale code. Only exact members of the supported set
    /// are accepted (surrounding whitespace and ASCII case are ignored).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    /// Returns the index of this locale in `ALL` / `DISPLAY_NAMES`.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&v| v == self).unwrap_or(0)
    }

    pub fn display_name(self) -> &'static str {
        Self::DISPLAY_NAMES[self.index()]
    }

    /// Returns the static translation table for this locale.
    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::En => en::translations(),
            Locale::Zh => zh::translations(),
            Locale::Ko => ko::translations(),
            Locale::Vi => vi::translations(),
            Locale::Ja => ja::translations(),
            Locale::Pt => pt::translations(),
            Locale::Es => es::translations(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

static CURRENT: OnceLock<RwLock<Locale>> = OnceLock::new();

fn current_lock() -> &'static RwLock<Locale> {
    CURRENT.get_or_init(|| RwLock::new(Locale::default()))
}

/// Returns the active locale.
pub fn current() -> Locale {
    *current_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Returns the active translation table.
pub fn t() -> &'static Translations {
    current().translations()
}

/// Switches the active locale. Subsequent calls to `t()` return the new locale's strings.
pub fn set_locale(locale: Locale) {
    debug_assert!(locale.translations().all_non_empty());
    let mut guard = current_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = locale;
}
