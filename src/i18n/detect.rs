/// Source of the language tag the host reports for the current user.
pub(crate) trait RuntimeLanguage: Send + Sync {
    /// Returns the raw tag (for example `es-MX` or `en_US.UTF-8`), if any.
    fn language_tag(&self) -> Option<String>;
}

/// Host language as reported by the OS.
///
/// Asks `sys-locale` first, then falls back to the environment variables
/// `LANGUAGE`, `LC_ALL`, `LC_MESSAGES`, `LANG` in that precedence order.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SystemLanguage;

impl RuntimeLanguage for SystemLanguage {
    fn language_tag(&self) -> Option<String> {
        sys_locale::get_locale()
            .filter(|tag| !tag.is_empty())
            .or_else(env_language_tag)
    }
}

fn env_language_tag() -> Option<String> {
    let vars = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];
    for var in vars {
        match std::env::var(var) {
            Ok(v) if !v.is_empty() => return Some(v),
            _ => continue,
        }
    }
    None
}
