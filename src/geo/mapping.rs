//! Static tables from geo signals to locale codes.

use super::GeoInfo;
use crate::i18n::Locale;

/// Order in which language hints are scanned. English is deliberately last:
/// a hint mentioning any other supported language wins over `en`.
pub(crate) const HINT_SCAN_ORDER: [&str; 7] = ["zh", "ko", "vi", "ja", "pt", "es", "en"];

const CHINESE_COUNTRIES: &[&str] = &["CN", "HK", "MO", "TW"];
const PORTUGUESE_COUNTRIES: &[&str] = &["BR", "PT", "AO", "MZ", "GW", "CV", "ST", "TL"];
const SPANISH_COUNTRIES: &[&str] = &[
    "ES", "MX", "AR", "CO", "CL", "PE", "VE", "EC", "GT", "CU", "DO", "BO", "PY", "UY", "SV",
    "HN", "NI", "CR", "PA",
];

/// First code from `HINT_SCAN_ORDER` found anywhere in `hint`, ignoring case.
pub(crate) fn code_from_hint(hint: &str) -> Option<&'static str> {
    let hint = hint.to_ascii_lowercase();
    HINT_SCAN_ORDER
        .iter()
        .copied()
        .find(|code| hint.contains(code))
}

/// Locale code for an ISO 3166 alpha-2 country code. Unknown or missing → `en`.
pub(crate) fn code_from_country(country_code: Option<&str>) -> &'static str {
    let Some(country) = country_code.map(|c| c.trim().to_ascii_uppercase()) else {
        return "en";
    };
    let country = country.as_str();
    if CHINESE_COUNTRIES.contains(&country) {
        "zh"
    } else if country == "KR" {
        "ko"
    } else if country == "VN" {
        "vi"
    } else if country == "JP" {
        "ja"
    } else if PORTUGUESE_COUNTRIES.contains(&country) {
        "pt"
    } else if SPANISH_COUNTRIES.contains(&country) {
        "es"
    } else {
        "en"
    }
}

/// Locale for a provider result: language hint first, then country.
/// A code outside the supported set resolves to `Locale::FALLBACK`.
pub(crate) fn locale_from_geo(info: &GeoInfo) -> Locale {
    let code = info
        .languages
        .as_deref()
        .filter(|hint| !hint.trim().is_empty())
        .and_then(code_from_hint)
        .unwrap_or_else(|| code_from_country(info.country_code.as_deref()));
    Locale::from_code(code).unwrap_or(Locale::FALLBACK)
}

/// Locale for a host language tag such as `es-MX`, matched by prefix in
/// `HINT_SCAN_ORDER`. Anything else → English.
pub(crate) fn locale_from_runtime_tag(tag: Option<&str>) -> Locale {
    let Some(tag) = tag.map(|t| t.trim().to_ascii_lowercase()) else {
        return Locale::En;
    };
    HINT_SCAN_ORDER
        .iter()
        .find(|code| tag.starts_with(*code))
        .and_then(|code| Locale::from_code(code))
        .unwrap_or(Locale::En)
}

#[cfg(test)]
#[path = "../../tests/unit/geo_mapping.rs"]
mod tests;
