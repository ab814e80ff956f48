//! Locale parsing and locale-aware value lookup.
//!
//! A locale tag is treated as `language[-subtag]` per the IETF language
//! tag convention; only the first two segments are significant, anything
//! past the second hyphen is ignored. Lookup walks an ordered fallback
//! chain and matches keys case-insensitively, so `"en-US"`, `"EN-us"`,
//! and `"en-us"` all address the same entry.

use crate::strings::equals_ignoring_case;
use std::collections::HashMap;

/// A locale tag split into its significant segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLocale<'a> {
    /// Primary language tag, e.g. `"en"` in `"en-US"`.
    pub language_tag: &'a str,
    /// First subtag, e.g. `"US"` in `"en-US"`; `None` when the locale
    /// has no subtag.
    pub sub_tag: Option<&'a str>,
}

/// Splits a locale into its language tag and first subtag.
///
/// Never fails: a string without a hyphen is all language tag, and
/// segments past the first subtag are dropped (`"zh-Hant-HK"` parses to
/// language `"zh"`, subtag `"Hant"`). A trailing hyphen yields no
/// subtag.
///
/// # Examples
/// ```
/// use u_kit::i18n::parse_locale;
/// assert_eq!(parse_locale("en").language_tag, "en");
/// assert_eq!(parse_locale("en").sub_tag, None);
/// assert_eq!(parse_locale("en-US").sub_tag, Some("US"));
/// assert_eq!(parse_locale("zh-Hant-HK").sub_tag, Some("Hant"));
/// ```
pub fn parse_locale(locale: &str) -> ParsedLocale<'_> {
    match locale.split_once('-') {
        Some((language_tag, rest)) => ParsedLocale {
            language_tag,
            sub_tag: rest.split('-').next().filter(|s| !s.is_empty()),
        },
        None => ParsedLocale {
            language_tag: locale,
            sub_tag: None,
        },
    }
}

/// Resolves a value for `locale` from a keyed map, with fallback.
///
/// Resolution order:
/// 1. Exact, case-sensitive key match; when it hits, no fallback logic
///    runs.
/// 2. The locale itself, matched case-insensitively against every key.
/// 3. Its bare language tag (only when the locale carries a subtag), so
///    `"en-GB"` falls back to `"en"` before anything else.
/// 4. The caller-supplied fallback locales, in the order given.
///
/// Each candidate is tried against all keys before the next candidate is
/// considered. The input map is never modified, and the result is
/// deterministic for a given `(values, locale, fallback_locales)`
/// triple.
///
/// # Returns
/// - `None` if no candidate matches any key.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use u_kit::i18n::get_localized_value;
///
/// let greetings: HashMap<String, &str> = [
///     ("en".to_string(), "Hello"),
///     ("en-US".to_string(), "Howdy"),
///     ("fr".to_string(), "Bonjour"),
/// ]
/// .into();
///
/// // Exact match.
/// assert_eq!(get_localized_value(&greetings, "en-US", &[]), Some(&"Howdy"));
/// // No en-GB entry: falls back to the bare language tag.
/// assert_eq!(get_localized_value(&greetings, "en-GB", &[]), Some(&"Hello"));
/// // Unsupported locale with an explicit fallback.
/// assert_eq!(get_localized_value(&greetings, "de", &["en"]), Some(&"Hello"));
/// ```
pub fn get_localized_value<'a, T>(
    values: &'a HashMap<String, T>,
    locale: &str,
    fallback_locales: &[&str],
) -> Option<&'a T> {
    if let Some(value) = values.get(locale) {
        return Some(value);
    }

    let parsed = parse_locale(locale);
    let mut candidates: Vec<&str> = Vec::with_capacity(2 + fallback_locales.len());
    candidates.push(locale);
    if parsed.sub_tag.is_some() {
        candidates.push(parsed.language_tag);
    }
    candidates.extend_from_slice(fallback_locales);

    for candidate in candidates {
        for (key, value) in values {
            if equals_ignoring_case(key, candidate) {
                return Some(value);
            }
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
