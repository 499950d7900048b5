//! Locale resolution
//!
//! Reconciles the four competing signals (preference cookie, Accept-Language
//! header, URL path segment, build-time default) into a single locale per
//! request. An explicit user choice (cookie) always wins over inference.
//! All functions here are total: malformed input degrades to "signal
//! absent", never to an error.

use super::types::{DEFAULT_LOCALE, Locale, LocaleSource, RequestSignals, ResolvedLocale};

/// Resolve a single locale from the request signals.
///
/// Precedence, highest first: cookie, header, path, default.
pub fn resolve(signals: &RequestSignals) -> ResolvedLocale {
    if let Some(locale) = signals.cookie_locale {
        return ResolvedLocale { locale, source: LocaleSource::Cookie };
    }
    if let Some(locale) = signals.header_locale {
        return ResolvedLocale { locale, source: LocaleSource::Header };
    }
    if let Some(locale) = signals.path_locale {
        return ResolvedLocale { locale, source: LocaleSource::Path };
    }
    ResolvedLocale { locale: DEFAULT_LOCALE, source: LocaleSource::Default }
}

/// Pick the best supported locale from an `Accept-Language` header value.
///
/// Entries are split on commas; each contributes its primary language
/// subtag and an optional `;q=` quality (1.0 when absent). Candidates are
/// ranked by descending quality, stable on header order for ties, and the
/// first one inside the enumeration wins. Malformed entries are skipped
/// individually; a partially malformed header still yields a result.
pub fn parse_accept_language(header: Option<&str>) -> Option<Locale> {
    let header = header?;

    let mut candidates: Vec<(String, f32)> = Vec::new();
    for entry in header.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let mut parts = entry.split(';').map(str::trim);
        let tag = match parts.next() {
            Some(tag) if !tag.is_empty() => tag,
            _ => continue,
        };

        // Primary language subtag only: "en-US" -> "en"
        let primary = tag.split('-').next().unwrap_or(tag).to_lowercase();

        let quality = parts
            .find_map(|p| p.strip_prefix("q="))
            .and_then(|q| q.parse::<f32>().ok())
            .filter(|q| q.is_finite())
            .unwrap_or(1.0);

        candidates.push((primary, quality));
    }

    // Stable sort keeps header order for equal qualities.
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates.iter().find_map(|(primary, _)| primary.parse::<Locale>().ok())
}

/// Extract a locale from the first path segment, if it is a member of the
/// enumeration. Handles both `/` and `/ar/about` by dropping empty segments.
pub fn parse_path_locale(path: &str) -> Option<Locale> {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse().ok())
}

/// Parse a preference cookie value. A syntactically present value outside
/// the enumeration is treated identically to an absent cookie.
pub fn parse_cookie_locale(value: Option<&str>) -> Option<Locale> {
    value.and_then(|v| v.trim().parse().ok())
}
