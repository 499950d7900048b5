//! Value types for locale negotiation
//!
//! The locale set is a closed enumeration fixed at build time. Every locale
//! value flowing through the negotiation pipeline belongs to this set;
//! anything else is rejected at the parsing boundary, never coerced.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

/// Supported site locales.
///
/// `Ar`, `En` and `Tr` are full locales with translation bundles. `De` and
/// `Fr` are SEO-only codes: they participate in routing, redirects and
/// sitemap alternates but carry no message bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    En,
    Tr,
    De,
    Fr,
}

/// All members of the enumeration, in sitemap emission order.
pub const SUPPORTED_LOCALES: &[Locale] =
    &[Locale::Ar, Locale::En, Locale::Tr, Locale::De, Locale::Fr];

/// Build-time default, used when no signal resolves.
pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
            Self::Tr => "tr",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }

    /// Text direction for the rendering layer.
    pub fn dir(&self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            _ => "ltr",
        }
    }

    /// SEO-only locales have no translation bundle.
    pub fn is_seo_only(&self) -> bool {
        matches!(self, Self::De | Self::Fr)
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            "tr" => Ok(Self::Tr),
            "de" => Ok(Self::De),
            "fr" => Ok(Self::Fr),
            _ => Err(UnsupportedLocale),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker error for strings outside the enumeration. Callers treat it as
/// "signal absent", so it carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedLocale;

/// Where a resolved locale came from. Diagnostics only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocaleSource {
    Cookie,
    Header,
    Path,
    Default,
}

/// Read-only snapshot of the request signals, built once per request and
/// discarded with the response.
#[derive(Debug, Clone)]
pub struct RequestSignals {
    /// Parsed from the preference cookie; `None` if missing or invalid.
    pub cookie_locale: Option<Locale>,
    /// Best supported candidate from `Accept-Language`; `None` if no match.
    pub header_locale: Option<Locale>,
    /// First path segment, if it is a member of the enumeration.
    pub path_locale: Option<Locale>,
    /// Untouched request path (plus query), used to build redirect targets.
    pub raw_path: String,
}

/// The single output of resolution, immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResolvedLocale {
    pub locale: Locale,
    pub source: LocaleSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_round_trip() {
        for locale in SUPPORTED_LOCALES {
            assert_eq!(locale.as_str().parse::<Locale>(), Ok(*locale));
        }
    }

    #[test]
    fn test_unsupported_rejected() {
        assert!("xx".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
        assert!("EN".parse::<Locale>().is_err()); // parsing is exact; callers lowercase first
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::Tr.dir(), "ltr");
    }

    #[test]
    fn test_seo_only() {
        assert!(Locale::De.is_seo_only());
        assert!(Locale::Fr.is_seo_only());
        assert!(!Locale::Ar.is_seo_only());
    }
}
