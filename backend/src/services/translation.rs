//! Translation bundle access
//!
//! Serves the structured message bundles the client-side renderer consumes.
//! Bundles are the same JSON files rust-i18n compiles in for `t!`, embedded
//! here so the endpoint can return them whole. Lookup fails loudly for any
//! locale outside the enumeration or without a bundle; there is no silent
//! fallback.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::locale::Locale;
use crate::utils::{ApiError, ApiResult};

const BUNDLE_SOURCES: &[(Locale, &str)] = &[
    (Locale::Ar, include_str!("../../locales/ar.json")),
    (Locale::En, include_str!("../../locales/en.json")),
    (Locale::Tr, include_str!("../../locales/tr.json")),
];

static BUNDLES: Lazy<HashMap<Locale, Value>> = Lazy::new(|| {
    BUNDLE_SOURCES
        .iter()
        .filter_map(|(locale, source)| {
            match serde_json::from_str::<Value>(source) {
                Ok(mut bundle) => {
                    // The rust-i18n format marker is not part of the bundle
                    if let Some(map) = bundle.as_object_mut() {
                        map.remove("_version");
                    }
                    Some((*locale, bundle))
                }
                Err(err) => {
                    tracing::error!("Malformed bundle for locale {}: {}", locale, err);
                    None
                }
            }
        })
        .collect()
});

/// Read-only access to the embedded message bundles.
pub struct TranslationService;

impl TranslationService {
    pub fn new() -> Self {
        Self
    }

    /// Bundle for a locale string. Errors with a 404-equivalent for strings
    /// outside the enumeration and for SEO-only locales (no bundle exists).
    pub fn bundle(&self, locale: &str) -> ApiResult<&'static Value> {
        let parsed: Locale =
            locale.parse().map_err(|_| ApiError::locale_not_found(locale))?;
        if parsed.is_seo_only() {
            return Err(ApiError::locale_not_found(locale));
        }
        BUNDLES.get(&parsed).ok_or_else(|| ApiError::locale_not_found(locale))
    }
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::new()
    }
}
