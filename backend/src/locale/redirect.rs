//! Redirect decision
//!
//! Decides whether the request must be redirected so the URL agrees with the
//! resolved locale. The decision is idempotent: applied to its own output it
//! always yields "no redirect".

use super::types::{Locale, ResolvedLocale};

/// Target of a locale-correcting redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    /// Rewritten path, query preserved verbatim.
    pub location: String,
}

/// Decide whether `raw_path` must be redirected to match the resolved locale.
///
/// A redirect is required only when the path already carries a recognized
/// locale segment, that segment differs from the resolved locale, and the
/// path is not the bare root. Requests without a locale segment are left for
/// the routing layer to prefix; this subsystem never manufactures one.
pub fn decide_redirect(
    resolved: &ResolvedLocale,
    path_locale: Option<Locale>,
    raw_path: &str,
) -> Option<RedirectTarget> {
    let current = path_locale?;
    if current == resolved.locale {
        return None;
    }

    let (path, query) = match raw_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (raw_path, None),
    };

    // Bare root is handled by the routing layer's default-locale redirect;
    // double-redirecting it here would fight that.
    if path == "/" || path.is_empty() {
        return None;
    }

    let rewritten = replace_first_segment(path, resolved.locale.as_str())?;
    let location = match query {
        Some(q) => format!("{}?{}", rewritten, q),
        None => rewritten,
    };
    Some(RedirectTarget { location })
}

/// Splice a new first segment into the path, leaving every other byte
/// (trailing slashes included) untouched.
fn replace_first_segment(path: &str, replacement: &str) -> Option<String> {
    let start = path.find(|c| c != '/')?;
    let end = path[start..].find('/').map_or(path.len(), |i| start + i);
    let mut out = String::with_capacity(path.len() + replacement.len());
    out.push_str(&path[..start]);
    out.push_str(replacement);
    out.push_str(&path[end..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::types::LocaleSource;

    fn resolved(locale: Locale) -> ResolvedLocale {
        ResolvedLocale { locale, source: LocaleSource::Cookie }
    }

    #[test]
    fn test_mismatched_segment_redirects() {
        let target = decide_redirect(&resolved(Locale::En), Some(Locale::Ar), "/ar/about");
        assert_eq!(target.unwrap().location, "/en/about");
    }

    #[test]
    fn test_matching_segment_passes_through() {
        assert_eq!(decide_redirect(&resolved(Locale::En), Some(Locale::En), "/en/about"), None);
    }

    #[test]
    fn test_no_segment_no_redirect() {
        assert_eq!(decide_redirect(&resolved(Locale::En), None, "/about"), None);
        assert_eq!(decide_redirect(&resolved(Locale::En), None, "/"), None);
    }

    #[test]
    fn test_query_preserved() {
        let target =
            decide_redirect(&resolved(Locale::Tr), Some(Locale::En), "/en/products?cat=laser&page=2");
        assert_eq!(target.unwrap().location, "/tr/products?cat=laser&page=2");
    }

    #[test]
    fn test_trailing_slash_preserved() {
        let target = decide_redirect(&resolved(Locale::En), Some(Locale::Ar), "/ar/services/");
        assert_eq!(target.unwrap().location, "/en/services/");
    }

    #[test]
    fn test_locale_only_path() {
        let target = decide_redirect(&resolved(Locale::En), Some(Locale::Ar), "/ar");
        assert_eq!(target.unwrap().location, "/en");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let first = decide_redirect(&resolved(Locale::En), Some(Locale::Ar), "/ar/about")
            .unwrap();
        // Re-run on the rewritten path: segment now matches, no redirect.
        let second = decide_redirect(
            &resolved(Locale::En),
            crate::locale::resolver::parse_path_locale(&first.location),
            &first.location,
        );
        assert_eq!(second, None);
    }
}
