//! Preference cookie lifecycle
//!
//! The cookie records the user's locale so explicit choices survive across
//! visits. It is rewritten only when the resolved locale disagrees with what
//! the client already holds; matching cookies are left alone to avoid
//! response header churn.

use super::types::{Locale, ResolvedLocale};

/// Cookie name, also read by the client-side language switcher.
pub const COOKIE_NAME: &str = "metfab_locale";

/// One year, in seconds.
pub const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Attributes of the locale preference cookie.
///
/// Not `HttpOnly`: the language switcher in the client reads the current
/// preference without a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceCookie {
    pub value: Locale,
    pub secure: bool,
}

impl PreferenceCookie {
    /// Render as a `Set-Cookie` header value.
    pub fn header_value(&self) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            COOKIE_NAME,
            self.value.as_str(),
            COOKIE_MAX_AGE_SECS
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Refresh when the existing cookie is absent, invalid (parsed to `None`
/// upstream), or disagrees with the resolved locale.
pub fn should_refresh_cookie(existing: Option<Locale>, resolved: &ResolvedLocale) -> bool {
    existing != Some(resolved.locale)
}

/// Build the cookie for a resolved locale. `secure` is set only in
/// production deployments so plain-HTTP local testing keeps working.
pub fn build_cookie(locale: Locale, secure: bool) -> PreferenceCookie {
    PreferenceCookie { value: locale, secure }
}
