//! Locale negotiation core
//!
//! Pure, framework-free functions that pick one locale per request from the
//! competing signals (cookie, Accept-Language, path segment, default),
//! decide locale-correcting redirects, and manage the preference cookie.
//! The axum adapter lives in `crate::middleware::locale`.

pub mod cookie;
pub mod redirect;
pub mod resolver;
pub mod types;

pub use cookie::{COOKIE_NAME, PreferenceCookie, build_cookie, should_refresh_cookie};
pub use redirect::{RedirectTarget, decide_redirect};
pub use resolver::{parse_accept_language, parse_cookie_locale, parse_path_locale, resolve};
pub use types::{
    DEFAULT_LOCALE, Locale, LocaleSource, RequestSignals, ResolvedLocale, SUPPORTED_LOCALES,
};
