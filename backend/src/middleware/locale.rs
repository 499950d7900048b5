//! Locale negotiation middleware
//!
//! Thin axum adapter over the pure negotiation core in `crate::locale`:
//! snapshots the request signals, resolves one locale, redirects when the
//! URL disagrees with it, and refreshes the preference cookie on whichever
//! response goes out.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::Response,
};

use crate::locale::{
    COOKIE_NAME, RequestSignals, build_cookie, decide_redirect, parse_accept_language,
    parse_cookie_locale, parse_path_locale, resolve, should_refresh_cookie,
};
use crate::utils::with_locale;

/// Per-router state for the locale middleware.
#[derive(Clone)]
pub struct LocaleState {
    /// Mark the preference cookie `Secure` (production only).
    pub secure_cookies: bool,
}

/// Middleware translating the HTTP request into `RequestSignals` and back.
pub async fn locale_middleware(
    State(state): State<LocaleState>,
    mut req: Request,
    next: Next,
) -> Response {
    let signals = snapshot_signals(&req);
    let resolved = resolve(&signals);

    tracing::debug!(
        "Resolved locale {} (source: {:?}) for {}",
        resolved.locale,
        resolved.source,
        signals.raw_path
    );

    let mut response =
        match decide_redirect(&resolved, signals.path_locale, &signals.raw_path) {
            Some(target) => {
                tracing::debug!("Locale redirect {} -> {}", signals.raw_path, target.location);
                redirect_response(&target.location)
            }
            None => {
                req.extensions_mut().insert(resolved);
                // Scope the current locale to this request's task so error
                // rendering and rust-i18n lookups stay isolated under
                // concurrency.
                with_locale(resolved.locale, next.run(req)).await
            }
        };

    if should_refresh_cookie(signals.cookie_locale, &resolved) {
        let cookie = build_cookie(resolved.locale, state.secure_cookies);
        if let Ok(value) = HeaderValue::from_str(&cookie.header_value()) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

/// Build the read-only signal snapshot for this request.
fn snapshot_signals(req: &Request) -> RequestSignals {
    let raw_path = req
        .uri()
        .path_and_query()
        .map_or_else(|| "/".to_string(), |pq| pq.as_str().to_string());

    let cookie_locale = parse_cookie_locale(preference_cookie_value(req));

    let header_locale = parse_accept_language(
        req.headers().get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
    );

    let path_locale = parse_path_locale(req.uri().path());

    RequestSignals { cookie_locale, header_locale, path_locale, raw_path }
}

/// Find the preference cookie among the request's Cookie headers.
fn preference_cookie_value(req: &Request) -> Option<&str> {
    req.headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|pair| pair.trim().strip_prefix(COOKIE_NAME)?.strip_prefix('='))
}

fn redirect_response(location: &str) -> Response {
    let mut response = Response::new(axum::body::Body::empty());
    *response.status_mut() = StatusCode::TEMPORARY_REDIRECT;
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}
