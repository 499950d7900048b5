//! End-to-end tests of the locale middleware over a minimal page router.
//!
//! The production router has no localized page routes (pages are rendered by
//! the frontend); these tests mount the middleware over stand-in routes so
//! redirects and pass-throughs can be observed at the HTTP level.

use axum::{Extension, Json, Router, body::Body, http::Request, http::StatusCode, routing::get};

use crate::locale::ResolvedLocale;
use crate::middleware::{LocaleState, locale_middleware};
use crate::tests::common::{body_json, send};

async fn page(Extension(resolved): Extension<ResolvedLocale>) -> Json<ResolvedLocale> {
    Json(resolved)
}

fn page_router(secure_cookies: bool) -> Router {
    let state = LocaleState { secure_cookies };
    Router::new()
        .route("/", get(page))
        .route("/about", get(page))
        .route("/:locale/about", get(page))
        .route("/:locale/products", get(page))
        .layer(axum::middleware::from_fn_with_state(state, locale_middleware))
}

fn get_request(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}

#[tokio::test]
async fn test_cookie_overrides_path_and_redirects() {
    let router = page_router(false);
    let response = send(
        &router,
        get_request("/tr/about")
            .header("cookie", "metfab_locale=en")
            .header("accept-language", "ar")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get("location").unwrap(), "/en/about");
    // Cookie already says en; no refresh on the redirect
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_redirect_target_passes_through() {
    let router = page_router(false);
    let response = send(
        &router,
        get_request("/en/about")
            .header("cookie", "metfab_locale=en")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["locale"], "en");
    assert_eq!(body["source"], "cookie");
}

#[tokio::test]
async fn test_header_quality_negotiation_refreshes_cookie() {
    let router = page_router(false);
    let response = send(
        &router,
        get_request("/tr/about")
            .header("accept-language", "fr;q=0.5,en;q=0.9,tr;q=0.9")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    // en and tr tie on quality; en comes first in the header and wins, so
    // the tr path is corrected and the new preference is persisted.
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get("location").unwrap(), "/en/about");
    let cookie = response.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("metfab_locale=en;"));
    assert!(cookie.contains("Max-Age=31536000"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"));
    assert!(!cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_invalid_cookie_falls_through_to_path() {
    let router = page_router(false);
    let response = send(
        &router,
        get_request("/tr/about")
            .header("cookie", "metfab_locale=xx")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("metfab_locale=tr;"));
    let body = body_json(response).await;
    assert_eq!(body["locale"], "tr");
    assert_eq!(body["source"], "path");
}

#[tokio::test]
async fn test_root_path_is_never_redirected() {
    let router = page_router(false);
    let response = send(
        &router,
        get_request("/")
            .header("cookie", "metfab_locale=ar")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["locale"], "ar");
}

#[tokio::test]
async fn test_unprefixed_path_is_not_redirected() {
    let router = page_router(false);
    let response = send(
        &router,
        get_request("/about")
            .header("cookie", "metfab_locale=tr")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    // Prefixing unlocalized paths is the routing layer's job
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["locale"], "tr");
}

#[tokio::test]
async fn test_query_preserved_on_redirect() {
    let router = page_router(false);
    let response = send(
        &router,
        get_request("/ar/products?cat=laser&page=2")
            .header("cookie", "metfab_locale=en")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get("location").unwrap(), "/en/products?cat=laser&page=2");
}

#[tokio::test]
async fn test_first_visit_sets_cookie_from_default() {
    let router = page_router(false);
    let response = send(&router, get_request("/").body(Body::empty()).unwrap()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("metfab_locale=en;"));
    let body = body_json(response).await;
    assert_eq!(body["source"], "default");
}

#[tokio::test]
async fn test_production_cookie_is_secure() {
    let router = page_router(true);
    let response = send(
        &router,
        get_request("/en/about").body(Body::empty()).unwrap(),
    )
    .await;

    let cookie = response.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("; Secure"));
}
