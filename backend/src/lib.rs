//! metfab-site backend
//!
//! Web backend for the MetFab multilingual marketing site: locale
//! negotiation middleware, contact/RFQ intake with rate limiting,
//! translation bundle delivery and SEO artifacts.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod handlers;
pub mod locale;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

use config::Config;
use middleware::{LocaleState, locale_middleware};
use services::{RateLimiter, TranslationService};

rust_i18n::i18n!("locales", fallback = "en");

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub rate_limiter: RateLimiter,
    pub translations: TranslationService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let rate_limiter = RateLimiter::new(&config.rate_limit);
        Self { config, rate_limiter, translations: TranslationService::new() }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::contact::submit_contact,
        handlers::messages::get_messages,
        handlers::pages::page_context,
        handlers::seo::sitemap,
        handlers::seo::robots,
        handlers::health::health,
    ),
    components(schemas(
        models::ContactRequest,
        models::ContactResponse,
        handlers::pages::PageContext,
        locale::Locale,
        locale::LocaleSource,
    )),
    tags(
        (name = "Contact", description = "Contact / RFQ intake"),
        (name = "Messages", description = "Translation bundles"),
        (name = "Pages", description = "Locale context for rendering"),
        (name = "SEO", description = "Sitemap and robots"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Build the application router with the locale middleware applied to every
/// route.
pub fn create_router(state: Arc<AppState>) -> Router {
    let locale_state =
        LocaleState { secure_cookies: state.config.site.environment.is_production() };

    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/messages/:locale", get(handlers::get_messages))
        .route("/api/page-context", get(handlers::page_context))
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/robots.txt", get(handlers::robots))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum::middleware::from_fn_with_state(locale_state, locale_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        // Same-origin deployment; no cross-origin callers configured
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    }
}
