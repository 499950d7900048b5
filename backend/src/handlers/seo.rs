//! SEO artifacts: sitemap and robots
//!
//! Pure string templating over the locale enumeration and the configured
//! canonical origin. Every page is emitted once per locale with the full
//! hreflang alternate set plus x-default.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::locale::{DEFAULT_LOCALE, SUPPORTED_LOCALES};

/// Marketing routes, relative to the locale prefix.
const SITE_ROUTES: &[&str] = &["", "/about", "/services", "/products", "/industries", "/contact"];

/// Get the localized sitemap
#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "Sitemap with hreflang alternates", body = String, content_type = "application/xml")
    ),
    tag = "SEO"
)]
pub async fn sitemap(State(state): State<Arc<AppState>>) -> Response {
    let body = render_sitemap(&state.config.site.base_url);
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], body).into_response()
}

/// Get robots.txt
#[utoipa::path(
    get,
    path = "/robots.txt",
    responses(
        (status = 200, description = "Robots policy", body = String, content_type = "text/plain")
    ),
    tag = "SEO"
)]
pub async fn robots(State(state): State<Arc<AppState>>) -> Response {
    let body = render_robots(&state.config.site.base_url);
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

fn render_sitemap(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = chrono::Utc::now().format("%Y-%m-%d");

    let mut xml = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "\n",
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
        "\n"
    ));

    for route in SITE_ROUTES {
        for locale in SUPPORTED_LOCALES {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}/{}{}</loc>\n", base, locale, route));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
            for alternate in SUPPORTED_LOCALES {
                xml.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}/{}{}\"/>\n",
                    alternate, base, alternate, route
                ));
            }
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"x-default\" href=\"{}/{}{}\"/>\n",
                base, DEFAULT_LOCALE, route
            ));
            xml.push_str("  </url>\n");
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

fn render_robots(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", base)
}
