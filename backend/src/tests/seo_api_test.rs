use axum::{body::Body, http::Request, http::StatusCode};

use crate::config::Config;
use crate::tests::common::{body_string, send, test_router_with_config};

fn config_with_base(base_url: &str) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config
}

#[tokio::test]
async fn test_sitemap_lists_locale_alternates() {
    let router = test_router_with_config(config_with_base("https://metfab.example"));
    let response = send(
        &router,
        Request::builder().uri("/sitemap.xml").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().get("content-type").unwrap().to_str().unwrap().starts_with("application/xml")
    );
    let xml = body_string(response).await;
    assert!(xml.contains("<loc>https://metfab.example/tr/services</loc>"));
    assert!(xml.contains(r#"hreflang="ar" href="https://metfab.example/ar/services""#));
    assert!(xml.contains(r#"hreflang="x-default" href="https://metfab.example/en/services""#));
}

#[tokio::test]
async fn test_robots_served_as_text() {
    let router = test_router_with_config(config_with_base("https://metfab.example"));
    let response = send(
        &router,
        Request::builder().uri("/robots.txt").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let txt = body_string(response).await;
    assert!(txt.contains("Sitemap: https://metfab.example/sitemap.xml"));
}

#[tokio::test]
async fn test_health_is_up() {
    let router = test_router_with_config(Config::default());
    let response = send(
        &router,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
