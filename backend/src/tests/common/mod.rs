// Common test utilities and helpers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::connect_info::ConnectInfo;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::AppState;
use crate::config::Config;
use crate::create_router;

/// Router over a default (development) configuration.
pub fn test_router() -> Router {
    test_router_with_config(Config::default())
}

pub fn test_router_with_config(config: Config) -> Router {
    create_router(Arc::new(AppState::new(config)))
}

/// Send a request through the router, supplying the peer address the
/// ConnectInfo extractor would get from a real listener.
pub async fn send(router: &Router, mut request: Request<Body>) -> Response<axum::body::Body> {
    let addr: SocketAddr = "127.0.0.1:4000".parse().unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_string(response: Response<axum::body::Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
