use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::HeaderMap,
};
use rust_i18n::t;
use validator::Validate;

use crate::AppState;
use crate::models::{ContactRequest, ContactResponse};
use crate::utils::{ApiResult, error::ApiError, message_locale};

/// Submit a contact / RFQ message
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message accepted", body = ContactResponse),
        (status = 400, description = "Validation error"),
        (status = 429, description = "Rate limit exceeded"),
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    let client_ip = client_ip(&headers, addr);

    state.rate_limiter.check(&client_ip)?;

    let payload = payload.sanitized();
    payload
        .validate()
        .map_err(|err| ApiError::validation_error(flatten_validation_errors(&err)))?;

    tracing::info!("Contact request from {} <{}>: {}", payload.name, payload.email, payload.subject);

    Ok(Json(ContactResponse {
        code: 0,
        message: t!("contact.received", locale = message_locale()).to_string(),
    }))
}

/// Rate-limit key: first hop of X-Forwarded-For when present (the site runs
/// behind a reverse proxy in production), else the peer address.
fn client_ip(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| addr.ip().to_string())
}

fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let detail = errs
                .iter()
                .filter_map(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            if detail.is_empty() { field.to_string() } else { format!("{}: {}", field, detail) }
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
