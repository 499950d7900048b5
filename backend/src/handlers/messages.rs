use std::sync::Arc;

use axum::{Json, extract::Path, extract::State};

use crate::AppState;
use crate::utils::ApiResult;

/// Get the translation bundle for a locale
///
/// Fails with 404 for anything outside the supported enumeration and for
/// SEO-only locales; the client must never receive a silently substituted
/// bundle.
#[utoipa::path(
    get,
    path = "/api/messages/{locale}",
    params(
        ("locale" = String, Path, description = "Locale code, e.g. ar, en, tr")
    ),
    responses(
        (status = 200, description = "Message bundle"),
        (status = 404, description = "Locale not supported or has no bundle"),
    ),
    tag = "Messages"
)]
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    tracing::debug!("Fetching message bundle for locale={}", locale);
    let bundle = state.translations.bundle(&locale)?;
    Ok(Json(bundle.clone()))
}
