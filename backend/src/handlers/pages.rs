use axum::{Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::locale::{Locale, LocaleSource, ResolvedLocale};
use crate::utils::ApiResult;

/// Locale context handed to the rendering layer: which bundle to load and
/// which text direction to apply.
#[derive(Debug, Serialize, ToSchema)]
pub struct PageContext {
    pub locale: Locale,
    pub source: LocaleSource,
    pub dir: &'static str,
}

/// Get the resolved locale context for the current request
#[utoipa::path(
    get,
    path = "/api/page-context",
    responses(
        (status = 200, description = "Resolved locale and text direction", body = PageContext)
    ),
    tag = "Pages"
)]
pub async fn page_context(
    Extension(resolved): Extension<ResolvedLocale>,
) -> ApiResult<Json<PageContext>> {
    Ok(Json(PageContext {
        locale: resolved.locale,
        source: resolved.source,
        dir: resolved.locale.dir(),
    }))
}
