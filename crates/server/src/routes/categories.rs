use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use common::types::ApiResponse;
use search::dto::{
    CategoryDetailDto, CategoryDto, CategoryListDto, CategorySuggestionDto, ServiceDto,
    ServicesPageDto,
};
use search::executor;
use search::filters::{normalize, RawFilters};
use search::registry;

use crate::errors::ApiError;
use crate::routes::search_api::raw_filters;
use crate::routes::AppState;

/// `GET /api/categories`
pub async fn list() -> Json<ApiResponse<CategoryListDto>> {
    let categories: Vec<CategoryDto> = registry::all().iter().map(CategoryDto::from).collect();
    let total = categories.len();
    Json(ApiResponse::ok(CategoryListDto { categories, total }))
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// `GET /api/categories/search?q=`: lightweight name matches over
/// categories and subcategories; short queries yield an empty list.
pub async fn suggest(
    params: Result<Query<SuggestQuery>, QueryRejection>,
) -> Json<ApiResponse<Value>> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let q = params.q.unwrap_or_default();
    let suggestions: Vec<CategorySuggestionDto> =
        registry::search(&q).iter().map(CategorySuggestionDto::from).collect();
    let total = suggestions.len();
    Json(ApiResponse::ok(json!({
        "suggestions": suggestions,
        "total": total,
    })))
}

/// `GET /api/categories/:slug`: detail with subcategories; a miss is 404.
pub async fn detail(Path(slug): Path<String>) -> Result<Json<ApiResponse<CategoryDetailDto>>, ApiError> {
    let def = registry::resolve(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("category '{}' not found", slug)))?;
    Ok(Json(ApiResponse::ok(CategoryDetailDto::from(def))))
}

/// `GET /api/categories/:slug/services`: the search contract scoped to one
/// category. The path segment overrides any category in the query string,
/// and an unknown slug yields an empty result, matching `/api/search`.
pub async fn services(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    query: Result<Query<RawFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<ServicesPageDto>>, ApiError> {
    let mut raw = raw_filters(query);
    raw.category = Some(slug);
    let spec = normalize(raw);
    let page = executor::execute(&state.db, &spec).await?;
    info!(
        category = spec.category.as_deref().unwrap_or_default(),
        total = page.pagination.total,
        "category services listed"
    );
    Ok(Json(ApiResponse::ok(ServicesPageDto {
        services: page.items.into_iter().map(ServiceDto::from).collect(),
        pagination: page.pagination,
    })))
}
