use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use common::types::ApiResponse;
use search::dto::{ServiceDto, ServicesPageDto};
use search::executor;
use search::filters::{normalize, RawFilters};

use crate::errors::ApiError;
use crate::routes::AppState;

/// Unparseable query strings (duplicate keys and the like) fall back to
/// default filters instead of a 400, matching the coerce-everything policy.
pub fn raw_filters(query: Result<Query<RawFilters>, QueryRejection>) -> RawFilters {
    query.map(|Query(raw)| raw).unwrap_or_default()
}

/// `GET /api/search`. Filters arrive as loose query-string values and are
/// coerced, never rejected; only store failures produce an error response.
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<RawFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<ServicesPageDto>>, ApiError> {
    let spec = normalize(raw_filters(query));
    let page = executor::execute(&state.db, &spec).await?;
    info!(
        total = page.pagination.total,
        page = page.pagination.page,
        sort = spec.sort_by.as_str(),
        "search executed"
    );
    Ok(Json(ApiResponse::ok(ServicesPageDto {
        services: page.items.into_iter().map(ServiceDto::from).collect(),
        pagination: page.pagination,
    })))
}
