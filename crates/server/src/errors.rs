use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use search::errors::SearchError;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    /// Store connectivity or query failure.
    Unavailable(String),
    NotFound(String),
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Unavailable(msg) => ApiError::Unavailable(msg),
            // A sync conflict never reaches the HTTP layer; mapping it as a
            // 5xx keeps the conversion total.
            SearchError::Conflict(msg) => ApiError::Unavailable(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Unavailable(msg) => {
                error!(error = %msg, "search unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "search is temporarily unavailable".to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        (status, Json(json!({"success": false, "message": msg}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_unavailable() {
        let api: ApiError = SearchError::Conflict("duplicate key".into()).into();
        assert!(matches!(api, ApiError::Unavailable(ref msg) if msg == "duplicate key"));
        let response = api.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
