use axum::Json;
use http::StatusCode;
use serde_json::{Value, json};
use user_records::CoordinationError;

/// Status code plus `{"code": .., "detail": ..}` body
pub type ErrorResponse = (StatusCode, Json<Value>);

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ErrorResponse>;
}

/// Implementation for CoordinationError to map variants to appropriate status codes
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(|e| {
            let status = match e {
                CoordinationError::Validation(_) => StatusCode::BAD_REQUEST,
                CoordinationError::Conflict(_) => StatusCode::BAD_REQUEST,
                CoordinationError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
                CoordinationError::EmptyCollection(_) => StatusCode::NOT_FOUND,
                CoordinationError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(json!({
                    "code": e.code(),
                    "detail": e.to_string(),
                })),
            )
        })
    }
}
