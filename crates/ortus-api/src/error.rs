//! Maps the domain error vocabulary to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use ortus_core::error::{ApiError, ErrorDetail, ErrorKind, FieldViolation};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Coarse error category.
    pub error: String,
    /// Dotted detail code.
    pub detailed: String,
    /// Human-readable message.
    pub message: String,
    /// Field violations for validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

/// Newtype carrying an [`ApiError`] across the HTTP boundary.
///
/// Handlers return `Result<_, ApiFailure>`; `?` converts domain errors
/// via `From`.
#[derive(Debug, Clone)]
pub struct ApiFailure(pub ApiError);

impl From<ApiError> for ApiFailure {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

/// Map an error classification to an HTTP status.
pub fn status_for(err: &ApiError) -> StatusCode {
    if err.detail == ErrorDetail::InternalServerError {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Incomplete => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Failed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(&err);

        if status.is_server_error() {
            tracing::error!(code = err.code(), error = %err.message, "Request failed");
        }

        let body = ApiErrorBody {
            error: err.kind().to_string(),
            detailed: err.code().to_string(),
            message: err.message,
            violations: err.violations,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::not_found("missing"), StatusCode::NOT_FOUND),
            (ApiError::authorisation("nope"), StatusCode::FORBIDDEN),
            (
                ApiError::internal("Database operation failed"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::sequential_failure("gone"),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::duplicate("taken"), StatusCode::CONFLICT),
            (
                ApiError::missing_start_date("when?"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::validation("bad input", Vec::new()),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::failed("broke"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(status_for(&err), expected, "for {}", err.code());
        }
    }

    #[test]
    fn test_body_carries_dotted_code() {
        let err = ApiError::sequential_failure("Results should Exist but were not found");
        let body = ApiErrorBody {
            error: err.kind().to_string(),
            detailed: err.code().to_string(),
            message: err.message.clone(),
            violations: Vec::new(),
        };
        assert_eq!(body.error, "BadRequest");
        assert_eq!(body.detailed, "BadRequest.SequentialOperationFailure");
    }
}
