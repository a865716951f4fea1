//! Response envelope shaping the outcome vocabulary onto the wire.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

use ortus_core::response::{ApiResponse, FailForwardDirective};

/// Wire envelope for non-failure outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    /// Dotted outcome code (`"Success"`, `"PartialSuccess.Archived"`, ...).
    pub status: String,
    /// Outcome annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Carried data. Absent for dataless outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Shape a response onto HTTP: the envelope plus the status code, honouring
/// a fail-forward status override.
pub fn respond<T: Serialize>(response: ApiResponse<T>) -> (StatusCode, Json<Envelope<T>>) {
    let status_code = match &response {
        ApiResponse::FailForward {
            directive: FailForwardDirective::ForceStatus(code),
            ..
        } => StatusCode::from_u16(*code).unwrap_or(StatusCode::OK),
        _ => StatusCode::OK,
    };

    let status = response.code().to_string();
    let (data, message) = match response {
        ApiResponse::Success { data, message } => (Some(data), message),
        ApiResponse::NoData { message } => (None, message),
        ApiResponse::Partial { data, message, .. } => (Some(data), message),
        ApiResponse::FailForward { data, message, .. } => (Some(data), Some(message)),
        ApiResponse::Inconsequential { data, message } => (data, message),
    };

    (
        status_code,
        Json(Envelope {
            status,
            message,
            data,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ortus_core::response::PartialReason;

    #[test]
    fn test_success_is_ok_with_data() {
        let (status, Json(envelope)) = respond(ApiResponse::success(7));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.status, "Success");
        assert_eq!(envelope.data, Some(7));
    }

    #[test]
    fn test_no_data_omits_data() {
        let (status, Json(envelope)) = respond(ApiResponse::<i32>::no_data_with("done"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.status, "Success.NoData");
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("done"));
    }

    #[test]
    fn test_partial_keeps_reason_code() {
        let (_, Json(envelope)) = respond(ApiResponse::partial(
            1,
            PartialReason::Private,
            "withheld",
        ));
        assert_eq!(envelope.status, "PartialSuccess.Private");
    }

    #[test]
    fn test_force_status_overrides_http_status() {
        let (status, Json(envelope)) = respond(ApiResponse::fail_forward(
            1,
            FailForwardDirective::ForceStatus(503),
            "degraded",
        ));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(envelope.status, "FailForward.ForceStatus");
        assert_eq!(envelope.data, Some(1));
    }
}
