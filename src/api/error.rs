use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::TripGenieError;

/// Error envelope returned by every API route:
/// `{ "ok": false, "error": { "code": "<code>", "message": "<message>" } }`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub ok: bool,
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorResponse {
                ok: false,
                error: ApiErrorBody {
                    code: code.into(),
                    message: message.into(),
                },
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<TripGenieError> for ApiError {
    fn from(err: TripGenieError) -> Self {
        match &err {
            TripGenieError::Validation { .. } => Self::bad_request(err.user_message()),
            _ => {
                tracing::error!("Request failed: {err}");
                Self::internal(err.user_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = TripGenieError::validation("budget cannot be negative").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error.code, "bad_request");
        assert!(err.body.error.message.contains("budget"));
    }

    #[test]
    fn test_other_errors_map_to_internal() {
        let serde_err = serde_json::from_str::<u32>("boom").unwrap_err();
        let err: ApiError = TripGenieError::from(serde_err).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.error.code, "internal");
        assert!(!err.body.ok);
    }
}
