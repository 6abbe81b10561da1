use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coordshift_core::error::CoordshiftError;
use serde::Serialize;

const INVALID_BODY: &str = "Invalid request body";

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
            details: None,
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<CoordshiftError> for ApiError {
    fn from(err: CoordshiftError) -> Self {
        match &err {
            CoordshiftError::InvalidFrame { .. } | CoordshiftError::UnsupportedFrame { .. } => {
                Self::bad_request("Invalid coordinate frame").with_details(err.to_string())
            }
            CoordshiftError::InvalidCoordinate { .. } => {
                Self::bad_request("Invalid coordinate").with_details(err.to_string())
            }
            CoordshiftError::Serialization(_) => {
                Self::bad_request(INVALID_BODY).with_details(err.to_string())
            }
            CoordshiftError::ConfigMissing { .. } | CoordshiftError::GeocoderUnavailable { .. } => {
                Self::service_unavailable("Reverse geocoding unavailable")
                    .with_details(err.to_string())
            }
            CoordshiftError::GeocoderRejected { .. } => {
                Self::bad_gateway("Reverse geocoding failed").with_details(err.to_string())
            }
            _ => Self::internal("Internal error").with_details(err.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request("Invalid query string").with_details(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(INVALID_BODY).with_details(rejection.body_text())
    }
}
