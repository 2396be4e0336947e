use anyhow::bail;
use axum::{
    http::{header::HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::validation::FieldError;

/// Failures produced by validation and storage.
#[derive(Debug, Error)]
pub enum RideError {
    #[error("{}", join_messages(.0))]
    Validation(Vec<FieldError>),

    #[error("Could not find any rides")]
    NotFound,

    #[error("storage failure during {operation}")]
    Storage {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl RideError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        RideError::Validation(vec![FieldError::new(field, message)])
    }

    pub fn storage(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| RideError::Storage { operation, source }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RideError::Validation(_) => ErrorCode::Validation,
            RideError::NotFound => ErrorCode::RidesNotFound,
            RideError::Storage { .. } => ErrorCode::Server,
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,
    #[serde(rename = "RIDES_NOT_FOUND_ERROR")]
    RidesNotFound,
    #[serde(rename = "SERVER_ERROR")]
    Server,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Validation => "VALIDATION_ERROR",
            ErrorCode::RidesNotFound => "RIDES_NOT_FOUND_ERROR",
            ErrorCode::Server => "SERVER_ERROR",
        }
    }
}

/// How error codes are mapped onto HTTP status codes.
///
/// `Legacy` answers every logical error with 200, matching clients written
/// against the first version of the rides API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StatusMode {
    Http,
    Legacy,
}

impl StatusMode {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "http" => Ok(StatusMode::Http),
            "legacy" => Ok(StatusMode::Legacy),
            other => bail!("unknown ERROR_STATUS_MODE '{}', expected 'http' or 'legacy'", other),
        }
    }

    pub fn status_for(self, code: ErrorCode) -> StatusCode {
        match self {
            StatusMode::Legacy => StatusCode::OK,
            StatusMode::Http => match code {
                ErrorCode::Validation => StatusCode::BAD_REQUEST,
                ErrorCode::RidesNotFound => StatusCode::NOT_FOUND,
                ErrorCode::Server => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error_code: ErrorCode,
    message: String,
}

/// Error ready to cross the HTTP boundary.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: ErrorCode,
    message: String,
    correlation_id: Option<Uuid>,
}

impl ApiError {
    /// Shapes a domain error for transport. Storage detail is logged under a
    /// fresh correlation id and replaced by a generic message.
    pub fn from_ride_error(err: RideError, mode: StatusMode) -> Self {
        let code = err.code();
        let status = mode.status_for(code);

        match err {
            RideError::Storage { operation, source } => {
                let correlation_id = Uuid::new_v4();
                tracing::error!(
                    operation = operation,
                    correlation_id = %correlation_id,
                    error = ?source,
                    "database operation failed"
                );
                Self {
                    status,
                    code,
                    message: "Unknown error".to_string(),
                    correlation_id: Some(correlation_id),
                }
            }
            other => Self {
                status,
                code,
                message: other.to_string(),
                correlation_id: None,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error_code: self.code,
            message: self.message,
        };

        let mut response = (self.status, Json(payload)).into_response();
        if let Some(id) = self.correlation_id {
            if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
                response
                    .headers_mut()
                    .insert(HeaderName::from_static("x-correlation-id"), value);
            }
        }
        response
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_mode_uses_distinct_statuses() {
        let mode = StatusMode::Http;
        assert_eq!(mode.status_for(ErrorCode::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(mode.status_for(ErrorCode::RidesNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            mode.status_for(ErrorCode::Server),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn legacy_mode_always_answers_ok() {
        for code in [ErrorCode::Validation, ErrorCode::RidesNotFound, ErrorCode::Server] {
            assert_eq!(StatusMode::Legacy.status_for(code), StatusCode::OK);
        }
    }

    #[test]
    fn status_mode_parsing() {
        assert_eq!(StatusMode::parse("HTTP").unwrap(), StatusMode::Http);
        assert_eq!(StatusMode::parse("legacy").unwrap(), StatusMode::Legacy);
        assert!(StatusMode::parse("teapot").is_err());
    }

    #[test]
    fn validation_message_joins_every_field() {
        let err = RideError::Validation(vec![
            FieldError::new("start_lat", "first"),
            FieldError::new("rider_name", "second"),
        ]);
        assert_eq!(err.to_string(), "first; second");
        assert_eq!(err.code().as_str(), "VALIDATION_ERROR");
    }

    #[test]
    fn storage_detail_is_not_exposed() {
        let err = RideError::Storage {
            operation: "insert ride",
            source: sqlx::Error::RowNotFound,
        };
        let api = ApiError::from_ride_error(err, StatusMode::Http);
        assert_eq!(api.code(), ErrorCode::Server);
        assert_eq!(api.message(), "Unknown error");
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
