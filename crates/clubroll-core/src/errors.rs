use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clubroll_models::ErrorMap;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::response::{ErrorBody, ErrorResponse};

/// Machine-readable error codes carried in the error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidRequest,
    InvalidRegNumber,
    ValidationError,
    DuplicateMember,
    MemberNotFound,
    InactiveMember,
    InvalidLocation,
    LocationDenied,
    AlreadyMarked,
    InternalError,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub code: ErrorCode,
    pub error: Error,
    pub details: Option<Value>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, code: ErrorCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            code,
            error: err.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<Value>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, err)
    }

    pub fn bad_request<E>(code: ErrorCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, code, err)
    }

    pub fn not_found<E>(code: ErrorCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, code, err)
    }

    pub fn forbidden<E>(code: ErrorCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, code, err)
    }

    pub fn conflict<E>(code: ErrorCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, code, err)
    }

    /// A rejected registration payload, with the full error map as details.
    pub fn validation(errors: &ErrorMap) -> Self {
        let details = serde_json::to_value(errors).unwrap_or(Value::Null);
        Self::bad_request(
            ErrorCode::ValidationError,
            anyhow::anyhow!("Invalid input data"),
        )
        .with_details(details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = ?self.code, error = ?self.error, "Request failed");
        }

        let body = Json(ErrorResponse {
            success: false,
            error: ErrorBody {
                code: self.code,
                message: self.error.to_string(),
                details: self.details,
            },
        });

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubroll_models::FieldError;

    #[test]
    fn test_constructors_set_status() {
        let err = AppError::not_found(ErrorCode::MemberNotFound, anyhow::anyhow!("missing"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, ErrorCode::MemberNotFound);

        let err = AppError::conflict(ErrorCode::DuplicateMember, anyhow::anyhow!("dup"));
        assert_eq!(err.status, StatusCode::CONFLICT);

        let err = AppError::forbidden(ErrorCode::LocationDenied, anyhow::anyhow!("far"));
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_validation_error_carries_details() {
        let mut errors = ErrorMap::new();
        errors.insert("email", FieldError::format("Invalid email format"));

        let err = AppError::validation(&errors);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.error.to_string(), "Invalid input data");
        assert_eq!(
            err.details,
            Some(serde_json::json!({"email": "Invalid email format"}))
        );
    }

    #[test]
    fn test_from_any_error_is_internal() {
        let io = std::io::Error::other("disk on fire");
        let err: AppError = io.into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidRegNumber).unwrap();
        assert_eq!(json, r#""INVALID_REG_NUMBER""#);
    }

    #[test]
    fn test_into_response_status() {
        let response =
            AppError::bad_request(ErrorCode::InvalidRequest, anyhow::anyhow!("bad")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
