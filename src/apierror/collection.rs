// src/apierror/collection.rs
//! Constructors for the common HTTP failure categories

use axum::http::StatusCode;

use super::error::*;

const VALIDATION_FAILED_MESSAGE: &str = "Request validation failed";

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or_default()
}

fn single_field(field: String, code: String, message: String) -> FieldErrors {
    FieldErrors::from([(field, FieldError::new(code, message))])
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, ERR_CODE_NOT_FOUND)
    }

    pub fn parse_failed() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Could not parse request",
            ERR_CODE_PARSE_FAILED,
        )
    }

    pub fn bad_request(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, code)
    }

    /// 400 `validation_failed` with a single failing field.
    pub fn bad_request_field(
        message: impl Into<String>,
        code: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self::bad_request_fields(single_field(field.into(), code.into(), message.into()))
    }

    /// 400 `validation_failed` carrying every failing field.
    pub fn bad_request_fields(fields: FieldErrors) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            VALIDATION_FAILED_MESSAGE,
            ERR_CODE_VALIDATION_FAILED,
        )
        .with_fields(fields)
    }

    /// 409 reporting the field that clashes with existing state.
    pub fn conflict(
        message: impl Into<String>,
        code: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        let (message, code) = (message.into(), code.into());
        Self::new(StatusCode::CONFLICT, message.clone(), code.clone())
            .with_fields(single_field(field.into(), code, message))
    }

    pub fn forbidden(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message, code)
    }

    pub fn internal(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, code)
    }

    pub fn internal_default() -> Self {
        Self::internal(
            status_text(StatusCode::INTERNAL_SERVER_ERROR),
            ERR_CODE_INTERNAL,
        )
    }

    pub fn unauthorized() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            status_text(StatusCode::UNAUTHORIZED),
            ERR_CODE_UNAUTHORIZED,
        )
    }

    pub fn unprocessable(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message, code)
    }

    pub fn service_unavailable() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            status_text(StatusCode::SERVICE_UNAVAILABLE),
            ERR_CODE_UNAVAILABLE,
        )
    }
}
