// src/apierror/error.rs
//! Error envelope types shared by every API response

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Content type marking a structured error body.
pub const CONTENT_TYPE_V1: &str = "application/vnd.mysterium.error+json";

pub const ERR_CODE_NOT_FOUND: &str = "not_found";
pub const ERR_CODE_INTERNAL: &str = "internal";
pub const ERR_CODE_PARSE_FAILED: &str = "parse_failed";
pub const ERR_CODE_VALIDATION_FAILED: &str = "validation_failed";
pub const ERR_CODE_UNAVAILABLE: &str = "unavailable";
pub const ERR_CODE_UNAUTHORIZED: &str = "shall_not_pass";

/// Field errors keyed by field name.
pub type FieldErrors = BTreeMap<String, FieldError>;

/// API error returned by a REST service.
///
/// `path` stays empty until the error middleware attaches the request URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ErrorDetails,
    pub status: u16,
    #[serde(default)]
    pub path: String,
}

/// Body of the `error` key in the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: FieldErrors,
}

/// Reason a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl ApiError {
    /// Builds an error with an arbitrary status, message and code.
    pub fn new(status: StatusCode, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: ErrorDetails {
                code: code.into(),
                message: message.into(),
                detail: None,
                fields: FieldErrors::new(),
            },
            status: status.as_u16(),
            path: String::new(),
        }
    }

    /// Message for humans.
    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// Detailed message for humans, falling back to the message.
    pub fn detail(&self) -> &str {
        match self.error.detail.as_deref() {
            Some(detail) if !detail.is_empty() => detail,
            _ => &self.error.message,
        }
    }

    pub fn code(&self) -> &str {
        &self.error.code
    }

    pub fn fields(&self) -> &FieldErrors {
        &self.error.fields
    }

    /// Status to respond with. Decoded payloads carrying an out of range
    /// number map to 500.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Attaches field errors and synthesizes `detail` from them.
    pub(crate) fn with_fields(mut self, fields: FieldErrors) -> Self {
        if !fields.is_empty() {
            self.error.detail = Some(format!(
                "{}: {}",
                self.error.message,
                describe_fields(&fields)
            ));
        }
        self.error.fields = fields;
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "server responded with an error: {} ({}) [{}] {}",
            self.status, self.path, self.error.code, self.error.message
        )
    }
}

impl std::error::Error for ApiError {}

/// Joins field errors as `field: message [code]`, separated by `; `.
/// Fields are listed in lexicographic order.
pub fn describe_fields(fields: &FieldErrors) -> String {
    fields
        .iter()
        .map(|(field, e)| format!("{}: {} [{}]", field, e.message, e.code))
        .collect::<Vec<_>>()
        .join("; ")
}
