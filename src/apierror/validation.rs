// src/apierror/validation.rs
//! Accumulates field-level failures into a single `validation_failed` error

use super::error::{ApiError, FieldError, FieldErrors};

pub const VALIDATE_ERR_REQUIRED: &str = "required";
pub const VALIDATE_ERR_INVALID_VAL: &str = "invalid_value";

/// Request-scoped collector of field errors.
///
/// Recording the same field twice keeps only the latest failure.
#[derive(Debug, Default)]
pub struct Validator {
    fields: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &str, error_code: &str, message: impl Into<String>) {
        self.fields
            .insert(field.to_string(), FieldError::new(error_code, message));
    }

    pub fn required(&mut self, field: &str) {
        self.fail(
            field,
            VALIDATE_ERR_REQUIRED,
            format!("'{}' is required", field),
        );
    }

    pub fn invalid(&mut self, field: &str, message: impl Into<String>) {
        self.fail(field, VALIDATE_ERR_INVALID_VAL, message);
    }

    pub fn is_valid(&self) -> bool {
        self.fields.is_empty()
    }

    /// Folds another validator's failures into this one. Entries from
    /// `other` win on conflicting field names.
    pub fn merge(&mut self, other: Validator) {
        self.fields.extend(other.fields);
    }

    /// `None` when nothing failed. The returned error owns its own copy of
    /// the recorded fields.
    pub fn err(&self) -> Option<ApiError> {
        if self.fields.is_empty() {
            return None;
        }
        Some(ApiError::bad_request_fields(self.fields.clone()))
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.fields.is_empty() {
            return Ok(());
        }
        Err(ApiError::bad_request_fields(self.fields))
    }
}

/// Input types that know how to check themselves.
pub trait Validate {
    fn validate_into(&self, validator: &mut Validator);

    fn validate(&self) -> Result<(), ApiError> {
        let mut validator = Validator::new();
        self.validate_into(&mut validator);
        validator.into_result()
    }
}
