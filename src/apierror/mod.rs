// src/apierror/mod.rs
//! Structured API errors: envelope, constructors, validation and middleware

pub mod collection;
pub mod error;
pub mod middleware;
pub mod parse;
pub mod validation;


// Re-export commonly used items
pub use error::*;
pub use middleware::{
    error_handler, prepare_default_err, write_error, HandlerError, DEFAULT_ERR_STATIC,
};
pub use parse::{parse, parse_parts, try_parse, try_parse_parts, ResponseError};
pub use validation::{Validate, Validator, VALIDATE_ERR_INVALID_VAL, VALIDATE_ERR_REQUIRED};
