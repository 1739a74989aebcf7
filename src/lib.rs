// src/lib.rs
//! Standard error envelope, validation aggregation and paging contract for
//! axum based REST APIs.
//!
//! Handlers return `Result<T, ApiError>` (or `Result<T, HandlerError>` when
//! arbitrary errors may surface) and the [`apierror::error_handler`]
//! middleware renders every raised error as
//! `application/vnd.mysterium.error+json`.

pub mod apierror;
pub mod config;
pub mod paging;

pub use apierror::{ApiError, FieldError, HandlerError, Validator};
pub use paging::{PageRequest, Pageable, Paging};
