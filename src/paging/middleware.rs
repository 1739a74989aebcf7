// src/paging/middleware.rs
//! Middleware parsing `page` / `page_size` query parameters

use axum::{
    extract::{Query, Request, State},
    http::Uri,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::models::{PageRequest, DEFAULT_PAGE, DEFAULT_SIZE, MAX_SIZE};
use crate::apierror::{ApiError, ERR_CODE_PARSE_FAILED};

const PAGE_PARAM: &str = "page";
const PAGE_SIZE_PARAM: &str = "page_size";

/// Page size limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingOptions {
    pub default_size: u64,
    pub max_size: u64,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            max_size: MAX_SIZE,
        }
    }
}

impl PagingOptions {
    /// Builds options keeping `1 <= default_size <= max_size`.
    pub fn new(default_size: u64, max_size: u64) -> Self {
        Self {
            default_size,
            max_size,
        }
        .normalized()
    }

    fn normalized(self) -> Self {
        let max_size = self.max_size.max(1);
        Self {
            default_size: self.default_size.clamp(1, max_size),
            max_size,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PagingError {
    #[error("could not parse page size: {0}")]
    InvalidPageSize(String),
    #[error("could not parse page size: page size must be greater than 0")]
    ZeroPageSize,
    #[error("could not parse page number: {0}")]
    InvalidPage(String),
    #[error("could not parse page number: page number must be greater than 0")]
    ZeroPage,
    #[error("could not parse query string: {0}")]
    MalformedQuery(String),
}

impl From<PagingError> for ApiError {
    fn from(err: PagingError) -> Self {
        ApiError::bad_request(err.to_string(), ERR_CODE_PARSE_FAILED)
    }
}

/// First value of `key`, if present.
fn query_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Parses a plain run of ASCII digits. Signs and whitespace are rejected.
fn parse_uint(raw: &str) -> Result<u64, String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid unsigned integer {:?}", raw));
    }
    raw.parse::<u64>().map_err(|e| format!("{} {:?}", e, raw))
}

fn page_size_from_query(
    params: &[(String, String)],
    opts: &PagingOptions,
) -> Result<u64, PagingError> {
    let size = match query_value(params, PAGE_SIZE_PARAM) {
        Some(raw) => {
            let size = parse_uint(raw).map_err(PagingError::InvalidPageSize)?;
            if size == 0 {
                return Err(PagingError::ZeroPageSize);
            }
            size
        }
        None => opts.default_size,
    };

    Ok(size.min(opts.max_size))
}

fn page_from_query(params: &[(String, String)]) -> Result<u64, PagingError> {
    match query_value(params, PAGE_PARAM) {
        Some(raw) => {
            let page = parse_uint(raw).map_err(PagingError::InvalidPage)?;
            if page == 0 {
                return Err(PagingError::ZeroPage);
            }
            Ok(page)
        }
        None => Ok(DEFAULT_PAGE),
    }
}

/// Parses decoded query pairs into a page request.
///
/// A page size above `opts.max_size` is clamped, not rejected. Options
/// with a zero size are raised to 1.
pub fn parse(params: &[(String, String)], opts: &PagingOptions) -> Result<PageRequest, PagingError> {
    let opts = opts.normalized();
    let size = page_size_from_query(params, &opts)?;
    let page = page_from_query(params)?;
    Ok(PageRequest::new(page, size))
}

/// Parses the query string of `uri` into a page request.
pub fn parse_uri(uri: &Uri, opts: &PagingOptions) -> Result<PageRequest, PagingError> {
    let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map_err(|e| PagingError::MalformedQuery(e.body_text()))?;
    parse(&params, opts)
}

/// Paging middleware using the default size limits.
pub async fn paging_middleware(request: Request, next: Next) -> Response {
    paging_middleware_with(State(PagingOptions::default()), request, next).await
}

/// Paging middleware with custom size limits, mounted with
/// `axum::middleware::from_fn_with_state`.
///
/// Rejects the request with 400 before the handler runs when the
/// parameters do not parse.
pub async fn paging_middleware_with(
    State(opts): State<PagingOptions>,
    mut request: Request,
    next: Next,
) -> Response {
    match parse_uri(request.uri(), &opts) {
        Ok(page_request) => {
            request.extensions_mut().insert(page_request);
            next.run(request).await
        }
        Err(e) => {
            debug!(
                error = %e,
                uri = %request.uri(),
                "Rejecting request with invalid paging parameters"
            );
            ApiError::from(e).into_response()
        }
    }
}
