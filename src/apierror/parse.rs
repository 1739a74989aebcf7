// src/apierror/parse.rs
//! Client side: reading error envelopes back out of HTTP responses

use axum::http::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::error::{ApiError, CONTENT_TYPE_V1, ERR_CODE_INTERNAL};

/// Error read from a failed response.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// Body carried the error content type.
    #[error(transparent)]
    Api(ApiError),
    /// Any other body, as text.
    #[error("{0}")]
    Plain(String),
}

fn make_default(status: u16, payload: &[u8]) -> ApiError {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    ApiError::new(
        status,
        String::from_utf8_lossy(payload).into_owned(),
        ERR_CODE_INTERNAL,
    )
}

fn decode_or_default(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ApiError>(body) {
        Ok(api_err) => api_err,
        Err(e) => {
            debug!(error = %e, status = status, "Could not decode error envelope");
            make_default(status, body)
        }
    }
}

fn attach_url(api_err: ApiError, url: Option<&str>) -> ApiError {
    match url {
        Some(url) => api_err.with_path(url),
        None => api_err,
    }
}

/// Builds an `ApiError` from the pieces of a response.
///
/// A body without the error content type, or one that does not decode,
/// becomes an `internal` error whose message is the body text.
pub fn parse_parts(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
    url: Option<&str>,
) -> ApiError {
    let api_err = match content_type {
        Some(CONTENT_TYPE_V1) => decode_or_default(status, body),
        _ => make_default(status, body),
    };
    attach_url(api_err, url)
}

/// Like `parse_parts`, but bodies without the error content type are
/// returned as plain text errors.
pub fn try_parse_parts(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
    url: Option<&str>,
) -> ResponseError {
    match content_type {
        Some(CONTENT_TYPE_V1) => {
            ResponseError::Api(attach_url(decode_or_default(status, body), url))
        }
        _ => ResponseError::Plain(String::from_utf8_lossy(body).into_owned()),
    }
}

async fn into_parts(response: reqwest::Response) -> (u16, Option<String>, bytes::Bytes, String) {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let url = response.url().to_string();
    let body = response.bytes().await.unwrap_or_default();
    (status, content_type, body, url)
}

/// Consumes `response` and reads it as an `ApiError`.
pub async fn parse(response: reqwest::Response) -> ApiError {
    let (status, content_type, body, url) = into_parts(response).await;
    parse_parts(status, content_type.as_deref(), &body, Some(&url))
}

/// Consumes `response` and reads it as a `ResponseError`.
pub async fn try_parse(response: reqwest::Response) -> ResponseError {
    let (status, content_type, body, url) = into_parts(response).await;
    try_parse_parts(status, content_type.as_deref(), &body, Some(&url))
}
