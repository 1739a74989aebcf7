// src/apierror/middleware.rs
//! Middleware turning errors raised by handlers into the error envelope

use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::error::{ApiError, CONTENT_TYPE_V1, ERR_CODE_INTERNAL};

/// Error raised by a handler: either already structured or anything else.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HandlerError {
    /// Structured form of the error. Unexpected errors only surface their
    /// text, as the message of a generic internal error.
    pub fn to_api_error(&self) -> ApiError {
        match self {
            HandlerError::Api(api_err) => api_err.clone(),
            HandlerError::Other(err) => {
                let mut api_err = default_err();
                api_err.error.message = format!("{:#}", err);
                api_err
            }
        }
    }
}

/// Marker left in the response extensions so `error_handler` can find the
/// error raised while handling the request.
#[derive(Debug, Clone)]
struct RaisedError(Arc<HandlerError>);

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let mut response = write_error(&self.to_api_error());
        response
            .extensions_mut()
            .insert(RaisedError(Arc::new(self)));
        response
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        HandlerError::Api(self).into_response()
    }
}

fn default_err() -> ApiError {
    ApiError::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        ERR_CODE_INTERNAL,
    )
}

/// Encoded default error, written when an error fails to serialize.
pub static DEFAULT_ERR_STATIC: Lazy<Bytes> = Lazy::new(|| {
    serde_json::to_vec(&default_err())
        .map(Bytes::from)
        .unwrap_or_default()
});

/// Encodes the default error payload. Called once at startup so the
/// fallback never has to be built while handling a request.
pub fn prepare_default_err() -> &'static Bytes {
    Lazy::force(&DEFAULT_ERR_STATIC)
}

/// Serializes `api_err` into a complete response with the error content type.
pub fn write_error(api_err: &ApiError) -> Response {
    match serde_json::to_vec(api_err) {
        Ok(blob) => error_response(api_err.status_code(), Bytes::from(blob)),
        Err(e) => {
            error!(error = %e, code = %api_err.code(), "Failed to encode API error, using default");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, DEFAULT_ERR_STATIC.clone())
        }
    }
}

fn error_response(status: StatusCode, body: Bytes) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_V1))],
        body,
    )
        .into_response()
}

fn request_path(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// Formats the error raised by the wrapped handler, if any, as an error
/// response carrying the request path.
pub async fn error_handler(request: Request, next: Next) -> Response {
    let path = request_path(request.uri());

    let mut response = next.run(request).await;

    let Some(RaisedError(raised)) = response.extensions_mut().remove::<RaisedError>() else {
        return response;
    };

    let api_err = raised.to_api_error().with_path(path);
    match raised.as_ref() {
        HandlerError::Other(err) => {
            error!(
                error = %format!("{:#}", err),
                path = %api_err.path,
                status = api_err.status,
                "Unexpected error while handling request"
            );
        }
        HandlerError::Api(_) if api_err.status_code().is_server_error() => {
            warn!(
                path = %api_err.path,
                status = api_err.status,
                code = %api_err.code(),
                message = %api_err.message(),
                "Request failed"
            );
        }
        HandlerError::Api(_) => {
            debug!(
                path = %api_err.path,
                status = api_err.status,
                code = %api_err.code(),
                "Request rejected"
            );
        }
    }

    write_error(&api_err)
}
