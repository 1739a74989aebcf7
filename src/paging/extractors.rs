//! Paging extractor for Axum

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use tracing::debug;

use super::models::PageRequest;

/// Page request attached by the paging middleware.
///
/// Never rejects: when the middleware did not run, the default page
/// request is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Paging
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<PageRequest>() {
            Some(page_request) => Ok(Paging(*page_request)),
            None => {
                debug!(uri = %parts.uri, "No page request attached, using defaults");
                Ok(Paging(PageRequest::default()))
            }
        }
    }
}
