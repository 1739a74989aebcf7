// src/paging/mod.rs
//! Page / page size request contract

pub mod extractors;
pub mod middleware;
pub mod models;


// Re-export commonly used items
pub use extractors::Paging;
pub use middleware::{
    paging_middleware, paging_middleware_with, parse, parse_uri, PagingError, PagingOptions,
};
pub use models::*;
