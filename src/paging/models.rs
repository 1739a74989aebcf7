// src/paging/models.rs

use serde::Serialize;

/// Default page size if unspecified.
pub const DEFAULT_SIZE: u64 = 20;
/// Maximum page size (cap).
pub const MAX_SIZE: u64 = 50;
/// First page number.
pub const DEFAULT_PAGE: u64 = 1;

/// Page requested by a client. Always has `page >= 1` and a page size
/// between 1 and the configured maximum.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_SIZE,
        }
    }
}

impl PageRequest {
    pub(crate) fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of items preceding this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// Paging information returned alongside a page of results.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl Pageable {
    pub fn new(request: &PageRequest, total_items: u64) -> Self {
        let total_pages = if request.page_size == 0 {
            0
        } else {
            total_items.div_ceil(request.page_size)
        };

        Self {
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages,
        }
    }
}
