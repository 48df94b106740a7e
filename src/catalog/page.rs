//! Catalog response envelopes

use serde::{Deserialize, Serialize};

/// A paginated list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage<T> {
    /// Whether the request succeeded.
    pub success: bool,

    /// The page.
    pub data: PageData<T>,
}

/// Items of one page with their pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData<T> {
    /// Items on this page.
    pub items: Vec<T>,

    /// Pagination metadata.
    pub metadata: PageMetadata,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Items across every page.
    pub total_items: u64,

    /// One-based page number.
    pub current_page: u64,

    /// Items per page.
    pub page_size: u64,

    /// Number of pages.
    pub total_pages: u64,

    /// Whether a later page exists.
    pub has_next_page: bool,

    /// Whether an earlier page exists.
    pub has_previous_page: bool,
}

impl PageMetadata {
    /// Metadata for a page of a result set.
    #[must_use]
    pub fn new(total_items: u64, current_page: u64, page_size: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };

        PageMetadata {
            total_items,
            current_page,
            page_size,
            total_pages,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }
}

impl<T> CatalogPage<T> {
    /// Wrap one page of items.
    pub fn new(items: Vec<T>, metadata: PageMetadata) -> Self {
        CatalogPage {
            success: true,
            data: PageData { items, metadata },
        }
    }

    /// Returns the items on this page.
    pub fn items(&self) -> &[T] {
        &self.data.items
    }

    /// Consume the page, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.data.items
    }
}

/// An unpaginated list response, as the toppings endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogList<T> {
    /// Whether the request succeeded.
    pub success: bool,

    /// Every item.
    pub data: Vec<T>,
}
