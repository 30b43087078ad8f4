//! The two pagination strategies used by the API.
//!
//! Post listings page by number (`page` / `page_size`), comment listings by
//! window (`limit` / `offset`). They are deliberately separate structs with
//! separate parameter sets and metadata rather than one polymorphic paginator.

use serde::Serialize;

use crate::error::DomainError;

const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 100;

const DEFAULT_LIMIT: u64 = 20;
const MAX_LIMIT: u64 = 100;

/// Page-number pagination for post listings. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Build from raw query parameters, applying defaults and bounds.
    pub fn from_params(page: Option<u64>, page_size: Option<u64>) -> Result<Self, DomainError> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(DomainError::validation("page", "must be 1 or greater"));
        }

        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(DomainError::validation("page_size", "must be 1 or greater"));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(DomainError::validation(
                "page_size",
                format!("must not exceed {MAX_PAGE_SIZE}"),
            ));
        }

        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Zero-based page index, as expected by the query layer.
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }

    /// Compute page metadata for a known total row count.
    pub fn meta(&self, total: u64) -> PageMeta {
        let next = if self.page * self.page_size < total {
            Some(self.page + 1)
        } else {
            None
        };
        let previous = if self.page > 1 { Some(self.page - 1) } else { None };

        PageMeta {
            count: total,
            next,
            previous,
        }
    }
}

/// Metadata accompanying a page-number listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
}

/// Offset/limit pagination for nested comment listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffset {
    limit: u64,
    offset: u64,
}

impl LimitOffset {
    /// Build from raw query parameters, applying defaults and bounds.
    pub fn from_params(limit: Option<u64>, offset: Option<u64>) -> Result<Self, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(DomainError::validation("limit", "must be 1 or greater"));
        }
        if limit > MAX_LIMIT {
            return Err(DomainError::validation(
                "limit",
                format!("must not exceed {MAX_LIMIT}"),
            ));
        }

        Ok(Self {
            limit,
            offset: offset.unwrap_or(0),
        })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }
}
