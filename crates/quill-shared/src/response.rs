//! Page envelopes and RFC 7807 error bodies.

use serde::{Deserialize, Serialize};

use quill_core::pagination::{LimitOffset, PageMeta};

/// Page-number envelope for post listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(meta: PageMeta, results: Vec<T>) -> Self {
        Self {
            count: meta.count,
            next: meta.next,
            previous: meta.previous,
            results,
        }
    }
}

/// Offset/limit envelope for nested comment listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetPage<T> {
    pub count: u64,
    pub limit: u64,
    pub offset: u64,
    pub results: Vec<T>,
}

impl<T> OffsetPage<T> {
    pub fn new(total: u64, window: &LimitOffset, results: Vec<T>) -> Self {
        Self {
            count: total,
            limit: window.limit(),
            offset: window.offset(),
            results,
        }
    }
}

/// One failed field in a validation error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Field-attributed validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_fields: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            invalid_fields: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn validation(fields: Vec<FieldError>) -> Self {
        let mut response = Self::new(400, "Validation Failed");
        response.invalid_fields = Some(fields);
        response
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
