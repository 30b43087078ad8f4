//! # Quill Shared
//!
//! Wire types shared between the HTTP surface and any consumer: request and
//! response DTOs, page envelopes, and RFC 7807 error bodies.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, FieldError, OffsetPage, Page};
