//! Request middleware and error handling.

pub mod error;
