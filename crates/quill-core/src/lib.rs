//! # Quill Core
//!
//! The domain layer of the Quill blog API.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod archive;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod representation;

pub use error::DomainError;
