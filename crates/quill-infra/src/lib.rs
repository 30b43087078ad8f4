//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! PostgreSQL repositories via SeaORM and the markdown renderer.

pub mod database;
pub mod markup;

pub use database::{DatabaseConfig, PostgresCommentRepository, PostgresPostRepository, connect};
pub use markup::CmarkRenderer;
