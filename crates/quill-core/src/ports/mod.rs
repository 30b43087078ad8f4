//! Ports - trait interfaces implemented by the infrastructure layer.

mod markup;
mod repository;

pub use markup::{MarkupRenderer, RenderedBody};
pub use repository::{CommentPage, CommentRepository, PostFilter, PostPage, PostRepository};
