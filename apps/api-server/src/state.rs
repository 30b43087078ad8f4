//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, MarkupRenderer, PostRepository};
use quill_infra::database::{DatabaseConfig, PostgresCommentRepository, PostgresPostRepository};
use quill_infra::markup::CmarkRenderer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub renderer: Arc<dyn MarkupRenderer>,
}

impl AppState {
    /// Connect to the database and wire up the repositories.
    pub async fn new(db_config: &DatabaseConfig) -> Result<Self, RepoError> {
        // One pool shared via Arc; DatabaseConnection is not Clone once the
        // mock feature is unified into test builds.
        let db = Arc::new(quill_infra::database::connect(db_config).await?);

        let state = Self {
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db)),
            renderer: Arc::new(CmarkRenderer::new()),
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }
}
