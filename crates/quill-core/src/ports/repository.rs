use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Comment, NewComment, Post};
use crate::error::RepoError;
use crate::pagination::{LimitOffset, PageRequest};

/// Filter parameters accepted by the post listing query.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostFilter {
    pub category: Option<i64>,
    pub tag: Option<i64>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}

/// One page of posts plus the total row count for the active filter.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub items: Vec<Post>,
    pub total: u64,
}

/// One window of comments plus the total comment count for the post.
#[derive(Debug, Clone)]
pub struct CommentPage {
    pub items: Vec<Comment>,
    pub total: u64,
}

/// Read access to posts. All queries are reverse-chronological by
/// `created_time`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// One page of posts matching `filter`, with category and author
    /// embedded and tags left empty.
    async fn list(&self, filter: &PostFilter, page: &PageRequest) -> Result<PostPage, RepoError>;

    /// A single post with category, author and tags fully loaded.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Whether a post with this id exists.
    async fn exists(&self, id: i64) -> Result<bool, RepoError>;

    /// Distinct month starts in which any post was created, for the
    /// archive-dates aggregation. Deduplication happens at the store.
    async fn created_months(&self) -> Result<Vec<NaiveDate>, RepoError>;
}

/// Access to comments, always scoped to a single post.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// A limit/offset window of the post's comments, newest first.
    async fn list_for_post(
        &self,
        post_id: i64,
        window: &LimitOffset,
    ) -> Result<CommentPage, RepoError>;

    /// Persist a new comment; the store assigns id and creation time.
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError>;
}
