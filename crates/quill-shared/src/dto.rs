//! Data Transfer Objects - request/response types for the API.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use quill_core::DomainError;
use quill_core::domain::{Comment, NewComment, Post};
use quill_core::ports::{MarkupRenderer, RenderedBody};
use quill_core::representation::PostShape;

/// Embedded category reference: id and name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

/// Embedded author reference: id and username only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

/// Summary shape of a post, used by listings. No body, no tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub created_time: DateTime<Utc>,
    pub excerpt: String,
    pub views: i64,
    pub category: CategoryResponse,
    pub author: AuthorResponse,
}

impl PostSummary {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            created_time: post.created_time,
            excerpt: post.excerpt.clone(),
            views: post.views,
            category: CategoryResponse {
                id: post.category.id,
                name: post.category.name.clone(),
            },
            author: AuthorResponse {
                id: post.author.id,
                username: post.author.username.clone(),
            },
        }
    }
}

/// Full shape of a post, used by single-post retrieval. Adds the raw body,
/// modification time, tags, and the markup derived from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
    pub excerpt: String,
    pub views: i64,
    pub category: CategoryResponse,
    pub author: AuthorResponse,
    pub tags: Vec<TagResponse>,
    pub toc: String,
    pub body_html: String,
}

impl PostDetail {
    pub fn from_post(post: &Post, rendered: RenderedBody) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
            created_time: post.created_time,
            modified_time: post.modified_time,
            excerpt: post.excerpt.clone(),
            views: post.views,
            category: CategoryResponse {
                id: post.category.id,
                name: post.category.name.clone(),
            },
            author: AuthorResponse {
                id: post.author.id,
                username: post.author.username.clone(),
            },
            tags: post
                .tags
                .iter()
                .map(|t| TagResponse {
                    id: t.id,
                    name: t.name.clone(),
                })
                .collect(),
            toc: rendered.toc,
            body_html: rendered.body_html,
        }
    }
}

/// A post rendered in the shape selected for the current operation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PostRepresentation {
    Summary(PostSummary),
    Detail(Box<PostDetail>),
}

impl PostRepresentation {
    /// Build the representation for an already-resolved shape. The renderer
    /// is invoked only when the detail shape asks for derived markup.
    pub fn build(shape: PostShape, post: &Post, renderer: &dyn MarkupRenderer) -> Self {
        match shape {
            PostShape::Summary => Self::Summary(PostSummary::from_post(post)),
            PostShape::Detail => {
                let rendered = renderer.render(&post.body);
                Self::Detail(Box::new(PostDetail::from_post(post, rendered)))
            }
        }
    }
}

/// Raw query parameters accepted by the post listing endpoint. Values stay
/// strings at the extractor so a malformed one can be reported by field name
/// instead of failing deserialization with an anonymous error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub created_after: Option<String>,
    pub created_before: Option<String>,
}

/// Parsed post listing parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostListParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub category: Option<i64>,
    pub tag: Option<i64>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}

impl PostListQuery {
    pub fn parse(&self) -> Result<PostListParams, DomainError> {
        Ok(PostListParams {
            page: parse_param("page", self.page.as_deref(), "a valid number")?,
            page_size: parse_param("page_size", self.page_size.as_deref(), "a valid number")?,
            category: parse_param("category", self.category.as_deref(), "a valid id")?,
            tag: parse_param("tag", self.tag.as_deref(), "a valid id")?,
            created_after: parse_param(
                "created_after",
                self.created_after.as_deref(),
                "a valid date (YYYY-MM-DD)",
            )?,
            created_before: parse_param(
                "created_before",
                self.created_before.as_deref(),
                "a valid date (YYYY-MM-DD)",
            )?,
        })
    }
}

/// Raw query parameters accepted by the nested comment listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentListQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Parsed comment listing parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentListParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl CommentListQuery {
    pub fn parse(&self) -> Result<CommentListParams, DomainError> {
        Ok(CommentListParams {
            limit: parse_param("limit", self.limit.as_deref(), "a valid number")?,
            offset: parse_param("offset", self.offset.as_deref(), "a valid number")?,
        })
    }
}

fn parse_param<T: FromStr>(
    field: &'static str,
    value: Option<&str>,
    expected: &str,
) -> Result<Option<T>, DomainError> {
    value
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| DomainError::validation(field, format!("`{raw}` is not {expected}")))
        })
        .transpose()
}

/// Request to create a comment under a post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Target post id.
    pub post: i64,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(url(message = "must be a valid url"))]
    pub url: Option<String>,
    #[validate(length(min = 1, max = 3000, message = "must be between 1 and 3000 characters"))]
    pub content: String,
}

impl CreateCommentRequest {
    pub fn into_new_comment(self) -> NewComment {
        NewComment {
            post_id: self.post,
            name: self.name,
            email: self.email,
            url: self.url,
            content: self.content,
        }
    }
}

/// Response containing a persisted comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post: i64,
    pub name: String,
    pub email: String,
    pub url: Option<String>,
    pub content: String,
    pub created_time: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post: comment.post_id,
            name: comment.name,
            email: comment.email,
            url: comment.url,
            content: comment.content,
            created_time: comment.created_time,
        }
    }
}
