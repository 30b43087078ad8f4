use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Tag, User};

/// Post entity - a blog article, assembled with its category and author.
///
/// `tags` is populated only when a repository loads the full aggregate
/// (single-post retrieval); listings leave it empty because the summary
/// representation never exposes tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    /// Raw markdown source. Rendered html is derived at read time, never stored.
    pub body: String,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
    pub excerpt: String,
    /// Monotonic view counter, incremented by the authoring path (out of scope here).
    pub views: i64,
    pub category: Category,
    pub author: User,
    pub tags: Vec<Tag>,
}
