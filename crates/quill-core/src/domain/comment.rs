use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - belongs to exactly one post. Create-only through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub url: Option<String>,
    pub content: String,
    pub created_time: DateTime<Utc>,
}

/// A comment awaiting persistence. Id and timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub url: Option<String>,
    pub content: String,
}
