use serde::{Deserialize, Serialize};

/// Tag entity - posts and tags are many-to-many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
