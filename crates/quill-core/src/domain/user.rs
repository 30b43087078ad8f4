use serde::{Deserialize, Serialize};

/// User entity - post authors. Read-only from this API's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}
