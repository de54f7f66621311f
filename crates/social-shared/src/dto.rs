//! Data Transfer Objects - response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use social_core::domain::Post;

/// Public JSON shape of a post.
///
/// `removed` is only present on delete and restore responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub content: String,
    pub likes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
    pub created: DateTime<Utc>,
}

impl PostResponse {
    /// Response body including the `removed` flag.
    pub fn with_removed(post: Post) -> Self {
        let removed = post.removed;
        Self {
            removed: Some(removed),
            ..Self::from(post)
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            content: post.content,
            likes: post.likes,
            removed: None,
            created: post.created,
        }
    }
}
