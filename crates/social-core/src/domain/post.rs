use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a short piece of content with a like counter.
///
/// Posts are never physically deleted; `removed` hides them from the
/// active set instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub likes: i64,
    pub removed: bool,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Whether the post is visible to reads, edits and likes.
    pub fn is_active(&self) -> bool {
        !self.removed
    }

    /// Returns the post with its `removed` flag replaced.
    pub fn with_removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }
}

/// Single-step change applied to a post's like counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeDelta {
    Like,
    Dislike,
}

impl LikeDelta {
    pub fn amount(self) -> i64 {
        match self {
            LikeDelta::Like => 1,
            LikeDelta::Dislike => -1,
        }
    }

    /// Applies the delta. The counter has no floor and may go negative.
    pub fn apply(self, likes: i64) -> i64 {
        likes + self.amount()
    }
}
