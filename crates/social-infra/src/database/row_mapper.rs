//! Row mapping - storage rows to typed post records by column label.

use sea_orm::{DbErr, FromQueryResult, QueryResult, prelude::DateTimeWithTimeZone};

use social_core::domain::Post;

use super::entity::post::Column;

/// Columns projected by every post query, in select order.
pub const POST_COLUMNS: [Column; 5] = [
    Column::Id,
    Column::Content,
    Column::Likes,
    Column::Removed,
    Column::Created,
];

/// A `posts` row read by column label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    pub id: i64,
    pub content: String,
    pub likes: i64,
    pub removed: bool,
    pub created: DateTimeWithTimeZone,
}

impl FromQueryResult for PostRow {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            id: res.try_get(pre, "id")?,
            content: res.try_get(pre, "content")?,
            likes: res.try_get(pre, "likes")?,
            removed: res.try_get(pre, "removed")?,
            created: res.try_get(pre, "created")?,
        })
    }
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            likes: row.likes,
            removed: row.removed,
            created: row.created.into(),
        }
    }
}

/// Convert result rows into posts, keeping row order.
pub fn map_rows(rows: &[QueryResult]) -> Result<Vec<Post>, DbErr> {
    rows.iter()
        .map(|row| PostRow::from_query_result(row, "").map(Post::from))
        .collect()
}
