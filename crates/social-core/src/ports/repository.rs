use async_trait::async_trait;

use crate::domain::{LikeDelta, Post};
use crate::error::RepoError;

/// Source of storage sessions.
///
/// One session is opened per request and closed when the request ends,
/// whatever its outcome.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Open a dedicated session against the store.
    async fn session(&self) -> Result<Box<dyn PostSession>, RepoError>;
}

/// Data access for the `posts` table within one session.
#[async_trait]
pub trait PostSession: Send + Sync {
    /// All active posts, newest id first.
    async fn list_active(&self) -> Result<Vec<Post>, RepoError>;

    /// A single active post.
    async fn get_active_by_id(&self, id: i64) -> Result<Post, RepoError>;

    /// Insert a new post and return it as stored.
    async fn create(&self, content: &str) -> Result<Post, RepoError>;

    /// Replace the content of an active post.
    async fn update_content(&self, id: i64, content: &str) -> Result<Post, RepoError>;

    /// Set the `removed` flag.
    ///
    /// Removing fails with `NotFound` for an unknown id and `Conflict` for a
    /// post that is already removed. Restoring any existing post succeeds.
    async fn set_removed(&self, id: i64, removed: bool) -> Result<Post, RepoError>;

    /// Add one like to, or take one like from, an active post.
    async fn adjust_likes(&self, id: i64, delta: LikeDelta) -> Result<Post, RepoError>;

    /// Release the session. Writes are already durable when their
    /// operation returns; errors here never affect a response.
    async fn close(self: Box<Self>) -> Result<(), RepoError>;
}
