//! In-memory post store - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use social_core::domain::{LikeDelta, Post};
use social_core::error::RepoError;
use social_core::ports::{PostSession, PostStore};

#[derive(Default)]
struct PostTable {
    rows: BTreeMap<i64, Post>,
    last_id: i64,
}

/// In-memory post store with store-assigned, never reused ids.
///
/// Note: Data is lost on process restart.
#[derive(Clone, Default)]
pub struct InMemoryPostStore {
    table: Arc<RwLock<PostTable>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn session(&self) -> Result<Box<dyn PostSession>, RepoError> {
        Ok(Box::new(InMemoryPostSession {
            table: Arc::clone(&self.table),
        }))
    }
}

struct InMemoryPostSession {
    table: Arc<RwLock<PostTable>>,
}

impl InMemoryPostSession {
    async fn with_active<F>(&self, id: i64, update: F) -> Result<Post, RepoError>
    where
        F: FnOnce(&mut Post) + Send,
    {
        let mut table = self.table.write().await;
        let post = table
            .rows
            .get_mut(&id)
            .filter(|post| post.is_active())
            .ok_or(RepoError::NotFound)?;

        update(post);
        Ok(post.clone())
    }
}

#[async_trait]
impl PostSession for InMemoryPostSession {
    async fn list_active(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .rev()
            .filter(|post| post.is_active())
            .cloned()
            .collect())
    }

    async fn get_active_by_id(&self, id: i64) -> Result<Post, RepoError> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .filter(|post| post.is_active())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn create(&self, content: &str) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let post = Post {
            id: table.last_id,
            content: content.to_owned(),
            likes: 0,
            removed: false,
            created: Utc::now(),
        };
        table.rows.insert(post.id, post.clone());

        Ok(post)
    }

    async fn update_content(&self, id: i64, content: &str) -> Result<Post, RepoError> {
        self.with_active(id, |post| post.content = content.to_owned())
            .await
    }

    async fn set_removed(&self, id: i64, removed: bool) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let post = table.rows.get_mut(&id).ok_or(RepoError::NotFound)?;

        if removed && post.removed {
            return Err(RepoError::Conflict(format!("post {id} is already removed")));
        }

        post.removed = removed;
        Ok(post.clone())
    }

    async fn adjust_likes(&self, id: i64, delta: LikeDelta) -> Result<Post, RepoError> {
        self.with_active(id, |post| post.likes = delta.apply(post.likes))
            .await
    }

    async fn close(self: Box<Self>) -> Result<(), RepoError> {
        Ok(())
    }
}
