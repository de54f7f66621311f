//! PostgreSQL post store.
//!
//! Sessions run in autocommit on the shared pool: every statement is
//! persisted as soon as it returns. Mutations are single guarded `UPDATE`
//! statements, so the id + removed-state check and the write happen in one
//! round-trip.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Select,
};

use social_core::domain::{LikeDelta, Post};
use social_core::error::RepoError;
use social_core::ports::{PostSession, PostStore};

use super::entity::post::{self, Entity as PostEntity};
use super::row_mapper::{POST_COLUMNS, map_rows};

fn query_error(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

/// PostgreSQL post store backed by a connection pool.
pub struct PostgresPostStore {
    db: Arc<DbConn>,
}

impl PostgresPostStore {
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn session(&self) -> Result<Box<dyn PostSession>, RepoError> {
        Ok(Box::new(PostgresPostSession {
            db: Arc::clone(&self.db),
        }))
    }
}

/// One request's view of the `posts` table.
pub struct PostgresPostSession {
    db: Arc<DbConn>,
}

impl PostgresPostSession {
    fn by_id(id: i64) -> Select<PostEntity> {
        PostEntity::find().filter(post::Column::Id.eq(id))
    }

    fn active_by_id(id: i64) -> Select<PostEntity> {
        Self::by_id(id).filter(post::Column::Removed.eq(false))
    }

    async fn fetch(&self, select: Select<PostEntity>) -> Result<Vec<Post>, RepoError> {
        let stmt = select
            .select_only()
            .columns(POST_COLUMNS)
            .build(self.db.get_database_backend());
        let rows = self.db.query_all(stmt).await.map_err(query_error)?;

        map_rows(&rows).map_err(query_error)
    }

    async fn fetch_one(&self, select: Select<PostEntity>) -> Result<Option<Post>, RepoError> {
        Ok(self.fetch(select.limit(1)).await?.into_iter().next())
    }
}

#[async_trait]
impl PostSession for PostgresPostSession {
    async fn list_active(&self) -> Result<Vec<Post>, RepoError> {
        let select = PostEntity::find()
            .filter(post::Column::Removed.eq(false))
            .order_by_desc(post::Column::Id);

        self.fetch(select).await
    }

    async fn get_active_by_id(&self, id: i64) -> Result<Post, RepoError> {
        self.fetch_one(Self::active_by_id(id))
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn create(&self, content: &str) -> Result<Post, RepoError> {
        let model = post::ActiveModel {
            content: Set(content.to_owned()),
            ..Default::default()
        };
        let inserted = PostEntity::insert(model)
            .exec(self.db.as_ref())
            .await
            .map_err(query_error)?;
        tracing::debug!(post_id = inserted.last_insert_id, "Post inserted");

        self.fetch_one(Self::by_id(inserted.last_insert_id))
            .await?
            .ok_or_else(|| RepoError::Query("inserted post could not be read back".to_string()))
    }

    async fn update_content(&self, id: i64, content: &str) -> Result<Post, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Content, Expr::value(content.to_owned()))
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(false))
            .exec(self.db.as_ref())
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        self.get_active_by_id(id).await
    }

    async fn set_removed(&self, id: i64, removed: bool) -> Result<Post, RepoError> {
        let current = self
            .fetch_one(Self::by_id(id))
            .await?
            .ok_or(RepoError::NotFound)?;

        if removed && current.removed {
            return Err(RepoError::Conflict(format!("post {id} is already removed")));
        }

        let mut update = PostEntity::update_many()
            .col_expr(post::Column::Removed, Expr::value(removed))
            .filter(post::Column::Id.eq(id));
        if removed {
            update = update.filter(post::Column::Removed.eq(false));
        }
        let result = update.exec(self.db.as_ref()).await.map_err(query_error)?;

        if result.rows_affected == 0 {
            // Lost a race with a concurrent delete.
            return Err(RepoError::Conflict(format!("post {id} is already removed")));
        }

        Ok(current.with_removed(removed))
    }

    async fn adjust_likes(&self, id: i64, delta: LikeDelta) -> Result<Post, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(
                post::Column::Likes,
                Expr::col(post::Column::Likes).add(delta.amount()),
            )
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(false))
            .exec(self.db.as_ref())
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        self.fetch_one(Self::by_id(id))
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn close(self: Box<Self>) -> Result<(), RepoError> {
        // Pooled connections go back to the pool on their own.
        Ok(())
    }
}
