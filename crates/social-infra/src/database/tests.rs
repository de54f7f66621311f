#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostStore;
    use crate::database::row_mapper::map_rows;
    use chrono::{FixedOffset, TimeZone};
    use std::sync::Arc;
    use sea_orm::{
        ConnectionTrait, DatabaseBackend, MockDatabase, MockExecResult, Statement,
    };
    use social_core::RepoError;
    use social_core::domain::LikeDelta;
    use social_core::ports::PostStore;

    fn model(id: i64, content: &str, likes: i64, removed: bool) -> post::Model {
        let created = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap();
        post::Model {
            id,
            content: content.to_owned(),
            likes,
            removed,
            created,
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_map_rows_keeps_row_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model(3, "third", 0, false),
                model(1, "first", 2, false),
            ]])
            .into_connection();

        let rows = db
            .query_all(Statement::from_string(
                DatabaseBackend::Postgres,
                "SELECT id, content, likes, removed, created FROM posts",
            ))
            .await
            .unwrap();
        let posts = map_rows(&rows).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 3);
        assert_eq!(posts[1].content, "first");
        assert_eq!(posts[1].likes, 2);
        assert_eq!(posts[0].created.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[tokio::test]
    async fn test_list_active_posts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model(2, "newer", 0, false),
                model(1, "older", 5, false),
            ]])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();
        let posts = session.list_active().await.unwrap();
        session.close().await.unwrap();

        assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_get_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();

        assert!(matches!(
            session.get_active_by_id(10).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_content_without_match_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0)])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();

        assert!(matches!(
            session.update_content(4, "new").await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_like_rereads_updated_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1)])
            .append_query_results(vec![vec![model(5, "liked", 3, false)]])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();
        let post = session.adjust_likes(5, LikeDelta::Like).await.unwrap();

        assert_eq!(post.id, 5);
        assert_eq!(post.likes, 3);
    }

    #[tokio::test]
    async fn test_delete_of_removed_post_conflicts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(6, "gone", 0, true)]])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();

        assert!(matches!(
            session.set_removed(6, true).await,
            Err(RepoError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_returns_previous_row_flagged_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(7, "bye", 1, false)]])
            .append_exec_results(vec![exec(1)])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();
        let post = session.set_removed(7, true).await.unwrap();

        assert!(post.removed);
        assert_eq!(post.likes, 1);
        assert_eq!(post.content, "bye");
    }

    #[tokio::test]
    async fn test_create_rereads_by_generated_id() {
        // Insert returns the generated key; the second result is the re-read.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![model(9, "fresh", 0, false)],
                vec![model(9, "fresh", 0, false)],
            ])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();
        let post = session.create("fresh").await.unwrap();

        assert_eq!(post.id, 9);
        assert_eq!(post.content, "fresh");
        assert_eq!(post.likes, 0);
        assert!(!post.removed);
    }

    #[tokio::test]
    async fn test_restore_clears_removed_flag() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(4, "back", 2, true)]])
            .append_exec_results(vec![exec(1)])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();
        let post = session.set_removed(4, false).await.unwrap();

        assert!(!post.removed);
        assert_eq!(post.likes, 2);
    }

    #[tokio::test]
    async fn test_restore_of_active_post_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(4, "here", 0, false)]])
            .append_exec_results(vec![exec(1)])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();

        assert!(!session.set_removed(4, false).await.unwrap().removed);
    }

    #[tokio::test]
    async fn test_restore_of_unknown_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();

        assert!(matches!(
            session.set_removed(40, false).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_dislike_goes_negative() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1)])
            .append_query_results(vec![vec![model(5, "meh", -1, false)]])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();
        let post = session.adjust_likes(5, LikeDelta::Dislike).await.unwrap();

        assert_eq!(post.likes, -1);
    }

    #[tokio::test]
    async fn test_dislike_without_match_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0)])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let session = store.session().await.unwrap();

        assert!(matches!(
            session.adjust_likes(5, LikeDelta::Dislike).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_statements_autocommit_without_transaction() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![exec(1)])
                .append_query_results(vec![vec![model(5, "liked", 1, false)]])
                .into_connection(),
        );

        let store = PostgresPostStore::new(Arc::clone(&db));
        let session = store.session().await.unwrap();
        session.adjust_likes(5, LikeDelta::Like).await.unwrap();
        session.close().await.unwrap();
        drop(store);

        // One log entry per statement: nothing was grouped into a transaction
        // waiting for a commit.
        let db = Arc::try_unwrap(db).unwrap();
        assert_eq!(db.into_transaction_log().len(), 2);
    }
}
