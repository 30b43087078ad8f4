#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use chrono::{NaiveDate, TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use quill_core::pagination::{LimitOffset, PageRequest};
    use quill_core::ports::{CommentRepository, PostFilter, PostRepository};

    use crate::database::entity::{category, comment, post, tag, user};
    use crate::database::postgres_repo::{PostgresCommentRepository, PostgresPostRepository};

    fn post_model(id: i64) -> post::Model {
        post::Model {
            id,
            title: "Test Post".to_owned(),
            body: "# Heading\n\nbody".to_owned(),
            created_time: Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap().into(),
            modified_time: Utc.with_ymd_and_hms(2024, 3, 6, 8, 0, 0).unwrap().into(),
            excerpt: "short".to_owned(),
            views: 3,
            category_id: 7,
            author_id: 9,
        }
    }

    fn category_model() -> category::Model {
        category::Model {
            id: 7,
            name: "rust".to_owned(),
        }
    }

    fn user_model() -> user::Model {
        user::Model {
            id: 9,
            username: "alice".to_owned(),
        }
    }

    fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
        let mut row = BTreeMap::new();
        row.insert("num_items", Value::BigInt(Some(count)));
        row
    }

    #[tokio::test]
    async fn find_post_by_id_assembles_relations() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(1)]])
            .append_query_results(vec![vec![category_model()]])
            .append_query_results(vec![vec![user_model()]])
            .append_query_results(vec![vec![tag::Model {
                id: 4,
                name: "web".to_owned(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let found = repo.find_by_id(1).await.unwrap().unwrap();

        assert_eq!(found.id, 1);
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.category.name, "rust");
        assert_eq!(found.author.username, "alice");
        assert_eq!(found.tags.len(), 1);
        assert_eq!(found.tags[0].name, "web");
    }

    #[tokio::test]
    async fn find_missing_post_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_posts_returns_page_and_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(12)]])
            .append_query_results(vec![vec![post_model(1), post_model(2)]])
            .append_query_results(vec![vec![category_model()]])
            .append_query_results(vec![vec![user_model()]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let page = PageRequest::from_params(Some(1), Some(2)).unwrap();
        let listed = repo.list(&PostFilter::default(), &page).await.unwrap();

        assert_eq!(listed.total, 12);
        assert_eq!(listed.items.len(), 2);
        // Listings embed category and author but never load tags.
        assert_eq!(listed.items[0].category.name, "rust");
        assert_eq!(listed.items[0].author.username, "alice");
        assert!(listed.items[0].tags.is_empty());
    }

    #[tokio::test]
    async fn list_comments_scoped_to_post() {
        let created = Utc.with_ymd_and_hms(2024, 3, 7, 8, 0, 0).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .append_query_results(vec![vec![comment::Model {
                id: 5,
                post_id: 1,
                name: "bob".to_owned(),
                email: "bob@example.com".to_owned(),
                url: None,
                content: "nice".to_owned(),
                created_time: created.into(),
            }]])
            .into_connection();

        let repo = PostgresCommentRepository::new(Arc::new(db));
        let window = LimitOffset::from_params(None, None).unwrap();
        let page = repo.list_for_post(1, &window).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].post_id, 1);
        assert_eq!(page.items[0].created_time, created);
    }

    #[tokio::test]
    async fn create_comment_returns_persisted_row() {
        let created = Utc.with_ymd_and_hms(2024, 3, 7, 8, 0, 0).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![comment::Model {
                id: 42,
                post_id: 1,
                name: "bob".to_owned(),
                email: "bob@example.com".to_owned(),
                url: Some("https://example.com".to_owned()),
                content: "nice".to_owned(),
                created_time: created.into(),
            }]])
            .into_connection();

        let repo = PostgresCommentRepository::new(Arc::new(db));
        let saved = repo
            .create(quill_core::domain::NewComment {
                post_id: 1,
                name: "bob".to_owned(),
                email: "bob@example.com".to_owned(),
                url: Some("https://example.com".to_owned()),
                content: "nice".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(saved.id, 42);
        assert_eq!(saved.post_id, 1);
    }

    #[tokio::test]
    async fn list_with_tag_filter_joins_tag_table() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![count_row(0)]])
                .append_query_results(vec![Vec::<post::Model>::new()])
                .into_connection(),
        );

        let repo = PostgresPostRepository::new(db.clone());
        let filter = PostFilter {
            tag: Some(4),
            ..PostFilter::default()
        };
        let page = PageRequest::from_params(None, None).unwrap();
        let listed = repo.list(&filter, &page).await.unwrap();
        assert_eq!(listed.total, 0);

        drop(repo);
        let Ok(conn) = Arc::try_unwrap(db) else {
            panic!("connection still shared");
        };
        let sql = format!("{:?}", conn.into_transaction_log());
        assert!(sql.contains(r#"INNER JOIN "post_tags""#), "log: {sql}");
        assert!(sql.contains(r#""tag_id""#), "log: {sql}");
    }

    #[tokio::test]
    async fn list_created_before_bound_is_exclusive_next_day() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![count_row(0)]])
                .append_query_results(vec![Vec::<post::Model>::new()])
                .into_connection(),
        );

        let repo = PostgresPostRepository::new(db.clone());
        let filter = PostFilter {
            created_before: NaiveDate::from_ymd_opt(2024, 3, 15),
            ..PostFilter::default()
        };
        let page = PageRequest::from_params(None, None).unwrap();
        repo.list(&filter, &page).await.unwrap();

        drop(repo);
        let Ok(conn) = Arc::try_unwrap(db) else {
            panic!("connection still shared");
        };
        let sql = format!("{:?}", conn.into_transaction_log());
        // A created_before of 2024-03-15 covers the whole of that day.
        assert!(sql.contains("2024-03-16"), "log: {sql}");
    }

    #[tokio::test]
    async fn created_months_reads_aggregated_rows() {
        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let november = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        let month_row = |d: NaiveDate| {
            let mut row = BTreeMap::new();
            row.insert("month", Value::ChronoDate(Some(Box::new(d))));
            row
        };
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![month_row(march), month_row(november)]])
                .into_connection(),
        );

        let repo = PostgresPostRepository::new(db.clone());
        let months = repo.created_months().await.unwrap();
        assert_eq!(months, vec![march, november]);

        drop(repo);
        let Ok(conn) = Arc::try_unwrap(db) else {
            panic!("connection still shared");
        };
        let sql = format!("{:?}", conn.into_transaction_log());
        assert!(sql.contains("DATE_TRUNC"), "log: {sql}");
        assert!(sql.contains("DISTINCT"), "log: {sql}");
    }
}
