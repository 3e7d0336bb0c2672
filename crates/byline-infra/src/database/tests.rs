use std::sync::Arc;

use byline_core::domain::{Author, AuthorChanges, Category, NewPost, Post};
use byline_core::error::{DomainError, RepoError};
use byline_core::ports::{AuthorNameLookup, BaseRepository, PostRepository, StoredRecord};
use byline_core::services::AuthorService;
use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use crate::database::entity::{author, post};
use crate::database::postgres_repo::{PostgresAuthorRepository, PostgresPostRepository};

fn post_model(id: Uuid, category: post::Category) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        title: "Top Secret Recipes".to_owned(),
        content: "c".repeat(250),
        summary: None,
        category,
        created_at: now.into(),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();

    // Mock the query expectation
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id, post::Category::NonFiction)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title(), "Top Secret Recipes");
    assert_eq!(post.id(), Some(post_id));
    assert_eq!(post.category(), Category::NonFiction);
    assert_eq!(post.updated_at(), None);
}

#[tokio::test]
async fn test_find_by_category() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model(Uuid::new_v4(), post::Category::Fiction),
            post_model(Uuid::new_v4(), post::Category::Fiction),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.find_by_category(Category::Fiction).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.category() == Category::Fiction));
}

#[tokio::test]
async fn test_find_author_id_by_name() {
    let author_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![author::Model {
            id: author_id,
            name: "Octavia".to_owned(),
            phone_number: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }]])
        .append_query_results(vec![Vec::<author::Model>::new()])
        .into_connection();

    let repo = PostgresAuthorRepository::new(db);

    assert_eq!(repo.find_id_by_name("Octavia").await.unwrap(), Some(author_id));
    assert_eq!(repo.find_id_by_name("Ursula").await.unwrap(), None);
}

#[tokio::test]
async fn test_insert_returns_committed_author() {
    let author_id = Uuid::new_v4();
    let created_at = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // Name lookup during validation finds nothing.
        .append_query_results(vec![Vec::<author::Model>::new()])
        // INSERT ... RETURNING
        .append_query_results(vec![vec![author::Model {
            id: author_id,
            name: "Octavia".to_owned(),
            phone_number: Some("5551234567".to_owned()),
            created_at: created_at.into(),
            updated_at: None,
        }]])
        .into_connection();

    let repo = PostgresAuthorRepository::new(db);
    let draft = byline_core::domain::NewAuthor {
        name: Some("Octavia".to_owned()),
        phone_number: Some("5551234567".to_owned()),
    };
    let author = Author::create(draft, &repo).await.unwrap();
    let saved = repo.save(author).await.unwrap();

    assert_eq!(saved.id(), Some(author_id));
    assert_eq!(saved.created_at(), Some(created_at));
    assert_eq!(saved.phone_number(), Some("5551234567"));
}

fn author_model(id: Uuid, phone_number: Option<&str>) -> author::Model {
    author::Model {
        id,
        name: "Octavia".to_owned(),
        phone_number: phone_number.map(str::to_owned),
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_update_stamps_updated_at() {
    let author_id = Uuid::new_v4();
    let stored = author_model(author_id, None);
    let updated_at = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // UPDATE ... RETURNING
        .append_query_results(vec![vec![author::Model {
            phone_number: Some("5551234567".to_owned()),
            updated_at: Some(updated_at.into()),
            ..stored.clone()
        }]])
        .into_connection();

    let repo = PostgresAuthorRepository::new(db);
    let mut author: Author = stored.into();
    author.set_phone_number(Some("5551234567".to_owned())).unwrap();

    // The row sent to storage carries the new stamp.
    let mut stamped = author.clone();
    StoredRecord::mark_updated(&mut stamped, updated_at);
    let active: author::ActiveModel = stamped.into();
    let expected: sea_orm::prelude::DateTimeWithTimeZone = updated_at.into();
    assert_eq!(active.updated_at, ActiveValue::Set(Some(expected)));

    let saved = repo.save(author).await.unwrap();
    assert_eq!(saved.id(), Some(author_id));
    assert_eq!(saved.phone_number(), Some("5551234567"));
    assert_eq!(saved.updated_at(), Some(updated_at));
}

#[tokio::test]
async fn test_update_of_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<author::Model>::new()])
        .into_connection();

    let repo = PostgresAuthorRepository::new(db);
    let ghost: Author = author_model(Uuid::new_v4(), None).into();

    assert!(matches!(repo.save(ghost).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_author_deleted_during_update_is_not_found() {
    let author_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // Fetch succeeds, then the row is gone when the UPDATE runs.
        .append_query_results(vec![vec![author_model(author_id, None)]])
        .append_query_results(vec![Vec::<author::Model>::new()])
        .into_connection();

    let authors = AuthorService::new(Arc::new(PostgresAuthorRepository::new(db)));
    let changes = AuthorChanges {
        name: None,
        phone_number: Some(Some("5551234567".to_owned())),
    };
    let err = authors.update(author_id, changes).await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::NotFound { entity_type: "Author", id } if id == author_id
    ));
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = repo.delete(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[test]
fn test_active_model_carries_stamped_fields() {
    let mut post = Post::create(NewPost {
        title: Some("Guess Again".to_owned()),
        content: Some("c".repeat(250)),
        summary: Some("short".to_owned()),
        category: Some("Fiction".to_owned()),
    })
    .unwrap();

    let draft_model: post::ActiveModel = post.clone().into();
    assert_eq!(draft_model.id, ActiveValue::NotSet);

    let id = Uuid::new_v4();
    StoredRecord::mark_created(&mut post, id, Utc::now());
    let stamped: post::ActiveModel = post.into();
    assert_eq!(stamped.id, ActiveValue::Set(id));
    assert_eq!(stamped.category, ActiveValue::Set(post::Category::Fiction));
    assert_eq!(stamped.summary, ActiveValue::Set(Some("short".to_owned())));
}
