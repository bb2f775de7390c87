//! Live-database integration tests for the sqlx bridge
//!
//! These tests need a running PostgreSQL instance and are ignored by
//! default. Run them with:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test --test pg_live_test -- --ignored
//! ```

use attrhaus::prelude::*;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

async fn setup_pool() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for live tests");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

async fn setup_table(pool: &PgPool) {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS attrhaus_live_test (
            id UUID PRIMARY KEY,
            email VARCHAR NOT NULL,
            attributes JSONB
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create table");
}

async fn cleanup(pool: &PgPool) {
    let _ = sqlx::query("DROP TABLE IF EXISTS attrhaus_live_test CASCADE")
        .execute(pool)
        .await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_mapping_round_trips_through_jsonb_column() {
    let pool = setup_pool().await;
    cleanup(&pool).await;
    setup_table(&pool).await;

    let id = Uuid::new_v4();
    let mut attributes = FieldMapping::new();
    attributes.insert("plan", json!("pro"));
    attributes.insert("trial", json!(true));
    attributes.insert("limits", json!({"seats": 5}));

    sqlx::query("INSERT INTO attrhaus_live_test (id, email, attributes) VALUES ($1, $2, $3)")
        .bind(id)
        .bind("carol@example.com")
        .bind(attributes.clone())
        .execute(&pool)
        .await
        .unwrap();

    let (fetched,): (FieldMapping,) =
        sqlx::query_as("SELECT attributes FROM attrhaus_live_test WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(fetched, attributes);

    cleanup(&pool).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_null_column_reads_as_empty_mapping() {
    let pool = setup_pool().await;
    cleanup(&pool).await;
    setup_table(&pool).await;

    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO attrhaus_live_test (id, email, attributes) VALUES ($1, $2, NULL)")
        .bind(id)
        .bind("dave@example.com")
        .execute(&pool)
        .await
        .unwrap();

    let (fetched,): (FieldMapping,) =
        sqlx::query_as("SELECT attributes FROM attrhaus_live_test WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(fetched.is_empty());

    cleanup(&pool).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_non_object_document_degrades_to_empty_mapping() {
    let pool = setup_pool().await;
    cleanup(&pool).await;
    setup_table(&pool).await;

    let id = Uuid::new_v4();
    // A JSONB column can legally hold a bare scalar; the mapping view of it
    // is empty rather than an error
    sqlx::query(
        "INSERT INTO attrhaus_live_test (id, email, attributes) VALUES ($1, $2, '42'::jsonb)",
    )
    .bind(id)
    .bind("erin@example.com")
    .execute(&pool)
    .await
    .unwrap();

    let (fetched,): (FieldMapping,) =
        sqlx::query_as("SELECT attributes FROM attrhaus_live_test WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(fetched.is_empty());

    cleanup(&pool).await;
}
