//! Integration tests for `SqliteTodoStore`.
//!
//! In-memory databases cover the CRUD contract; temporary files cover
//! opening, reopening and persistence.

#![allow(clippy::expect_used, clippy::unwrap_used)] // Test code uses expect for clear failure messages

use chrono::{Duration, Utc};
use todo_list_core::{StoreError, Title, TodoId, TodoStore};
use todo_list_sqlite::SqliteTodoStore;

async fn store() -> SqliteTodoStore {
    SqliteTodoStore::in_memory()
        .await
        .expect("Failed to open in-memory store")
}

fn title(s: &str) -> Title {
    Title::new(s).expect("non-empty title")
}

async fn titles(store: &SqliteTodoStore) -> Vec<String> {
    store
        .list()
        .await
        .expect("list")
        .iter()
        .map(|t| t.title().to_string())
        .collect()
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let store = store().await;
    assert!(store.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_create_then_list() {
    let store = store().await;
    let before = Utc::now() - Duration::seconds(2);

    store.create(&title("Buy groceries")).await.expect("create");

    let todos = store.list().await.expect("list");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title(), "Buy groceries");
    assert!(!todos[0].completed());
    assert_eq!(todos[0].id(), TodoId::new(1));
    assert!(todos[0].created_at() >= before);
    assert!(todos[0].created_at() <= Utc::now() + Duration::seconds(2));
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let store = store().await;
    for t in ["First", "Second", "Third"] {
        store.create(&title(t)).await.expect("create");
    }

    let todos = store.list().await.expect("list");
    let ids: Vec<i64> = todos.iter().map(|t| t.id().get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(titles(&store).await, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_toggle_twice_restores_completed() {
    let store = store().await;
    store.create(&title("Flip me")).await.expect("create");
    let id = TodoId::new(1);

    store.toggle(id).await.expect("toggle");
    assert!(store.list().await.expect("list")[0].completed());

    store.toggle(id).await.expect("toggle");
    assert!(!store.list().await.expect("list")[0].completed());
}

#[tokio::test]
async fn test_toggle_only_touches_target_row() {
    let store = store().await;
    store.create(&title("a")).await.expect("create");
    store.create(&title("b")).await.expect("create");

    store.toggle(TodoId::new(2)).await.expect("toggle");

    let todos = store.list().await.expect("list");
    assert!(!todos[0].completed());
    assert!(todos[1].completed());
}

#[tokio::test]
async fn test_toggle_unknown_id_is_noop() {
    let store = store().await;
    store.create(&title("untouched")).await.expect("create");

    store.toggle(TodoId::new(999)).await.expect("toggle unknown");

    let todos = store.list().await.expect("list");
    assert_eq!(todos.len(), 1);
    assert!(!todos[0].completed());
}

#[tokio::test]
async fn test_delete_removes_exactly_one_row() {
    let store = store().await;
    for t in ["First", "Second", "Third"] {
        store.create(&title(t)).await.expect("create");
    }

    store.delete(TodoId::new(2)).await.expect("delete");

    assert_eq!(titles(&store).await, vec!["First", "Third"]);
}

#[tokio::test]
async fn test_delete_unknown_id_is_noop() {
    let store = store().await;
    store.create(&title("keep")).await.expect("create");

    store.delete(TodoId::new(42)).await.expect("delete unknown");

    assert_eq!(store.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let store = store().await;
    store.create(&title("one")).await.expect("create");
    store.create(&title("two")).await.expect("create");
    store.delete(TodoId::new(2)).await.expect("delete");

    store.create(&title("three")).await.expect("create");

    let ids: Vec<i64> = store
        .list()
        .await
        .expect("list")
        .iter()
        .map(|t| t.id().get())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_title_longer_than_column_is_rejected() {
    let store = store().await;

    let at_limit = "x".repeat(500);
    store.create(&title(&at_limit)).await.expect("500 chars fit");

    let too_long = "x".repeat(501);
    let err = store.create(&title(&too_long)).await.expect_err("501 chars");
    assert!(matches!(err, StoreError::Write(_)));

    assert_eq!(store.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_title_limit_counts_characters_not_bytes() {
    let store = store().await;
    let wide = "é".repeat(500);

    store.create(&title(&wide)).await.expect("500 two-byte chars fit");

    assert_eq!(titles(&store).await, vec![wide]);
}

#[tokio::test]
async fn test_title_is_stored_verbatim() {
    let store = store().await;
    let raw = "<script>alert('x')</script> & \"quotes\"";

    store.create(&title(raw)).await.expect("create");

    assert_eq!(titles(&store).await, vec![raw]);
}

#[tokio::test]
async fn test_initialize_file_is_idempotent_and_persistent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("todos.db");

    let store = SqliteTodoStore::initialize(&path).await.expect("first open");
    store.create(&title("survives reopen")).await.expect("create");
    store.toggle(TodoId::new(1)).await.expect("toggle");
    store.close().await;

    let reopened = SqliteTodoStore::initialize(&path).await.expect("second open");
    let todos = reopened.list().await.expect("list");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title(), "survives reopen");
    assert!(todos[0].completed());
    reopened.close().await;
}

#[tokio::test]
async fn test_initialize_in_missing_directory_fails_to_open() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist").join("todos.db");

    let err = SqliteTodoStore::initialize(&path)
        .await
        .expect_err("missing parent directory");

    assert!(matches!(err, StoreError::Open(_)), "got {err:?}");
}

#[tokio::test]
async fn test_from_pool_reuses_existing_schema() {
    let store = store().await;
    store.create(&title("kept")).await.expect("create");

    let wrapped = SqliteTodoStore::from_pool(store.pool().clone())
        .await
        .expect("schema already present");

    assert_eq!(titles(&wrapped).await, vec!["kept"]);
}
