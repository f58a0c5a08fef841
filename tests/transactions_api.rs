//! End-to-end flow through the public handler API over the in-memory store.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use transfer_gateway::gateway::handlers::{
    create_transaction, get_transaction, list_transactions, update_transaction,
};
use transfer_gateway::gateway::state::AppState;
use transfer_gateway::gateway::types::ListQuery;
use transfer_gateway::transaction::{MemoryTransactionStore, TransactionStatus};

fn fresh_state() -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(MemoryTransactionStore::new())))
}

fn body(json: &str) -> Bytes {
    Bytes::from(json.to_string())
}

#[tokio::test]
async fn full_lifecycle_create_get_update_get() {
    let state = fresh_state();

    // Create
    let (status, axum::Json(created)) = create_transaction(
        State(state.clone()),
        body(r#"{"amount": 250.00, "currency": "kes", "sender": "acct-7", "receiver": "acct-9"}"#),
    )
    .await
    .expect("create should succeed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.status, TransactionStatus::Pending);
    assert_eq!(created.currency, "kes");
    assert!(!created.id.is_empty());
    assert!(created.id.len() <= 64);

    // Get by the returned id: every client field matches, the timestamp is
    // the store-assigned one
    let axum::Json(fetched) = get_transaction(State(state.clone()), Path(created.id.clone()))
        .await
        .expect("get should succeed");
    let fetched = fetched.expect("record should exist");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.amount, created.amount);
    assert_eq!(fetched.sender, created.sender);
    assert_eq!(fetched.receiver, created.receiver);
    assert_eq!(fetched.status, TransactionStatus::Pending);
    assert!(fetched.created_at >= created.created_at);

    // Update to completed
    let status = update_transaction(
        State(state.clone()),
        Path(created.id.clone()),
        body(r#"{"status": "completed"}"#),
    )
    .await
    .expect("update should succeed");
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Only the status changed
    let axum::Json(after) = get_transaction(State(state.clone()), Path(created.id.clone()))
        .await
        .unwrap();
    let after = after.unwrap();
    assert_eq!(after.status, TransactionStatus::Completed);
    assert_eq!(after.amount, fetched.amount);
    assert_eq!(after.created_at, fetched.created_at);
}

#[tokio::test]
async fn list_pages_across_many_records() {
    let state = fresh_state();

    for i in 0..12 {
        create_transaction(
            State(state.clone()),
            body(&format!(
                r#"{{"amount": {}, "currency": "USD", "sender": "s-{}", "receiver": "r-{}"}}"#,
                (i + 1) * 10,
                i,
                i
            )),
        )
        .await
        .expect("create should succeed");
    }

    // Default paging: first 10 of 12
    let axum::Json(first) = list_transactions(State(state.clone()), Query(ListQuery::default()))
        .await
        .unwrap();
    assert_eq!(first.page, 1);
    assert_eq!(first.page_size, 10);

    // Second page: the remaining 2, with page_size reporting the actual count
    let query = ListQuery {
        page: Some("2".to_string()),
        page_size: Some("10".to_string()),
    };
    let axum::Json(second) = list_transactions(State(state.clone()), Query(query))
        .await
        .unwrap();
    assert_eq!(second.page, 2);
    assert_eq!(second.page_size, 2);

    // Pages do not overlap and ids ascend across the whole listing
    let mut ids: Vec<String> = first
        .transactions
        .iter()
        .chain(second.transactions.iter())
        .map(|t| t.id.clone())
        .collect();
    assert_eq!(ids.len(), 12);
    let sorted = {
        let mut s = ids.clone();
        s.sort();
        s
    };
    assert_eq!(ids, sorted);
    ids.dedup();
    assert_eq!(ids.len(), 12);
}

#[tokio::test]
async fn rejected_create_leaves_store_untouched() {
    let state = fresh_state();

    let err = create_transaction(
        State(state.clone()),
        body(r#"{"amount": 0, "currency": "USD", "sender": "a", "receiver": "a"}"#),
    )
    .await
    .expect_err("create should be rejected");
    assert_eq!(err.status, StatusCode::BAD_REQUEST);

    let axum::Json(page) = list_transactions(State(state), Query(ListQuery::default()))
        .await
        .unwrap();
    assert_eq!(page.page_size, 0);
    assert!(page.transactions.is_empty());
}

#[tokio::test]
async fn update_of_absent_record_acknowledges_without_creating() {
    let state = fresh_state();

    let status = update_transaction(
        State(state.clone()),
        Path("never-created".to_string()),
        body(r#"{"status": "failed"}"#),
    )
    .await
    .expect("no-op update should succeed");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let axum::Json(found) = get_transaction(State(state), Path("never-created".to_string()))
        .await
        .unwrap();
    assert!(found.is_none());
}
