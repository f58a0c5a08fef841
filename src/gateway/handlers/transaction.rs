//! Transfer record handlers: create, get, list, update status

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{
    ApiError, ListQuery, TransactionPage, UpdateStatusRequest, decode_json,
};
use crate::transaction::{NewTransaction, Transaction, TransactionStatus, validate_transaction};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;

/// POST /transactions
///
/// Decode -> validate -> assign server-controlled fields -> persist.
/// Validation reports every violated rule in one message.
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let req: NewTransaction = decode_json(&body)?;

    validate_transaction(&req).map_err(|e| {
        tracing::warn!("Rejected transaction: {}", e);
        ApiError::bad_request(e.to_string())
    })?;

    // id, status and created_at are server-assigned regardless of the payload
    let record = Transaction {
        id: Uuid::new_v4().to_string(),
        amount: req.amount,
        currency: req.currency,
        sender: req.sender,
        receiver: req.receiver,
        status: TransactionStatus::Pending,
        created_at: Utc::now(),
    };

    state.store.create(&record).await.map_err(|e| {
        tracing::error!("Failed to create transaction: {}", e);
        ApiError::internal("error creating transaction")
    })?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /transactions/{id}
///
/// A miss is a 200 with a null body, not an error.
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Transaction>>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::bad_request("missing transaction id"));
    }

    let transaction = state.store.get(&id).await.map_err(|e| {
        tracing::error!("Failed to get transaction {}: {}", id, e);
        ApiError::internal("error getting transaction")
    })?;

    Ok(Json(transaction))
}

/// GET /transactions?page=&page_size=
///
/// Missing, non-numeric or non-positive parameters silently fall back to
/// page=1, page_size=10. The response `page_size` is the returned row count.
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<TransactionPage>, ApiError> {
    let page = parse_page_param(query.page, DEFAULT_PAGE);
    let page_size = parse_page_param(query.page_size, DEFAULT_PAGE_SIZE);
    let offset = (page - 1).saturating_mul(page_size);

    let transactions = state.store.list(page_size, offset).await.map_err(|e| {
        tracing::error!("Failed to list transactions: {}", e);
        ApiError::internal("error getting transactions")
    })?;

    Ok(Json(TransactionPage {
        page,
        page_size: transactions.len(),
        transactions,
    }))
}

/// PUT /transactions/{id}
///
/// Accepts only `completed` or `failed` as the target status; `pending` is
/// rejected. No current-status precondition and no signal on a missing id.
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::bad_request("missing transaction id"));
    }

    let req: UpdateStatusRequest = decode_json(&body)?;

    if req.status == TransactionStatus::Pending {
        tracing::warn!("Rejected status update to '{}' for {}", req.status, id);
        return Err(ApiError::bad_request("invalid request body"));
    }

    state.store.update_status(&id, req.status).await.map_err(|e| {
        tracing::error!("Failed to update transaction {}: {}", id, e);
        ApiError::internal("error updating transaction")
    })?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_page_param(raw: Option<String>, default: i64) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}
