//! HTTP gateway: routing and server lifecycle

pub mod handlers;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::transaction::TransactionStore;
use state::AppState;

/// Build the transaction API router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/transactions",
            post(handlers::create_transaction).get(handlers::list_transactions),
        )
        .route(
            "/transactions/{id}",
            get(handlers::get_transaction).put(handlers::update_transaction),
        )
        .with_state(state)
}

/// Start the HTTP gateway and serve until the listener fails.
///
/// The store is released when serving ends.
pub async fn run_server(
    host: &str,
    port: u16,
    store: Arc<dyn TransactionStore>,
) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(store.clone()));
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Gateway listening on {}", addr);

    let result = axum::serve(listener, app).await;
    store.close().await;
    result
}
