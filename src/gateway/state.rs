use std::sync::Arc;

use crate::transaction::TransactionStore;

/// Shared gateway state
///
/// The store is injected at construction so handlers run against either the
/// Postgres implementation or the in-memory test double.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TransactionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }
}
