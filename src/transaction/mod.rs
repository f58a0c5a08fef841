//! Transfer record domain: entity, validation, persistence

pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types
pub use models::{NewTransaction, Transaction, TransactionStatus};
pub use repository::{MemoryTransactionStore, PgTransactionStore, StoreError, TransactionStore};
pub use validation::{SUPPORTED_CURRENCIES, ValidationError, validate_transaction};
