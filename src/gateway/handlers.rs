pub mod health;
pub mod transaction;

pub use health::health_check;
pub use transaction::{
    create_transaction, get_transaction, list_transactions, update_transaction,
};
