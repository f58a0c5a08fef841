//! Transfer Gateway entry point
//!
//! Bootstrap order: args -> config -> logging -> database -> HTTP gateway.
//! The gateway itself only sees an already-constructed store handle.

use std::sync::Arc;

use transfer_gateway::config::AppConfig;
use transfer_gateway::db::Database;
use transfer_gateway::gateway;
use transfer_gateway::logging;
use transfer_gateway::transaction::{PgTransactionStore, TransactionStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = logging::init_logging(&config);

    tracing::info!(
        "transfer_gateway {} ({}) starting, env={}",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env
    );

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| config.database.url.clone());
    let db = Database::connect(&database_url, &config.database).await?;
    db.ensure_schema().await?;

    let store: Arc<dyn TransactionStore> = Arc::new(PgTransactionStore::new(db.pool().clone()));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, store).await?;

    Ok(())
}
