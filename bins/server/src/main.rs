//! TallyBox API Server
//!
//! Main entry point for the TallyBox ledger service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tallybox_api::{AppState, create_router};
use tallybox_core::ledger::{self, LedgerStore};
use tallybox_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tallybox=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        version = ledger::VERSION,
        build = ledger::BUILD,
        "Starting TallyBox"
    );

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Prepare the data directory, refresh the version marker, restore the ledger
    let store =
        LedgerStore::initialize(&config.data_dir).context("Failed to initialize ledger")?;
    info!(
        data_dir = %config.data_dir.display(),
        total = store.total(),
        records = store.history().len(),
        "Ledger loaded"
    );

    // Create application state and router
    let state = AppState::new(store, config.tokens.clone());
    let app = create_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
