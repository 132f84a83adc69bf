//! Farm Shop Ledger - Backend Server
//!
//! Records chicken delivery batches per dealer and serves the ledger,
//! dashboard stats, and optional AI summaries.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use farmshop_backend::{
    config::{Config, StorageBackend},
    create_app,
    external::GeminiClient,
    services::InsightService,
    store::{LedgerStore, MemoryLedgerStore, PgLedgerStore},
    AppState,
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    init_tracing(&config);

    tracing::info!("Starting Farm Shop Ledger Server");
    tracing::info!("Environment: {}", config.environment);

    let store = connect_store(&config).await?;

    let insights = if config.insights.is_enabled() {
        tracing::info!(model = %config.insights.model, "AI insights enabled");
        InsightService::new(Arc::new(GeminiClient::new(&config.insights)?))
    } else {
        tracing::info!("AI insights disabled (no API key)");
        InsightService::disabled()
    };

    // Create application state
    let state = AppState { store, insights };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server.host/server.port")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "farmshop_server=debug,farmshop_backend=debug,tower_http=debug,sqlx=warn".into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn LedgerStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Ok(Arc::new(MemoryLedgerStore::new()))
        }
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let db_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .acquire_timeout(Duration::from_secs(30))
                .connect(&config.database.url)
                .await?;

            tracing::info!("Database connection established");

            // Run migrations in development
            if config.is_development() {
                tracing::info!("Running database migrations...");
                sqlx::migrate!("./migrations").run(&db_pool).await?;
                tracing::info!("Migrations completed");
            }

            Ok(Arc::new(PgLedgerStore::new(db_pool)))
        }
    }
}
