use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use posts_api::auth::JwtAuthenticator;
use posts_api::database::{DatabaseManager, MemoryPostStore, PgPostStore, PostStore};
use posts_api::{config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config();
    tracing::info!("Starting posts API in {:?} mode", config.environment);

    let auth = JwtAuthenticator::new(&config.security.jwt_secret, config.security.jwt_expiry_hours)
        .context("JWT_SECRET must be set")?;

    let store: Arc<dyn PostStore> = match config.database.url {
        Some(_) => {
            let pool = DatabaseManager::connect(&config.database).await?;
            if config.database.run_migrations {
                DatabaseManager::migrate(&pool).await?;
            }
            Arc::new(PgPostStore::new(pool))
        }
        None => {
            if posts_api::is_production!() {
                anyhow::bail!("DATABASE_URL must be set in production");
            }
            tracing::warn!("DATABASE_URL not set; posts are kept in memory and lost on restart");
            Arc::new(MemoryPostStore::new())
        }
    };

    let app = posts_api::app(AppState::new(store, Arc::new(auth)), config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Posts API listening on http://{}{}", bind_addr, config.api.prefix);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down gracefully..."),
    }
}
