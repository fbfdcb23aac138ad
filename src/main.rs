//! Plant Tracker server: reads config from the environment, prepares the store, serves the API.

use plant_tracker::{
    app_router, ensure_database_exists, ensure_plants_table, telemetry, AppConfig, AppState,
    MemoryPlantStore, PgPlantStore, StoreBackend,
};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing(telemetry::DEFAULT_LOG_FILTER);

    let config = AppConfig::from_env()?;
    let state = match config.store_backend {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_plants_table(&pool).await?;
            tracing::info!(max_connections = config.db_max_connections, "connected to postgres");
            AppState::new(PgPlantStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; plants are lost on restart");
            AppState::new(MemoryPlantStore::new())
        }
    };

    let app = app_router(state, &config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server has shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
