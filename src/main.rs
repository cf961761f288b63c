use meditation_timer::{config::AppConfig, create_router, store};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meditation_timer=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting meditation timer server");

    let config = AppConfig::from_env()?;

    // The pool is opened once here and shared by every request
    let (app_state, pool) = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = store::connect(database_url, config.max_connections).await?;
            store::ensure_schema(&pool).await?;
            (store::postgres_state(pool.clone()), Some(pool))
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory store; data is lost on restart");
            (store::in_memory_state(), None)
        }
    };

    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server running on port {}", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
