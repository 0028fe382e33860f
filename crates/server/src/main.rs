use db::{DBService, DbConfig, DbErr};
use server::{AppState, config::ServerConfig, http};
use thiserror::Error;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Database(#[from] DbErr),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_string = format!(
        "warn,server={level},db={level},utils={level}",
        level = log_level
    );
    let env_filter = EnvFilter::try_new(filter_string).expect("Failed to create tracing filter");
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let db_config = DbConfig::from_env();
    let server_config = ServerConfig::from_env();

    let db = DBService::new(&db_config).await?;
    let state = AppState::new(db);

    let app_router = http::router(state.clone(), &server_config);

    let listener = tokio::net::TcpListener::bind(server_config.listen_addr()).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!("Server running on http://{actual_addr}");

    let shutdown_rx = spawn_shutdown_watcher();

    axum::serve(listener, app_router)
        .with_graceful_shutdown(wait_for_watch_true(shutdown_rx))
        .await?;

    state.db().pool.clone().close().await?;
    tracing::info!("Server stopped");

    Ok(())
}

fn spawn_shutdown_watcher() -> watch::Receiver<bool> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let mut sigint = match signal(SignalKind::interrupt()) {
                Ok(sig) => sig,
                Err(e) => {
                    tracing::error!("Failed to install SIGINT handler: {e}");
                    return;
                }
            };

            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(sig) => Some(sig),
                Err(e) => {
                    tracing::error!("Failed to install SIGTERM handler: {e}");
                    None
                }
            };

            tokio::select! {
                _ = sigint.recv() => {},
                _ = async {
                    if let Some(sigterm) = sigterm.as_mut() {
                        sigterm.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {},
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                return;
            }
        }

        tracing::info!("Shutdown signal received, stopping server");
        let _ = shutdown_tx.send(true);
    });

    shutdown_rx
}

async fn wait_for_watch_true(mut rx: watch::Receiver<bool>) {
    loop {
        if *rx.borrow() {
            return;
        }

        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
