use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::assets::AssetSource;
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::routes;

/// Shared handler state: the asset source selected at startup, read-only
/// for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<AssetSource>,
}

pub async fn run(config: ServerConfig, assets: AssetSource) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.map_err(AppError::Io)?;

    let state = AppState {
        assets: Arc::new(assets),
    };

    let app = routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    info!(mode = %config.mode, "server listening addr={addr}");
    info!("local:   http://localhost:{}", config.port);
    info!("network: http://{}:{}", config.display_host(), config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Io)?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT"),
        () = terminate => info!("received SIGTERM"),
    }
}
