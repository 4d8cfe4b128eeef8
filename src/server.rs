use axum::Router;
use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::{Config, ConfigError};

pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors_allowed_origin {
        None => Ok(layer.allow_origin(Any)),
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                name: "CORS_ALLOWED_ORIGIN",
                value: origin.clone(),
            })?;
            Ok(layer.allow_origin(origin))
        }
    }
}

pub async fn serve(app: Router, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {}", e);
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
                tracing::warn!("failed to listen for SIGTERM: {}", e);
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
    info!("shutdown signal received");
}
