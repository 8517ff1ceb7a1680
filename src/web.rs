//! Server assembly: CORS, router, bind and serve.

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::{api, api::AppState, config::Config};

/// Build the full application router for the given configuration.
pub fn app(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(AppState::new(config)).layer(cors)
}

/// Bind the configured port and serve until the process is terminated.
pub async fn run(config: Config) -> Result<()> {
    let port = config.port;
    let app = app(&config);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("server running at http://localhost:{port}");
    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
