mod config;
mod routes;
mod state;

use config::{ConfigError, WebConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "notenest-web stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = WebConfig::from_env()?;
    let port = config.port;
    tracing::info!(api_upstream = %config.api_upstream, timeout_secs = config.proxy_timeout_secs, "api proxy configured");

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%port, "notenest listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
