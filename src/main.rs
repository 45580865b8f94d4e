mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "authform failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = config::HostConfig::from_env()?;
    match &config.backend_url {
        Some(url) => tracing::info!(backend = %url, "auth backend configured"),
        None => tracing::warn!("AUTH_BACKEND_URL not set; auth endpoints will answer 502"),
    }

    let state = state::AppState::new(config.backend_url.clone());
    let app = routes::leptos_app(state)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("failed to bind port {port}: {e}"))?;

    tracing::info!(%port, "authform listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
