mod bootstrap;
mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is the normal case outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        auto_cookie = %config.theme.auto_mode_cookie_name,
        dark_cookie = %config.theme.dark_mode_cookie_name,
        default_mode = %config.theme.default_mode,
        provider = config.theme.provider,
        "dark mode configured"
    );

    let state = state::AppState::new(&config);
    let app = routes::app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "duskmode listening");
    axum::serve(listener, app).await.expect("server failed");
}
