#![recursion_limit = "256"]

mod config;
mod routes;
mod rpc;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        rpc_url = %config.rpc_url,
        factory = %config.factory_address,
        chain_id = ?config.chain_id,
        "configuration loaded"
    );

    let state = state::AppState::new(config).expect("rpc proxy init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "ticketing host listening");
    axum::serve(listener, app).await.expect("server failed");
}
