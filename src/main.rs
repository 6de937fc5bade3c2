#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use std::sync::Arc;

use conversation::HttpCoachClient;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let coach = HttpCoachClient::new(&config.coach).expect("coach client init failed");
    tracing::info!(
        upstream = coach.api_url(),
        request_timeout_secs = config.coach.timeouts.request_secs,
        "coach relay configured"
    );

    let state = state::AppState::new(Arc::new(coach));
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "job-navigator listening");
    axum::serve(listener, app).await.expect("server failed");
}
