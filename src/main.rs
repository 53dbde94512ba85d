use axum::routing::get;
use tracing_subscriber::EnvFilter;

use hotel_search_api::app_state::AppState;
use hotel_search_api::config::AppConfig;
use hotel_search_api::routes;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing hotel-search-api server");

    let prometheus_handle =
        routes::metrics::install_recorder().expect("Failed to install Prometheus metrics recorder");

    if config.completion_key().is_some() {
        tracing::info!("Groq completion key configured");
    } else {
        tracing::warn!("GROQ_API_KEY missing, /api/search will fail");
    }
    if config.search_key().is_some() {
        tracing::info!("SerpAPI key configured");
    } else {
        tracing::warn!("SERP_API_KEY missing, using fallback booking links only");
    }

    let state = AppState::from_config(&config);

    let app = routes::router(state).route(
        "/metrics",
        get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
