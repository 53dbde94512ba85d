use axum::extract::State;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;

/// Install the global Prometheus recorder and register application metrics.
pub fn install_recorder() -> Result<Arc<PrometheusHandle>, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    ::metrics::describe_counter!(
        "hotel_search_requests_total",
        "Total hotel search requests received"
    );
    ::metrics::describe_counter!(
        "hotel_search_failures_total",
        "Hotel search requests that failed, by reason"
    );
    ::metrics::describe_counter!(
        "booking_links_total",
        "Booking links attached to hotels, by source (search or fallback)"
    );
    ::metrics::describe_histogram!(
        "completion_request_seconds",
        "Latency of chat-completion requests"
    );

    Ok(Arc::new(handle))
}

/// Prometheus metrics scrape endpoint.
/// Returns metrics in Prometheus text exposition format.
pub async fn prometheus_metrics(
    State(handle): State<Arc<PrometheusHandle>>,
) -> impl IntoResponse {
    handle.render()
}
