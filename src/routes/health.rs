use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Reachability of each upstream service.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCheckResponse {
    pub completion: String,
    pub search: String,
}

/// GET / — liveness check.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /test-api — issue a minimal call to each upstream service.
///
/// Always answers 200; failures are reported in the body.
pub async fn test_api(State(state): State<AppState>) -> Json<ApiCheckResponse> {
    let completion_check = async {
        match &state.completion {
            Some(client) => match client.ping().await {
                Ok(()) => "ok".to_string(),
                Err(e) => {
                    tracing::warn!(error = %e, "Completion service ping failed");
                    "error".to_string()
                }
            },
            None => "not configured".to_string(),
        }
    };

    let search_check = async {
        match &state.link_search {
            Some(client) => match client.ping().await {
                Ok(()) => "ok".to_string(),
                Err(e) => {
                    tracing::warn!(error = %e, "Search service ping failed");
                    "error".to_string()
                }
            },
            None => "not configured (fallback booking links)".to_string(),
        }
    };

    let (completion, search) = tokio::join!(completion_check, search_check);

    Json(ApiCheckResponse { completion, search })
}
