use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use garde::Validate;
use tracing::{error, info};

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::criteria::SearchCriteria;
use crate::models::hotel::SearchResponse;
use crate::services::{enrichment, prompt, recovery};

/// POST /api/search — suggest hotels for the given criteria.
pub async fn search_hotels(
    State(state): State<AppState>,
    payload: Result<Json<SearchCriteria>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    metrics::counter!("hotel_search_requests_total").increment(1);

    let result = match payload {
        Ok(Json(criteria)) => run_search(&state, &criteria).await,
        Err(rejection) => Err(ApiError::from(rejection)),
    };

    result.map(Json).map_err(|e| {
        error!(error = %e, reason = e.reason(), "Hotel search failed");
        metrics::counter!("hotel_search_failures_total", "reason" => e.reason()).increment(1);
        e
    })
}

async fn run_search(
    state: &AppState,
    criteria: &SearchCriteria,
) -> Result<SearchResponse, ApiError> {
    criteria.validate()?;
    let completion = state
        .completion
        .as_deref()
        .ok_or(ApiError::MissingCompletionKey)?;

    info!(
        destination = criteria.destination(),
        checkin = criteria.checkin(),
        checkout = criteria.checkout(),
        "Requesting hotel suggestions"
    );

    let user_prompt = prompt::build_prompt(criteria);
    let start = Instant::now();
    let text = completion.complete(prompt::SYSTEM_PROMPT, &user_prompt).await?;
    metrics::histogram!("completion_request_seconds").record(start.elapsed().as_secs_f64());

    let hotels = recovery::recover_hotels(&text)?;
    info!(count = hotels.len(), "Recovered hotel suggestions");

    let stay = criteria.booking_params();
    let hotels =
        enrichment::attach_booking_links(hotels, &stay, state.link_search.as_deref()).await;

    Ok(SearchResponse { hotels })
}
