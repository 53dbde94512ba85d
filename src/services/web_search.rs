//! Booking link lookup through SerpAPI.
//!
//! Lookups are best-effort: any failure is logged and reported as "no link"
//! so the caller can fall back to [`super::booking_link::fallback_link`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::warn;

use crate::services::booking_link::{BookingParams, LOCALE};

/// Booking sites the search is restricted to.
const SITE_FILTER: &str = "site:booking.com OR site:expedia.com OR site:hotels.com";

/// URL fragments of acceptable booking pages.
const PREFERRED_LINK_PATTERNS: [&str; 4] =
    ["booking.com/hotel", "expedia.com", "hotels.com", "tripadvisor"];

const RESULT_COUNT: &str = "3";

#[derive(Debug, thiserror::Error)]
pub enum WebSearchError {
    #[error("HTTP request to search service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search service returned HTTP {0}")]
    Status(StatusCode),
}

/// Resolves a real booking page for a hotel.
#[async_trait]
pub trait LinkSearch: Send + Sync {
    /// Never fails; `None` means no usable link was found.
    async fn find_booking_link(&self, hotel_name: &str, stay: &BookingParams<'_>)
        -> Option<String>;

    /// Minimal request used by the `/test-api` diagnostic.
    async fn ping(&self) -> Result<(), WebSearchError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

/// Pick a booking link from ranked search results.
///
/// Results are scanned in rank order and the first one whose URL matches any
/// preferred pattern wins. Otherwise the top result is used.
pub fn select_link(results: &[OrganicResult]) -> Option<String> {
    results
        .iter()
        .filter_map(|r| r.link.as_deref())
        .find(|link| PREFERRED_LINK_PATTERNS.iter().any(|p| link.contains(p)))
        .or_else(|| results.first().and_then(|r| r.link.as_deref()))
        .filter(|link| !link.is_empty())
        .map(str::to_string)
}

/// Search query for a hotel. Stay dates are not part of the query.
pub fn build_query(hotel_name: &str, destination: &str) -> String {
    format!("{hotel_name} {destination} booking reservation {SITE_FILTER}")
}

/// SerpAPI (Google results) client.
pub struct SerpApiClient {
    http: Client,
    url: String,
    api_key: String,
}

impl SerpApiClient {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Run a search and return the organic results.
    pub async fn search(
        &self,
        query: &str,
        num: &str,
    ) -> Result<Vec<OrganicResult>, WebSearchError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("num", num),
                ("hl", LOCALE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WebSearchError::Status(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.organic_results)
    }
}

#[async_trait]
impl LinkSearch for SerpApiClient {
    async fn find_booking_link(
        &self,
        hotel_name: &str,
        stay: &BookingParams<'_>,
    ) -> Option<String> {
        let query = build_query(hotel_name, stay.destination);
        match self.search(&query, RESULT_COUNT).await {
            Ok(results) => select_link(&results),
            Err(e) => {
                warn!(hotel = hotel_name, error = %e, "Booking link search failed");
                None
            }
        }
    }

    async fn ping(&self) -> Result<(), WebSearchError> {
        self.search("test", "1").await.map(|_| ())
    }
}
