use futures::future::join_all;
use tracing::{info, warn};

use crate::models::hotel::HotelSuggestion;
use crate::services::booking_link::{fallback_link, BookingParams};
use crate::services::web_search::LinkSearch;

/// Attach a booking link to every hotel.
///
/// Lookups run concurrently, one per hotel, and are joined before returning.
/// A hotel whose lookup yields nothing (or when no search client is
/// configured) gets the deterministic fallback link. Output order matches
/// input order.
pub async fn attach_booking_links(
    hotels: Vec<HotelSuggestion>,
    stay: &BookingParams<'_>,
    search: Option<&dyn LinkSearch>,
) -> Vec<HotelSuggestion> {
    join_all(
        hotels
            .into_iter()
            .map(|hotel| resolve_link(hotel, stay, search)),
    )
    .await
}

async fn resolve_link(
    mut hotel: HotelSuggestion,
    stay: &BookingParams<'_>,
    search: Option<&dyn LinkSearch>,
) -> HotelSuggestion {
    let name = hotel.name().to_string();
    let found = match search {
        Some(search) => {
            info!(hotel = %name, "Looking up booking link");
            let link = search.find_booking_link(&name, stay).await;
            match &link {
                Some(link) => info!(hotel = %name, link = %link, "Booking link found"),
                None => warn!(hotel = %name, "No booking link found, using fallback"),
            }
            link
        }
        None => None,
    };

    let source = if found.is_some() { "search" } else { "fallback" };
    metrics::counter!("booking_links_total", "source" => source).increment(1);

    hotel.set_link(found.unwrap_or_else(|| fallback_link(&name, stay)));
    hotel
}
