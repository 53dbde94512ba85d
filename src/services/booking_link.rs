//! Deterministic Booking.com search links.
//!
//! Used whenever the web search did not resolve a real hotel page.

use url::form_urlencoded;

const BOOKING_SEARCH_URL: &str = "https://www.booking.com/search.html";

/// Site language for generated links.
pub const LOCALE: &str = "fr";

/// Stay parameters for a booking lookup. Counts are already defaulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingParams<'a> {
    pub destination: &'a str,
    /// `YYYY-MM-DD`
    pub checkin: &'a str,
    /// `YYYY-MM-DD`
    pub checkout: &'a str,
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
}

/// Build the fallback search URL for `hotel_name`.
///
/// Malformed dates are not rejected: missing year/month/day parts are sent
/// as empty values and Booking.com ignores them.
pub fn fallback_link(hotel_name: &str, stay: &BookingParams<'_>) -> String {
    let [cy, cm, cd] = date_parts(stay.checkin);
    let [oy, om, od] = date_parts(stay.checkout);

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("ss", &format!("{} {}", hotel_name, stay.destination))
        .append_pair("lang", LOCALE)
        .append_pair("checkin_year", cy)
        .append_pair("checkin_month", cm)
        .append_pair("checkin_monthday", cd)
        .append_pair("checkout_year", oy)
        .append_pair("checkout_month", om)
        .append_pair("checkout_monthday", od)
        .append_pair("no_rooms", &stay.rooms.to_string())
        .append_pair("group_adults", &stay.adults.to_string())
        .append_pair("group_children", &stay.children.to_string())
        .finish();

    format!("{BOOKING_SEARCH_URL}?{query}")
}

fn date_parts(date: &str) -> [&str; 3] {
    let mut parts = date.trim().split('-');
    [
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    ]
}
