use std::fmt::Display;

use crate::models::criteria::SearchCriteria;

/// System message sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a hotel expert. Reply ONLY with valid JSON, \
     without any surrounding text and without backticks.";

/// Number of hotels requested from the model.
pub const HOTEL_COUNT: usize = 3;

const NOT_SPECIFIED: &str = "not specified";

/// Render search criteria into the user prompt.
///
/// The prompt pins the exact JSON shape of each
/// [`crate::models::hotel::HotelSuggestion`] in the reply.
pub fn build_prompt(criteria: &SearchCriteria) -> String {
    let destination = criteria.destination();

    let amenities = if criteria.amenities.is_empty() {
        "none".to_string()
    } else {
        criteria.amenities.join(", ")
    };

    let children_ages = if criteria.children_ages.is_empty() {
        String::new()
    } else {
        let ages: Vec<String> = criteria.children_ages.iter().map(u32::to_string).collect();
        format!(" (ages: {} years)", ages.join(", "))
    };

    format!(
        r#"You are a hotel expert. Suggest {count} REAL hotels that actually exist in {destination}.

Criteria:
- Destination: {destination}
- Travel type: {travel_type}
- Check-in: {checkin} / Check-out: {checkout}
- Rooms: {rooms}
- Adults: {adults}
- Children: {children}{children_ages}
- Budget: {budget_min} to {budget_max} DT/night
- Minimum stars: {stars}
- Amenities: {amenities}
- Request: {request}

JSON ONLY, no text around it:
[
  {{
    "name": "Exact hotel name",
    "stars": 4,
    "address": "Full address",
    "price_per_night": 250,
    "currency": "DT",
    "description": "Two-sentence description.",
    "highlights": ["Highlight 1", "Highlight 2", "Highlight 3"],
    "amenities": ["Pool", "Spa"],
    "rating": 8.5,
    "image_url": ""
  }}
]"#,
        count = HOTEL_COUNT,
        travel_type = or_placeholder(criteria.travel_type.as_deref(), NOT_SPECIFIED),
        checkin = criteria.checkin(),
        checkout = criteria.checkout(),
        rooms = criteria.rooms(),
        adults = criteria.adults(),
        children = criteria.children(),
        budget_min = or_placeholder(criteria.budget_min, NOT_SPECIFIED),
        budget_max = or_placeholder(criteria.budget_max, NOT_SPECIFIED),
        stars = or_placeholder(criteria.stars, NOT_SPECIFIED),
        request = or_placeholder(
            criteria.ai_prompt.as_deref().filter(|p| !p.trim().is_empty()),
            "none"
        ),
    )
}

fn or_placeholder<T: Display>(value: Option<T>, placeholder: &str) -> String {
    value.map_or_else(|| placeholder.to_string(), |v| v.to_string())
}
