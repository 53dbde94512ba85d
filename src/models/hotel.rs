use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A hotel proposed by the completion model.
///
/// The object is kept exactly as the model sent it (the prompt asks for
/// `name`, `stars`, `address`, `price_per_night`, `currency`, `description`,
/// `highlights`, `amenities`, `rating` and `image_url`, but models drift on
/// types). Enrichment only reads `name` and writes `link`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct HotelSuggestion(Map<String, Value>);

impl HotelSuggestion {
    /// Hotel name, or `""` when the model sent no string name.
    pub fn name(&self) -> &str {
        self.0.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Booking link, set during enrichment.
    pub fn link(&self) -> Option<&str> {
        self.0.get("link").and_then(Value::as_str)
    }

    pub fn set_link(&mut self, link: String) {
        self.0.insert("link".to_string(), Value::String(link));
    }
}

impl From<Map<String, Value>> for HotelSuggestion {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Response of `POST /api/search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hotels: Vec<HotelSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(json: &str) -> HotelSuggestion {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_fields_pass_through_unchanged() {
        let json = r#"{"name":"Dar El Jeld","stars":5,"price_per_night":"250 DT","highlights":null,"distance_to_beach":"2 km"}"#;
        let out = serde_json::to_value(hotel(json)).unwrap();
        let expected: Value = serde_json::from_str(json).unwrap();
        assert_eq!(out, expected);
        assert!(out["stars"].is_u64());
        assert!(out.get("amenities").is_none());
    }

    #[test]
    fn test_name_must_be_a_string() {
        assert_eq!(hotel(r#"{"name": "Dar El Jeld"}"#).name(), "Dar El Jeld");
        assert_eq!(hotel(r#"{"name": null}"#).name(), "");
        assert_eq!(hotel(r#"{"name": 42}"#).name(), "");
        assert_eq!(hotel("{}").name(), "");
    }

    #[test]
    fn test_set_link_overwrites() {
        let mut h = hotel(r#"{"name": "Dar El Jeld", "link": "model-made-this-up"}"#);
        h.set_link("https://www.booking.com/hotel/tn/dar-el-jeld.html".to_string());
        assert_eq!(h.link(), Some("https://www.booking.com/hotel/tn/dar-el-jeld.html"));
    }
}
