use garde::Validate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::services::booking_link::BookingParams;

/// Body of `POST /api/search`.
///
/// Only `destination`, `checkin` and `checkout` are required; everything else
/// is rendered as "not specified" in the prompt when absent. Numeric fields
/// accept any JSON number or numeric string; anything else counts as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[garde(required, length(min = 1))]
    pub destination: Option<String>,

    #[garde(skip)]
    pub travel_type: Option<String>,

    /// Check-in date, `YYYY-MM-DD`.
    #[garde(required, length(min = 1))]
    pub checkin: Option<String>,

    /// Check-out date, `YYYY-MM-DD`.
    #[garde(required, length(min = 1))]
    pub checkout: Option<String>,

    #[serde(default, deserialize_with = "lenient_count")]
    #[garde(skip)]
    pub rooms: Option<u32>,

    #[serde(default, deserialize_with = "lenient_count")]
    #[garde(skip)]
    pub adults: Option<u32>,

    #[serde(default, deserialize_with = "lenient_count")]
    #[garde(skip)]
    pub children: Option<u32>,

    #[serde(default, deserialize_with = "lenient_counts")]
    #[garde(skip)]
    pub children_ages: Vec<u32>,

    #[serde(default, deserialize_with = "lenient_number")]
    #[garde(skip)]
    pub budget_min: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    #[garde(skip)]
    pub budget_max: Option<f64>,

    /// Minimum star rating.
    #[serde(default, deserialize_with = "lenient_number")]
    #[garde(skip)]
    pub stars: Option<f64>,

    #[serde(default)]
    #[garde(skip)]
    pub amenities: Vec<String>,

    /// Free-form hint from the traveller.
    #[garde(skip)]
    pub ai_prompt: Option<String>,
}

impl SearchCriteria {
    pub fn destination(&self) -> &str {
        self.destination.as_deref().unwrap_or_default()
    }

    pub fn checkin(&self) -> &str {
        self.checkin.as_deref().unwrap_or_default()
    }

    pub fn checkout(&self) -> &str {
        self.checkout.as_deref().unwrap_or_default()
    }

    // Zero counts fall back to the defaults, like an unset field.
    pub fn rooms(&self) -> u32 {
        self.rooms.filter(|n| *n > 0).unwrap_or(1)
    }

    pub fn adults(&self) -> u32 {
        self.adults.filter(|n| *n > 0).unwrap_or(2)
    }

    pub fn children(&self) -> u32 {
        self.children.unwrap_or(0)
    }

    /// Stay parameters shared by the search lookup and the fallback link.
    pub fn booking_params(&self) -> BookingParams<'_> {
        BookingParams {
            destination: self.destination(),
            checkin: self.checkin(),
            checkout: self.checkout(),
            rooms: self.rooms(),
            adults: self.adults(),
            children: self.children(),
        }
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn as_count(value: &Value) -> Option<u32> {
    as_number(value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.min(u32::MAX as f64) as u32)
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(d)?.as_ref().and_then(as_number))
}

fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    Ok(Option::<Value>::deserialize(d)?.as_ref().and_then(as_count))
}

fn lenient_counts<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u32>, D::Error> {
    let values = Option::<Vec<Value>>::deserialize(d)?.unwrap_or_default();
    Ok(values.iter().filter_map(as_count).collect())
}
