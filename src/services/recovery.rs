//! Recovery of the hotel list from raw completion text.
//!
//! Heuristic only: strip Markdown code fences, take the span from the first
//! `[` to the last `]`, and parse it. No attempt is made to repair broken JSON.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::hotel::HotelSuggestion;

#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    #[error("No JSON array found in completion output")]
    NoJsonArray { raw: String },

    #[error("Failed to parse hotel list: {0}")]
    Parse(#[from] serde_json::Error),
}

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"(?i)```(?:json)?").expect("valid regex"))
}

fn array_regex() -> &'static Regex {
    static ARRAY: OnceLock<Regex> = OnceLock::new();
    ARRAY.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"))
}

/// Remove every code fence marker, with or without a `json` tag.
pub fn strip_code_fences(text: &str) -> String {
    fence_regex().replace_all(text, "").trim().to_string()
}

/// First `[` through last `]`, if any.
pub fn locate_json_array(text: &str) -> Option<&str> {
    array_regex().find(text).map(|m| m.as_str())
}

/// Extract the hotel list from a completion reply.
///
/// `NoJsonArray` carries the unprocessed reply for diagnosis.
pub fn recover_hotels(text: &str) -> Result<Vec<HotelSuggestion>, RecoveryError> {
    let cleaned = strip_code_fences(text);
    let array = locate_json_array(&cleaned).ok_or_else(|| RecoveryError::NoJsonArray {
        raw: text.to_string(),
    })?;
    Ok(serde_json::from_str(array)?)
}
