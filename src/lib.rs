//! Hotel search API
//!
//! Forwards hotel search criteria to a chat-completion model, recovers the
//! JSON hotel list from its reply and attaches a booking link to each hotel,
//! resolved through web search or built deterministically as a fallback.

pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
