//! Test helper utilities: in-process upstream mocks and request plumbing.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use reqwest::StatusCode as UpstreamStatus;
use serde_json::Value;
use tower::ServiceExt;

use hotel_search_api::app_state::AppState;
use hotel_search_api::routes;
use hotel_search_api::services::booking_link::BookingParams;
use hotel_search_api::services::completion::{ChatClient, CompletionError};
use hotel_search_api::services::web_search::{LinkSearch, WebSearchError};

/// What the mock completion service answers.
#[derive(Clone)]
pub enum Reply {
    Text(String),
    Status(u16),
    Panic,
}

pub struct MockChat {
    reply: Reply,
    pub calls: AtomicUsize,
}

impl MockChat {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn status_error(code: u16) -> CompletionError {
    CompletionError::Status(UpstreamStatus::from_u16(code).unwrap())
}

#[async_trait]
impl ChatClient for MockChat {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Status(code) => Err(status_error(*code)),
            Reply::Panic => panic!("completion mock exploded"),
        }
    }

    async fn ping(&self) -> Result<(), CompletionError> {
        match &self.reply {
            Reply::Status(code) => Err(status_error(*code)),
            _ => Ok(()),
        }
    }
}

/// Search mock keyed by hotel name: `(delay, link)`.
#[derive(Default)]
pub struct MockSearch {
    links: HashMap<String, (Duration, Option<String>)>,
    ping_fails: bool,
    pub calls: AtomicUsize,
}

impl MockSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(mut self, hotel: &str, delay_ms: u64, link: Option<&str>) -> Self {
        self.links.insert(
            hotel.to_string(),
            (Duration::from_millis(delay_ms), link.map(str::to_string)),
        );
        self
    }

    pub fn failing_ping(mut self) -> Self {
        self.ping_fails = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkSearch for MockSearch {
    async fn find_booking_link(
        &self,
        hotel_name: &str,
        _stay: &BookingParams<'_>,
    ) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, link) = self.links.get(hotel_name)?;
        tokio::time::sleep(*delay).await;
        link.clone()
    }

    async fn ping(&self) -> Result<(), WebSearchError> {
        if self.ping_fails {
            Err(WebSearchError::Status(UpstreamStatus::SERVICE_UNAVAILABLE))
        } else {
            Ok(())
        }
    }
}

pub fn app(chat: Option<Arc<MockChat>>, search: Option<Arc<MockSearch>>) -> Router {
    let completion = chat.map(|c| c as Arc<dyn ChatClient>);
    let link_search = search.map(|s| s as Arc<dyn LinkSearch>);
    routes::router(AppState::new(completion, link_search))
}

pub fn post_search(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn criteria() -> Value {
    serde_json::json!({
        "destination": "Tunis",
        "checkin": "2025-06-01",
        "checkout": "2025-06-08",
        "rooms": 1,
        "adults": 2,
        "children": 0,
        "budgetMin": 200,
        "budgetMax": 500,
        "stars": 4,
        "amenities": ["Pool"]
    })
}

pub const THREE_HOTELS: &str = r#"[
  {"name": "The Residence Tunis", "stars": 5, "address": "Les Côtes de Carthage", "price_per_night": 620, "currency": "DT", "rating": 9.1},
  {"name": "Movenpick Gammarth", "stars": 5, "price_per_night": 480, "currency": "DT"},
  {"name": "Dar El Marsa", "stars": 4, "price_per_night": 350, "currency": "DT"}
]"#;
