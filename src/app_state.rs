use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{
    completion::{ChatClient, GroqClient},
    web_search::{LinkSearch, SerpApiClient},
};

/// Shared application state passed to all route handlers.
///
/// A client is `None` when its credential is not configured.
#[derive(Clone)]
pub struct AppState {
    pub completion: Option<Arc<dyn ChatClient>>,
    pub link_search: Option<Arc<dyn LinkSearch>>,
}

impl AppState {
    pub fn new(
        completion: Option<Arc<dyn ChatClient>>,
        link_search: Option<Arc<dyn LinkSearch>>,
    ) -> Self {
        Self {
            completion,
            link_search,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let completion = config
            .completion_key()
            .map(|key| Arc::new(GroqClient::new(&config.groq_url, key)) as Arc<dyn ChatClient>);
        let link_search = config
            .search_key()
            .map(|key| Arc::new(SerpApiClient::new(&config.serp_url, key)) as Arc<dyn LinkSearch>);
        Self::new(completion, link_search)
    }
}
