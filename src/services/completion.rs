use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

pub const MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 2048;
const PING_MAX_TOKENS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("HTTP request to completion service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion service returned HTTP {0}")]
    Status(StatusCode),
}

/// Sends chat prompts to an LLM and returns the reply text.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a `system` message followed by a `user` prompt. Returns the text of
    /// the first choice, or an empty string when the service returns none.
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;

    /// Minimal request used by the `/test-api` diagnostic.
    async fn ping(&self) -> Result<(), CompletionError>;
}

/// Client for Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqClient {
    http: Client,
    url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqClient {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    async fn send(&self, request: &ChatRequest<'_>) -> Result<reqwest::Response, CompletionError> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CompletionError::Status(response.status()));
        }
        Ok(response)
    }
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: Some(TEMPERATURE),
            max_tokens: MAX_TOKENS,
        };

        let chat: ChatResponse = self.send(&request).await?.json().await?;

        Ok(chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), CompletionError> {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: "OK",
            }],
            temperature: None,
            max_tokens: PING_MAX_TOKENS,
        };
        self.send(&request).await?;
        Ok(())
    }
}
