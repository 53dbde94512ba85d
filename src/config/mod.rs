use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Listen host (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Groq chat-completion API key. Without it `/api/search` answers 500.
    pub groq_api_key: Option<String>,

    /// SerpAPI key. Without it every hotel gets a fallback booking link.
    pub serp_api_key: Option<String>,

    /// Chat-completion endpoint
    #[serde(default = "default_groq_url")]
    pub groq_url: String,

    /// Web search endpoint
    #[serde(default = "default_serp_url")]
    pub serp_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_groq_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_serp_url() -> String {
    "https://serpapi.com/search.json".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Completion credential, ignoring empty values.
    pub fn completion_key(&self) -> Option<&str> {
        non_empty(self.groq_api_key.as_deref())
    }

    /// Search credential, ignoring empty values.
    pub fn search_key(&self) -> Option<&str> {
        non_empty(self.serp_api_key.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string()));
        envy::from_iter(vars).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
        assert!(config.completion_key().is_none());
        assert!(config.search_key().is_none());
        assert_eq!(config.serp_url, "https://serpapi.com/search.json");
    }

    #[test]
    fn test_reads_credentials_and_port() {
        let config = config_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("SERP_API_KEY", "serp_test"),
            ("PORT", "8080"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.completion_key(), Some("gsk_test"));
        assert_eq!(config.search_key(), Some("serp_test"));
    }

    #[test]
    fn test_empty_credentials_are_absent() {
        let config = config_from(&[("GROQ_API_KEY", ""), ("SERP_API_KEY", "  ")]);
        assert!(config.completion_key().is_none());
        assert!(config.search_key().is_none());
    }
}
