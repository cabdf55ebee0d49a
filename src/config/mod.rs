mod loader;

pub use loader::ConfigError;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Endpoints for the flashcards web service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL used everywhere except on a development host.
    pub production_url: String,
    /// Base URL used when the host name is the literal `localhost`.
    pub development_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            production_url: "https://russian-flashcards-api.herokuapp.com".to_string(),
            development_url: "http://localhost:4741".to_string(),
        }
    }
}

impl ApiConfig {
    /// Selects the base URL by host name: the development endpoint when
    /// running on `localhost`, the production endpoint otherwise.
    pub fn base_url_for_host(&self, hostname: &str) -> &str {
        if hostname == "localhost" {
            &self.development_url
        } else {
            &self.production_url
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_selects_development_url() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url_for_host("localhost"), "http://localhost:4741");
        assert_eq!(
            api.base_url_for_host("example.org"),
            "https://russian-flashcards-api.herokuapp.com"
        );
        // Only the exact marker counts.
        assert_eq!(
            api.base_url_for_host("localhost.example.org"),
            api.production_url
        );
    }
}
