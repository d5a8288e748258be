use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Runtime configuration recognized by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Whether to keep and send cookies alongside the bearer token.
    pub with_credentials: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            with_credentials: false,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads overrides from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("EMPLOYEE_TRACKER_API_BASE_URL") {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(flag) = std::env::var("EMPLOYEE_TRACKER_WITH_CREDENTIALS") {
            config.with_credentials = matches!(flag.as_str(), "1" | "true" | "yes");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000/");
        assert!(!config.with_credentials);
    }

    #[test]
    fn with_base_url_keeps_other_defaults() {
        let config = ClientConfig::with_base_url("https://tracker.example.com");
        assert_eq!(config.base_url, "https://tracker.example.com");
        assert!(!config.with_credentials);
    }
}
