use thiserror::Error;

/// Environment variable holding the prediction service base URL.
pub const API_URL_VAR: &str = "API_URL";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_URL is not set")]
    MissingApiUrl,

    #[error("API_URL is set but empty")]
    EmptyApiUrl,
}

/// Where the prediction service lives.
///
/// | field     | example                  |
/// |-----------|--------------------------|
/// | `api_url` | `http://localhost:8000`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL; the predict route is appended to it.
    pub api_url: String,
}

impl GatewayConfig {
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_url = api_url.into();
        if api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        Ok(Self { api_url })
    }

    /// Reads the base URL from `API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(API_URL_VAR).map_err(|_| ConfigError::MissingApiUrl)?;
        Self::new(value)
    }

    /// Full URL of the predict endpoint. Trailing slashes on the base URL are
    /// dropped so the route is joined with exactly one.
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_url.trim().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_url_appends_route() {
        let config = GatewayConfig::new("http://localhost:8000").unwrap();
        assert_eq!(config.predict_url(), "http://localhost:8000/predict");
    }

    #[test]
    fn predict_url_does_not_double_slash() {
        let config = GatewayConfig::new("https://api.example.com/v1/").unwrap();
        assert_eq!(config.predict_url(), "https://api.example.com/v1/predict");
    }

    #[test]
    fn predict_url_drops_every_trailing_slash() {
        let config = GatewayConfig::new("http://localhost:8000//").unwrap();
        assert_eq!(config.predict_url(), "http://localhost:8000/predict");
    }

    #[test]
    fn blank_url_is_rejected() {
        assert_eq!(GatewayConfig::new("  "), Err(ConfigError::EmptyApiUrl));
    }
}
