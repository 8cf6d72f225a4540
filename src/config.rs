use crate::constants::{DEFAULT_API_DOMAIN, DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars};
use crate::error::AppError;

/// Configuration for the API client.
///
/// The API base address is fixed in practice, but keeping it configurable
/// lets tests point the client at a mock server and lets a proxy or mirror
/// be substituted without code changes.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the stats API. Should include the http(s):// prefix and
    /// no trailing slash.
    pub api_domain: String,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: DEFAULT_API_DOMAIN.to_string(),
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Loads configuration from defaults, with environment variable overrides.
    ///
    /// # Environment Variables
    /// - `NHL_API_DOMAIN` - Override API base URL
    /// - `NHL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub fn load() -> Result<Self, AppError> {
        let mut config = Config::default();

        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            config.api_domain = api_domain;
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Creates a configuration pointing at a specific API base URL,
    /// keeping the default timeout.
    pub fn with_api_domain(api_domain: impl Into<String>) -> Self {
        Config {
            api_domain: api_domain.into(),
            ..Config::default()
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_domain.is_empty() {
            return Err(AppError::config_error("API domain cannot be empty"));
        }

        if !self.api_domain.starts_with("http://") && !self.api_domain.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "API domain must start with http:// or https://, got: {}",
                self.api_domain
            )));
        }

        if self.api_domain.ends_with('/') {
            return Err(AppError::config_error(
                "API domain must not end with a trailing slash",
            ));
        }

        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error(
                "HTTP timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}
