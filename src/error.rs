use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("Response violates the entity schema: {message} (URL: {url})")]
    SchemaViolation { message: String, url: String },

    #[error("No {entity} matching {query}")]
    NotFound { entity: &'static str, query: String },

    #[error("Expected at most one {entity} for id {id}, API returned {count}")]
    AmbiguousId {
        entity: &'static str,
        id: i64,
        count: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API not found error (HTTP 404)
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a schema violation error for a response that fails strict
    /// entity validation (missing required field, wrong type, unknown field)
    pub fn schema_violation(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::SchemaViolation {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a not-found error for a filtered lookup that matched nothing
    pub fn not_found(entity: &'static str, query: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            query: query.into(),
        }
    }

    /// Create an error for an id-scoped query that returned more than one match
    pub fn ambiguous_id(entity: &'static str, id: i64, count: usize) -> Self {
        Self::AmbiguousId { entity, id, count }
    }
}
