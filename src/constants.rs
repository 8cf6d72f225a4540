//! Crate-wide constants and configuration values
//!
//! Centralizes the fixed API addresses and HTTP tuning knobs so they are not
//! scattered through the fetch code as magic values.

/// Base URL of the NHL stats API. Links returned by the API are relative to
/// this address and are rewritten to absolute form at parse time.
pub const DEFAULT_API_DOMAIN: &str = "https://statsapi.web.nhl.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Endpoint paths, relative to the API domain
pub mod endpoints {
    pub const CONFERENCES: &str = "/api/v1/conferences";
    pub const DIVISIONS: &str = "/api/v1/divisions";
    pub const FRANCHISES: &str = "/api/v1/franchises";
    pub const TEAMS: &str = "/api/v1/teams";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "NHL_API_DOMAIN";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "NHL_HTTP_TIMEOUT";
}
