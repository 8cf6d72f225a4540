//! Typed client for the NHL stats web API
//!
//! Models a handful of league entities (conferences, divisions, franchises,
//! teams) as validated records fetched over HTTP. Responses are parsed
//! against strict, closed schemas with field aliasing; relative links are
//! rewritten to absolute addresses; and the rarely-changing franchise list is
//! fetched once per client and memoized, so every team referencing a
//! franchise shares the identical cached record.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_stats_client::{Config, NhlClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nhl_stats_client::AppError> {
//!     let client = NhlClient::new(Config::default())?;
//!
//!     // Entity lookups are one-shot request/parse round trips
//!     let conferences = client.conferences().await?;
//!     let pacific = client.division_by_id(15, &["division.conference"]).await?;
//!
//!     // Franchise lookups are served from an in-memory cache after the
//!     // first call; name and location matching ignore case and accents
//!     let habs = client.franchise_by_name("canadiens").await?;
//!     let montreal = client.franchise_by_location("montréal").await?;
//!
//!     println!("{} conferences, division {}, {}", conferences.len(), pacific, habs);
//!     println!("{} Montréal franchises", montreal.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod expands;
pub mod models;
pub mod normalize;

// Re-export commonly used types for convenience
pub use client::NhlClient;
pub use config::Config;
pub use error::AppError;
pub use models::{Conference, Division, Franchise, Team};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
