//! Generic HTTP fetching with typed error handling
//!
//! One-shot request/response: the caller gets either a fully parsed value or
//! a typed error. There is deliberately no retry, backoff, or rate-limit
//! handling here.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` and parses the body into `T`.
///
/// HTTP status codes map to specific error variants (404 -> `ApiNotFound`,
/// other 4xx -> `ApiClientError`, 5xx -> `ApiServerError`, timeouts and
/// connection failures to their network variants). A body that fails strict
/// deserialization into `T` is a `SchemaViolation`: the models are closed
/// schemas, so this covers missing required fields, type mismatches, and
/// unrecognized fields alike.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Response failed schema validation: {} (URL: {})", e, url);
            debug!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );
            Err(AppError::schema_violation(e.to_string(), url))
        }
    }
}
