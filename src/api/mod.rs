//! HTTP transport and per-entity lookup operations.
//!
//! Each operation is a single stateless request/parse round trip; the only
//! stateful piece is the franchise cache threaded in by the client.

pub mod conferences;
pub mod divisions;
mod fetch_utils;
pub mod franchises;
pub mod http_client;
pub mod teams;
pub mod urls;

use crate::error::AppError;

/// Extracts exactly one record from an id-filtered response collection.
///
/// The API is assumed to return zero or one matches for an id-scoped query;
/// a response with more than one is reported explicitly instead of being
/// destructured on faith.
pub(crate) fn single_match<T>(
    mut items: Vec<T>,
    entity: &'static str,
    id: i64,
) -> Result<T, AppError> {
    match items.len() {
        0 => Err(AppError::not_found(entity, format!("id={id}"))),
        1 => Ok(items.remove(0)),
        count => Err(AppError::ambiguous_id(entity, id, count)),
    }
}
