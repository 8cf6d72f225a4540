//! Process-wide franchise cache with a populate-once transition.
//!
//! The franchise list changes roughly never, so it is fetched in full exactly
//! once per cache lifetime and every later franchise lookup is served from
//! memory. All consumers of the same cache share `Arc<Franchise>` instances:
//! two teams with the same franchise id hold the identical record, not equal
//! copies.
//!
//! The cache is owned by the client rather than held as a global, so tests
//! reset it by constructing a fresh client.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::Franchise;

/// Populated franchise index. Keeps the API's ordering for listing while
/// serving id lookups from a map.
#[derive(Debug)]
struct FranchiseIndex {
    ordered: Vec<Arc<Franchise>>,
    by_id: HashMap<i64, Arc<Franchise>>,
}

impl FranchiseIndex {
    fn build(franchises: Vec<Franchise>) -> Self {
        let ordered: Vec<Arc<Franchise>> = franchises.into_iter().map(Arc::new).collect();
        let by_id = ordered
            .iter()
            .map(|franchise| (franchise.id, Arc::clone(franchise)))
            .collect();
        FranchiseIndex { ordered, by_id }
    }
}

/// Lazy, populate-once franchise store.
///
/// The `OnceCell` guards the not-populated -> populated transition: when
/// several tasks race on first use, one runs the fetch and the rest wait for
/// its result, so the full list is fetched at most once per cache lifetime.
/// There is no invalidation or refresh.
#[derive(Debug, Default)]
pub struct FranchiseCache {
    index: OnceCell<FranchiseIndex>,
}

impl FranchiseCache {
    pub fn new() -> Self {
        FranchiseCache {
            index: OnceCell::new(),
        }
    }

    /// Whether the one-shot population has already happened.
    pub fn is_populated(&self) -> bool {
        self.index.initialized()
    }

    async fn populated_index<F, Fut>(&self, fetch_all: F) -> Result<&FranchiseIndex, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Franchise>, AppError>>,
    {
        self.index
            .get_or_try_init(|| async {
                info!("Franchise cache empty, fetching full franchise list");
                let franchises = fetch_all().await?;
                info!("Franchise cache populated with {} entries", franchises.len());
                Ok(FranchiseIndex::build(franchises))
            })
            .await
    }

    /// Returns every cached franchise, populating the cache first if needed.
    /// Order matches the API response that populated the cache.
    pub async fn all<F, Fut>(&self, fetch_all: F) -> Result<Vec<Arc<Franchise>>, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Franchise>, AppError>>,
    {
        let index = self.populated_index(fetch_all).await?;
        Ok(index.ordered.clone())
    }

    /// Looks up a franchise by id, populating the cache first if needed.
    /// A miss on the populated map is a `NotFound` error.
    pub async fn by_id<F, Fut>(&self, id: i64, fetch_all: F) -> Result<Arc<Franchise>, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Franchise>, AppError>>,
    {
        let index = self.populated_index(fetch_all).await?;
        match index.by_id.get(&id) {
            Some(franchise) => {
                debug!("Franchise cache hit for id {}", id);
                Ok(Arc::clone(franchise))
            }
            None => Err(AppError::not_found("franchise", format!("id={id}"))),
        }
    }
}
