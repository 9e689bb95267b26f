//! Query/mutation cache for server data.
//!
//! A key-addressed read-through cache. Reads serve a fresh entry or call the
//! supplied fetch and store its result; mutations invalidate the keys they
//! affect once they succeed, so the next read refetches.
//!
//! Values are stored as JSON and decoded at the edge, so one cache holds
//! every model type.

pub mod keys;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiResult;

/// One cached value.
#[derive(Debug, Clone)]
struct CacheEntry {
    data: serde_json::Value,
    fetched_at: Instant,
    invalidated: bool,
}

impl CacheEntry {
    fn new(data: serde_json::Value) -> Self {
        Self {
            data,
            fetched_at: Instant::now(),
            invalidated: false,
        }
    }

    fn is_stale(&self, stale_time: Option<Duration>) -> bool {
        self.invalidated
            || stale_time
                .map(|ttl| self.fetched_at.elapsed() > ttl)
                .unwrap_or(false)
    }
}

/// Entries plus a per-key invalidation counter.
///
/// The counter is bumped by every invalidation, including for keys with no
/// entry yet, so a fetch can tell whether it was overtaken.
#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    generations: HashMap<String, u64>,
}

impl CacheState {
    fn generation(&self, key: &str) -> u64 {
        self.generations.get(key).copied().unwrap_or(0)
    }

    fn bump(&mut self, key: &str) {
        *self.generations.entry(key.to_string()).or_insert(0) += 1;
    }
}

/// Process-wide cache of server data.
///
/// The lock is never held across an `.await`; two concurrent misses on the
/// same key may both fetch, and the later result wins. A fetch that was
/// invalidated while in flight is stored stale.
#[derive(Debug, Default)]
pub struct QueryClient {
    state: Mutex<CacheState>,
    /// `None` keeps entries fresh until they are invalidated
    stale_time: Option<Duration>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stale_time(stale_time: Option<Duration>) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            stale_time,
        }
    }

    fn state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the cached value for `key` if fresh, otherwise fetch and cache it.
    ///
    /// A failed fetch leaves any existing entry in place (still stale).
    pub async fn read<T, F, Fut>(&self, key: &str, fetch: F) -> ApiResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        if let Some(cached) = self.fresh_value(key) {
            match serde_json::from_value(cached) {
                Ok(value) => {
                    tracing::debug!("query hit: {}", key);
                    return Ok(value);
                }
                Err(err) => tracing::warn!("cached {} has unexpected shape, refetching: {}", key, err),
            }
        }

        tracing::debug!("query miss: {}", key);
        let generation = self.state().generation(key);
        let value = fetch().await?;
        self.store_fetched(key, &value, generation)?;
        Ok(value)
    }

    /// Run a side-effecting operation and invalidate `keys` if it succeeds.
    ///
    /// On failure the cache is left untouched.
    pub async fn mutate<T, F, Fut>(&self, keys: &[&str], operation: F) -> ApiResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let value = operation().await?;
        self.invalidate(keys);
        Ok(value)
    }

    /// Mark `keys` stale so the next read refetches.
    ///
    /// Fetches of these keys already in flight will store their result stale.
    pub fn invalidate(&self, keys: &[&str]) {
        let mut state = self.state();
        for key in keys {
            state.bump(key);
            if let Some(entry) = state.entries.get_mut(*key) {
                entry.invalidated = true;
            }
            tracing::debug!("query invalidated: {}", key);
        }
    }

    /// Mark every cached key stale.
    pub fn invalidate_all(&self) {
        let mut state = self.state();
        let keys: Vec<String> = state
            .entries
            .keys()
            .chain(state.generations.keys())
            .cloned()
            .collect();
        for key in &keys {
            state.bump(key);
        }
        for entry in state.entries.values_mut() {
            entry.invalidated = true;
        }
        tracing::debug!("invalidated {} queries", state.entries.len());
    }

    /// Whether the next read of `key` would fetch. Missing keys count as stale.
    pub fn is_stale(&self, key: &str) -> bool {
        self.state()
            .entries
            .get(key)
            .map(|entry| entry.is_stale(self.stale_time))
            .unwrap_or(true)
    }

    /// Store `value` under `key` as a fresh entry.
    pub fn set_data<T: Serialize>(&self, key: &str, value: &T) -> ApiResult<()> {
        let data = serde_json::to_value(value)?;
        self.state().entries.insert(key.to_string(), CacheEntry::new(data));
        Ok(())
    }

    /// Cached value for `key`, fresh or stale, without fetching.
    pub fn peek<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let data = self.state().entries.get(key).map(|entry| entry.data.clone())?;
        serde_json::from_value(data).ok()
    }

    pub fn remove(&self, key: &str) {
        self.state().entries.remove(key);
    }

    pub fn clear(&self) {
        self.state().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().entries.is_empty()
    }

    fn fresh_value(&self, key: &str) -> Option<serde_json::Value> {
        let state = self.state();
        let entry = state.entries.get(key)?;
        if entry.is_stale(self.stale_time) {
            None
        } else {
            Some(entry.data.clone())
        }
    }

    /// Store a fetch result, stale if `key` was invalidated since `generation`.
    fn store_fetched<T: Serialize>(&self, key: &str, value: &T, generation: u64) -> ApiResult<()> {
        let mut entry = CacheEntry::new(serde_json::to_value(value)?);
        let mut state = self.state();
        if state.generation(key) != generation {
            tracing::debug!("query {} invalidated during fetch, storing stale", key);
            entry.invalidated = true;
        }
        state.entries.insert(key.to_string(), entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn counted_read(cache: &QueryClient, calls: &AtomicUsize, value: u32) -> ApiResult<u32> {
        cache
            .read("/api/thing", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(value)
            })
            .await
    }

    #[tokio::test]
    async fn test_read_through_caches() {
        let cache = QueryClient::new();
        let calls = AtomicUsize::new(0);

        assert_eq!(counted_read(&cache, &calls, 1).await.unwrap(), 1);
        assert_eq!(counted_read(&cache, &calls, 2).await.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = QueryClient::new();
        let calls = AtomicUsize::new(0);

        counted_read(&cache, &calls, 1).await.unwrap();
        cache.invalidate(&["/api/thing"]);
        assert!(cache.is_stale("/api/thing"));

        assert_eq!(counted_read(&cache, &calls, 2).await.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!cache.is_stale("/api/thing"));
    }

    #[tokio::test]
    async fn test_stale_time_expires_entries() {
        let cache = QueryClient::with_stale_time(Some(Duration::from_millis(10)));
        let calls = AtomicUsize::new(0);

        counted_read(&cache, &calls, 1).await.unwrap();
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert!(cache.is_stale("/api/thing"));

        assert_eq!(counted_read(&cache, &calls, 2).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_old_entry() {
        let cache = QueryClient::new();
        cache.set_data("/api/thing", &5u32).unwrap();
        cache.invalidate(&["/api/thing"]);

        let result: ApiResult<u32> = cache
            .read("/api/thing", || async { Err(ApiError::Config("boom".to_string())) })
            .await;

        assert!(result.is_err());
        assert_eq!(cache.peek::<u32>("/api/thing"), Some(5));
        assert!(cache.is_stale("/api/thing"));
    }

    #[tokio::test]
    async fn test_mutate_invalidates_only_on_success() {
        let cache = QueryClient::new();
        cache.set_data("a", &1u32).unwrap();
        cache.set_data("b", &2u32).unwrap();

        let failed: ApiResult<()> = cache
            .mutate(&["a", "b"], || async { Err(ApiError::Config("nope".to_string())) })
            .await;
        assert!(failed.is_err());
        assert!(!cache.is_stale("a"));
        assert!(!cache.is_stale("b"));

        cache.mutate(&["a"], || async { Ok(()) }).await.unwrap();
        assert!(cache.is_stale("a"));
        assert!(!cache.is_stale("b"));
    }

    #[tokio::test]
    async fn test_shape_mismatch_refetches() {
        let cache = QueryClient::new();
        cache.set_data("/api/thing", &"not a number").unwrap();
        let calls = AtomicUsize::new(0);

        assert_eq!(counted_read(&cache, &calls, 7).await.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mutation_during_fetch_keeps_result_stale() {
        let cache = QueryClient::new();
        let calls = AtomicUsize::new(0);
        let (release, wait) = tokio::sync::oneshot::channel::<u32>();

        let slow_read = cache.read("/api/accounts", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<u32, ApiError>(wait.await.unwrap_or(0))
        });
        let connect = async {
            tokio::task::yield_now().await;
            cache
                .mutate(&["/api/accounts"], || async { Ok::<(), ApiError>(()) })
                .await
                .unwrap();
            release.send(1).unwrap();
        };
        let (old, ()) = tokio::join!(slow_read, connect);

        assert_eq!(old.unwrap(), 1);
        assert!(cache.is_stale("/api/accounts"));
        let fresh: u32 = cache
            .read("/api/accounts", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(2)
            })
            .await
            .unwrap();
        assert_eq!(fresh, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidation_before_fetch_does_not_leak_into_next_fetch() {
        let cache = QueryClient::new();
        cache.invalidate(&["/api/posts"]);

        let value: u32 = cache.read("/api/posts", || async { Ok(3) }).await.unwrap();

        assert_eq!(value, 3);
        assert!(!cache.is_stale("/api/posts"));
    }

    #[test]
    fn test_missing_key_is_stale() {
        let cache = QueryClient::new();
        assert!(cache.is_stale("/api/never"));
        assert!(cache.peek::<u32>("/api/never").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_all_and_clear() {
        let cache = QueryClient::new();
        cache.set_data("a", &1u32).unwrap();
        cache.set_data("b", &2u32).unwrap();

        cache.invalidate_all();
        assert!(cache.is_stale("a") && cache.is_stale("b"));

        cache.remove("a");
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
