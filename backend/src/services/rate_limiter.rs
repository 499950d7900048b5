//! Fixed-window rate limiting for the contact endpoint
//!
//! The counter store is injected behind a trait so the limiter stays
//! testable and can be swapped for a distributed store without touching
//! call sites. Windows reset lazily per key on first increment after expiry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::config::RateLimitConfig;
use crate::utils::{ApiError, ApiResult};

/// Counter store contract: bump the counter for `key` in its current window
/// and return the new count.
pub trait RateLimitStore: Send + Sync {
    fn increment(&self, key: &str) -> u32;
}

struct Window {
    started_at: Instant,
    count: u32,
}

/// In-process store keyed by client IP.
pub struct InMemoryRateLimitStore {
    window: Duration,
    counters: DashMap<String, Window>,
}

impl InMemoryRateLimitStore {
    pub fn new(window: Duration) -> Self {
        Self { window, counters: DashMap::new() }
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    fn increment(&self, key: &str) -> u32 {
        let mut entry = self
            .counters
            .entry(key.to_string())
            .or_insert_with(|| Window { started_at: Instant::now(), count: 0 });

        if entry.started_at.elapsed() >= self.window {
            entry.started_at = Instant::now();
            entry.count = 0;
        }
        entry.count += 1;
        entry.count
    }
}

/// Enforces the configured request budget per key per window.
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    max_requests: u32,
    window_secs: u64,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        let store = Arc::new(InMemoryRateLimitStore::new(Duration::from_secs(config.window_secs)));
        Self::with_store(store, config.max_requests, config.window_secs)
    }

    pub fn with_store(store: Arc<dyn RateLimitStore>, max_requests: u32, window_secs: u64) -> Self {
        Self { store, max_requests, window_secs }
    }

    /// Count this request against `key`, rejecting with a 429 carrying the
    /// window length as Retry-After once the budget is spent.
    pub fn check(&self, key: &str) -> ApiResult<()> {
        let count = self.store.increment(key);
        if count > self.max_requests {
            tracing::warn!("Rate limit exceeded for {} ({} requests)", key, count);
            return Err(ApiError::rate_limited(self.window_secs));
        }
        Ok(())
    }
}
