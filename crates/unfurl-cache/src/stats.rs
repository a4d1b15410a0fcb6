//! Cache statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for cache operations.
///
/// All counters are atomic and can be safely accessed from multiple threads.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Refresh attempts that acquired the refresh guard.
    refreshes_started: AtomicU64,
    /// Refreshes that reached the notification step.
    refreshes_completed: AtomicU64,
    /// Refresh triggers that joined an in-flight refresh.
    refreshes_joined: AtomicU64,
    /// Configuration documents fetched.
    config_fetches: AtomicU64,
    /// Provider directories fetched.
    provider_fetches: AtomicU64,
    /// Transport failures during refresh.
    fetch_failures: AtomicU64,
    /// Scheme table rebuilds.
    table_rebuilds: AtomicU64,
    /// Lookups that matched a scheme.
    lookup_hits: AtomicU64,
    /// Lookups that matched nothing.
    lookup_misses: AtomicU64,
}

impl CacheStats {
    /// Create new cache statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a refresh start.
    #[inline]
    pub fn record_refresh_started(&self) {
        self.refreshes_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed refresh.
    #[inline]
    pub fn record_refresh_completed(&self) {
        self.refreshes_completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a trigger that joined an in-flight refresh.
    #[inline]
    pub fn record_refresh_joined(&self) {
        self.refreshes_joined.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a configuration fetch.
    #[inline]
    pub fn record_config_fetch(&self) {
        self.config_fetches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a provider fetch.
    #[inline]
    pub fn record_provider_fetch(&self) {
        self.provider_fetches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a transport failure.
    #[inline]
    pub fn record_fetch_failure(&self) {
        self.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a table rebuild.
    #[inline]
    pub fn record_table_rebuild(&self) {
        self.table_rebuilds.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup hit.
    #[inline]
    pub fn record_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup miss.
    #[inline]
    pub fn record_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total refreshes started.
    #[inline]
    pub fn refreshes_started(&self) -> u64 {
        self.refreshes_started.load(Ordering::Relaxed)
    }

    /// Get total refreshes completed.
    #[inline]
    pub fn refreshes_completed(&self) -> u64 {
        self.refreshes_completed.load(Ordering::Relaxed)
    }

    /// Get total triggers that joined an in-flight refresh.
    #[inline]
    pub fn refreshes_joined(&self) -> u64 {
        self.refreshes_joined.load(Ordering::Relaxed)
    }

    /// Get total configuration fetches.
    #[inline]
    pub fn config_fetches(&self) -> u64 {
        self.config_fetches.load(Ordering::Relaxed)
    }

    /// Get total provider fetches.
    #[inline]
    pub fn provider_fetches(&self) -> u64 {
        self.provider_fetches.load(Ordering::Relaxed)
    }

    /// Get total transport failures.
    #[inline]
    pub fn fetch_failures(&self) -> u64 {
        self.fetch_failures.load(Ordering::Relaxed)
    }

    /// Get total table rebuilds.
    #[inline]
    pub fn table_rebuilds(&self) -> u64 {
        self.table_rebuilds.load(Ordering::Relaxed)
    }

    /// Get total lookup hits.
    #[inline]
    pub fn lookup_hits(&self) -> u64 {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    /// Get total lookup misses.
    #[inline]
    pub fn lookup_misses(&self) -> u64 {
        self.lookup_misses.load(Ordering::Relaxed)
    }

    /// Calculate lookup hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let hits = self.lookup_hits() as f64;
        let total = hits + self.lookup_misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    /// Reset all statistics.
    pub fn reset(&self) {
        self.refreshes_started.store(0, Ordering::Relaxed);
        self.refreshes_completed.store(0, Ordering::Relaxed);
        self.refreshes_joined.store(0, Ordering::Relaxed);
        self.config_fetches.store(0, Ordering::Relaxed);
        self.provider_fetches.store(0, Ordering::Relaxed);
        self.fetch_failures.store(0, Ordering::Relaxed);
        self.table_rebuilds.store(0, Ordering::Relaxed);
        self.lookup_hits.store(0, Ordering::Relaxed);
        self.lookup_misses.store(0, Ordering::Relaxed);
    }
}
