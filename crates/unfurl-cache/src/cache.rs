//! The schema cache and its refresh protocol.
//!
//! [`SchemaCache`] owns the remote configuration, the provider
//! directory, and the derived scheme table. Configuration and providers
//! are fetched at most once each (until [`SchemaCache::invalidate`]);
//! the table is rebuilt from scratch on every successful refresh and
//! swapped in atomically, so readers never observe a half-built table.
//!
//! ## Important
//!
//! The fetch-state mutex is the single-flight guard: a refresh trigger
//! that finds it locked joins the in-flight refresh as a no-op instead
//! of racing duplicate fetches and table swaps.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};
use unfurl_core::{Provider, ProviderConfig, Transport};

use crate::events::{CacheEvent, EventBus};
use crate::stats::CacheStats;
use crate::table::SchemeTable;

/// Remote state fetched at most once per generation.
#[derive(Debug, Default)]
struct FetchState {
    config: Option<ProviderConfig>,
    providers: Option<Vec<Provider>>,
}

/// Process-wide endpoint-schema cache.
///
/// Constructed explicitly by the host and shared behind an `Arc`;
/// refreshes run on the tokio runtime and never block the trigger.
///
/// ## Thread Safety
///
/// The published table sits behind a briefly-held `RwLock` around an
/// `Arc` snapshot; lookups clone the `Arc` and drop the lock before any
/// matching work. Fetch state is only touched by the refresh holding
/// the single-flight mutex.
pub struct SchemaCache {
    /// Remote fetch seam.
    transport: Arc<dyn Transport>,
    /// Notification channel, shared with the host.
    events: Arc<EventBus>,
    /// Configuration and providers; the mutex doubles as the
    /// single-flight guard for refresh.
    fetch_state: tokio::sync::Mutex<FetchState>,
    /// Currently published table snapshot.
    table: std::sync::RwLock<Arc<SchemeTable>>,
    /// Refresh generation counter.
    generation: AtomicU64,
    /// Statistics.
    stats: CacheStats,
}

impl std::fmt::Debug for SchemaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaCache")
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl SchemaCache {
    /// Create a cache with its own event bus.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::builder(transport).build()
    }

    /// Create a cache builder.
    pub fn builder(transport: Arc<dyn Transport>) -> SchemaCacheBuilder {
        SchemaCacheBuilder {
            transport,
            events: None,
            event_buffer_size: None,
        }
    }

    /// The notification channel this cache publishes on.
    #[inline]
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Cache statistics.
    #[inline]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Clone out the currently published table snapshot.
    pub fn table(&self) -> Arc<SchemeTable> {
        Arc::clone(&self.table.read().expect("table lock poisoned"))
    }

    /// Resolve a URL against the current table snapshot.
    ///
    /// Uses whatever table exists at call time; never waits for an
    /// in-flight refresh.
    pub fn lookup(&self, url: &str) -> Option<String> {
        let table = self.table();
        let result = table.resolve(url).map(str::to_string);
        if result.is_some() {
            self.stats.record_hit();
            trace!(url, "scheme lookup hit");
        } else {
            self.stats.record_miss();
            trace!(url, "scheme lookup miss");
        }
        result
    }

    /// React to an application foreground/background transition.
    ///
    /// Foreground transitions schedule a refresh on the runtime and
    /// return immediately; background transitions are ignored.
    pub fn on_app_state_changed(self: &Arc<Self>, foreground: bool) {
        debug!(foreground, "application state changed");
        if foreground {
            let cache = Arc::clone(self);
            tokio::spawn(async move {
                cache.refresh().await;
            });
        }
    }

    /// Subscribe this cache to its notification channel and react to
    /// [`CacheEvent::AppStateChanged`] events published by the host.
    ///
    /// Returns the handle of the spawned listener task.
    pub fn listen(self: &Arc<Self>) -> JoinHandle<()> {
        let mut subscription = self.events.subscribe();
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                if let CacheEvent::AppStateChanged { foreground } = event {
                    cache.on_app_state_changed(foreground);
                }
            }
        })
    }

    /// Ensure configuration and providers are present, then rebuild and
    /// publish the scheme table.
    ///
    /// Returns `true` when the refresh reached the notification step,
    /// `false` when it joined an in-flight refresh or a fetch failed.
    /// Fetch failures leave all state untouched; the next foreground
    /// trigger retries.
    pub async fn refresh(&self) -> bool {
        // Single-flight: a trigger arriving mid-refresh is a no-op join.
        let Ok(mut state) = self.fetch_state.try_lock() else {
            self.stats.record_refresh_joined();
            debug!("refresh already in flight, joining");
            return false;
        };

        let started = Instant::now();
        self.stats.record_refresh_started();

        if state.config.is_none() {
            self.stats.record_config_fetch();
            match self.transport.fetch_config().await {
                Ok(config) => {
                    debug!(endpoint = %config.endpoint(), "fetched configuration");
                    state.config = Some(config);
                }
                Err(err) => {
                    self.stats.record_fetch_failure();
                    warn!(error = %err, "configuration fetch failed, skipping refresh");
                    return false;
                }
            }
        }

        if state.providers.is_none() {
            if let Some(config) = &state.config {
                self.stats.record_provider_fetch();
                match self.transport.fetch_providers(config.endpoint()).await {
                    Ok(providers) => {
                        debug!(count = providers.len(), "fetched providers");
                        state.providers = Some(providers);
                    }
                    Err(err) => {
                        self.stats.record_fetch_failure();
                        warn!(error = %err, "provider fetch failed, skipping refresh");
                        return false;
                    }
                }
            }
        }

        if let Some(providers) = &state.providers {
            let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
            let table = SchemeTable::from_providers(providers, generation);
            debug!(generation, schemes = table.len(), "rebuilt scheme table");
            *self.table.write().expect("table lock poisoned") = Arc::new(table);
            self.stats.record_table_rebuild();
        }

        self.events.publish(CacheEvent::CacheLoaded);
        self.stats.record_refresh_completed();
        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "cache refresh complete"
        );
        true
    }

    /// Drop the cached configuration and providers so the next refresh
    /// re-fetches both.
    ///
    /// The published table is left in place until that refresh succeeds.
    pub async fn invalidate(&self) {
        let mut state = self.fetch_state.lock().await;
        state.config = None;
        state.providers = None;
        debug!("cache invalidated, next refresh re-fetches remote state");
    }
}

/// Builder for creating a configured [`SchemaCache`].
pub struct SchemaCacheBuilder {
    transport: Arc<dyn Transport>,
    events: Option<Arc<EventBus>>,
    event_buffer_size: Option<usize>,
}

impl SchemaCacheBuilder {
    /// Share an existing event bus instead of creating one.
    pub fn events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Set the subscription buffer size of the bus the cache creates.
    ///
    /// Ignored when an existing bus is supplied via [`Self::events`].
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    /// Build the cache.
    pub fn build(self) -> SchemaCache {
        let events = self.events.unwrap_or_else(|| {
            Arc::new(EventBus::with_buffer_size(
                self.event_buffer_size.unwrap_or(16),
            ))
        });

        SchemaCache {
            transport: self.transport,
            events,
            fetch_state: tokio::sync::Mutex::new(FetchState::default()),
            table: std::sync::RwLock::new(Arc::new(SchemeTable::default())),
            generation: AtomicU64::new(0),
            stats: CacheStats::new(),
        }
    }
}
