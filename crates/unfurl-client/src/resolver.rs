//! Resolver facade: URL in, page metadata out.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;
use unfurl_cache::SchemaCache;
use unfurl_core::{PageInfo, Result, Transport, UnfurlError};

/// The lookup/load entry point for callers needing page metadata.
///
/// A load resolves the URL against the table snapshot current at call
/// time; it never waits for an in-flight refresh. Callers needing a
/// populated table should observe at least one
/// [`CacheLoaded`](unfurl_cache::CacheEvent::CacheLoaded) event first.
///
/// Cheap to clone; both fields are shared handles.
#[derive(Clone)]
pub struct Resolver {
    cache: Arc<SchemaCache>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    /// Create a resolver over a cache and a transport.
    pub fn new(cache: Arc<SchemaCache>, transport: Arc<dyn Transport>) -> Self {
        Self { cache, transport }
    }

    /// The cache this resolver reads from.
    #[inline]
    pub fn cache(&self) -> &Arc<SchemaCache> {
        &self.cache
    }

    /// Resolve a URL and fetch its page metadata.
    ///
    /// Returns [`UnfurlError::SchemeNotFound`] when no scheme pattern in
    /// the current table matches, and a fetch/decode error when the
    /// matched endpoint fails. The two outcomes are never conflated.
    pub async fn load(&self, url: &str) -> Result<PageInfo> {
        let Some(endpoint) = self.cache.lookup(url) else {
            return Err(UnfurlError::SchemeNotFound {
                url: url.to_string(),
            });
        };

        debug!(url, endpoint = %endpoint, "resolving page metadata");
        self.transport.fetch_page(&endpoint, url).await
    }

    /// Run [`Self::load`] on its own task and return the handle.
    ///
    /// For callers that want callback-style completion instead of
    /// awaiting inline.
    pub fn spawn_load(&self, url: impl Into<String>) -> JoinHandle<Result<PageInfo>> {
        let resolver = self.clone();
        let url = url.into();
        tokio::spawn(async move { resolver.load(&url).await })
    }
}
