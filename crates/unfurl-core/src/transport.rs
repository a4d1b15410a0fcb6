//! Transport seam for remote fetches.

use async_trait::async_trait;

use crate::{PageInfo, Provider, ProviderConfig, Result};

/// Remote fetch operations consumed by the cache and resolver.
///
/// Implementations own their timeout and connection policy; callers
/// treat every method as a single fallible attempt with no retries at
/// this layer.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the global configuration document.
    async fn fetch_config(&self) -> Result<ProviderConfig>;

    /// Fetch the provider directory from the endpoint recorded in the
    /// configuration.
    async fn fetch_providers(&self, endpoint: &str) -> Result<Vec<Provider>>;

    /// Fetch page metadata for `target_url` from a resolution endpoint.
    async fn fetch_page(&self, resolve_url: &str, target_url: &str) -> Result<PageInfo>;
}
