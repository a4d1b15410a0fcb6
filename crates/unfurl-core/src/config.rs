//! Remote configuration document.
//!
//! The configuration is fetched once per process (or per explicit
//! invalidation) and treated as opaque apart from the provider endpoint
//! it carries.

use serde::Deserialize;

/// The remote configuration document.
///
/// Fetched from the configuration URL at refresh time. Immutable after
/// fetch; the cache replaces it wholesale rather than patching fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// oEmbed section of the configuration.
    pub oembed: OembedConfig,
}

impl ProviderConfig {
    /// The endpoint the provider directory is fetched from.
    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.oembed.endpoint
    }
}

/// oEmbed-specific configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OembedConfig {
    /// URL of the provider directory.
    pub endpoint: String,
}
