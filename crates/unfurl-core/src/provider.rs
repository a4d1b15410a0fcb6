//! Provider directory entries.
//!
//! Providers follow the shape of the public oEmbed providers listing:
//! each provider declares one or more endpoints, and each endpoint
//! declares the scheme patterns it can resolve.

use serde::Deserialize;

/// A remote content source comprising one or more endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Provider {
    /// Human-readable provider name.
    #[serde(default)]
    pub provider_name: String,
    /// The provider's home URL.
    #[serde(default)]
    pub provider_url: String,
    /// Resolution endpoints declared by this provider.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl Provider {
    /// Create a provider with a single endpoint.
    ///
    /// Convenience for tests and hand-built directories.
    pub fn with_endpoint(name: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            provider_name: name.into(),
            provider_url: String::new(),
            endpoints: vec![endpoint],
        }
    }
}

/// A resolution URL plus the scheme patterns it services.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Endpoint {
    /// URL the page-metadata request is sent to.
    pub url: String,
    /// Scheme patterns this endpoint resolves. May be empty, in which
    /// case the endpoint contributes nothing to the scheme table.
    #[serde(default)]
    pub schemes: Vec<String>,
    /// Whether the endpoint supports oEmbed discovery.
    #[serde(default)]
    pub discovery: bool,
}

impl Endpoint {
    /// Create an endpoint from a URL and scheme patterns.
    pub fn new(url: impl Into<String>, schemes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            url: url.into(),
            schemes: schemes.into_iter().map(Into::into).collect(),
            discovery: false,
        }
    }
}
