//! Error types for unfurl operations.
//!
//! This module provides [`UnfurlError`], the error type shared by the cache,
//! transport, and resolver crates.

/// Error type for unfurl operations.
///
/// This error type is designed to:
/// - Cover all failure modes without using panics
/// - Keep not-found and fetch-failure outcomes distinct for resolver callers
/// - Support error chaining via the `source` field
///
/// # Example
///
/// ```rust
/// use unfurl_core::UnfurlError;
///
/// fn require_url(url: &str) -> Result<(), UnfurlError> {
///     if url.is_empty() {
///         return Err(UnfurlError::SchemeNotFound {
///             url: url.to_string(),
///         });
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum UnfurlError {
    /// Fetching the remote configuration document failed.
    #[error("configuration fetch failed: {message}")]
    ConfigFetch {
        /// Description of the failure.
        message: String,
        /// Optional underlying error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Fetching the provider list failed.
    #[error("provider fetch failed from {endpoint}: {message}")]
    ProviderFetch {
        /// Endpoint the providers were requested from.
        endpoint: String,
        /// Description of the failure.
        message: String,
        /// Optional underlying error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Fetching page metadata from a resolution endpoint failed.
    #[error("page fetch failed for {url}: {message}")]
    PageFetch {
        /// The URL being resolved.
        url: String,
        /// Description of the failure.
        message: String,
        /// Optional underlying error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A remote payload could not be decoded.
    #[error("decode error in {context}: {message}")]
    Decode {
        /// What was being decoded.
        context: String,
        /// Error message.
        message: String,
    },

    /// No known scheme pattern matches the URL.
    #[error("no scheme matches url: {url}")]
    SchemeNotFound {
        /// The URL that failed to match.
        url: String,
    },

    /// The service handle was used before a resolver was installed.
    #[error("unfurl service used before initialization")]
    Uninitialized,

    /// The service handle was installed twice.
    #[error("unfurl service already initialized")]
    AlreadyInitialized,

    /// Unexpected internal error.
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
        /// Optional underlying error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl UnfurlError {
    /// Create a configuration-fetch error from any error type.
    pub fn config_fetch<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigFetch {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a provider-fetch error from any error type.
    pub fn provider_fetch<E>(endpoint: impl Into<String>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ProviderFetch {
            endpoint: endpoint.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a page-fetch error from any error type.
    pub fn page_fetch<E>(url: impl Into<String>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::PageFetch {
            url: url.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error from any error type.
    pub fn internal<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True when the error is a not-found outcome rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SchemeNotFound { .. })
    }
}
