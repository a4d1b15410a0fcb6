//! # unfurl
//!
//! oEmbed endpoint-schema cache and link resolver for Rust.
//!
//! This crate provides a process-wide cache that lazily fetches a remote
//! configuration and provider directory, derives a scheme-pattern to
//! endpoint lookup table, refreshes it on application foreground
//! transitions, and resolves URLs into page metadata.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use unfurl::prelude::*;
//!
//! // Construct the pieces during host startup
//! let transport = Arc::new(HttpTransport::new("https://config.example/unfurl.json"));
//! let cache = Arc::new(SchemaCache::new(transport.clone()));
//! let resolver = Resolver::new(cache.clone(), transport);
//!
//! // Wire the cache to lifecycle events and wait for the first load
//! let mut loaded = cache.events().subscribe();
//! cache.on_app_state_changed(true);
//! loaded.recv().await;
//!
//! // Resolve a URL
//! let info = resolver.load("https://youtu.be/dQw4w9WgXcQ").await?;
//! ```
//!
//! ## Architecture
//!
//! This library is organized into several crates:
//!
//! - `unfurl-core` - Core types, the `Transport` seam, and error handling
//! - `unfurl-cache` - Schema cache with single-flight refresh and event bus
//! - `unfurl-client` - HTTP transport, resolver facade, and service handle
//!
//! This crate (`unfurl`) re-exports all public APIs for convenience.
//!
//! ## Design Principles
//!
//! 1. **No panics in library code** - All errors are returned as `Result`
//! 2. **Snapshot publication** - Readers only ever see a complete scheme table
//! 3. **At-most-once remote state** - Configuration and providers are cached
//!    until explicitly invalidated; only the derived table is rebuilt
//! 4. **Observable** - Built-in stats and tracing support

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Re-export all sub-crates
pub use unfurl_cache as cache;
pub use unfurl_client as client;
pub use unfurl_core as core;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use unfurl::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use unfurl_core::{
        scheme_matches, Endpoint, OembedConfig, PageInfo, Provider, ProviderConfig, Transport,
        UnfurlError, UnfurlResult,
    };

    // Cache types
    pub use unfurl_cache::{
        CacheEvent, CacheStats, EventBus, SchemaCache, SchemeTable, Subscription, SubscriptionId,
    };

    // Client types
    pub use unfurl_client::{global, HttpTransport, Resolver, ServiceHandle};
}

/// Version information for this crate.
pub mod version {
    /// Crate version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Minimum supported Rust version.
    pub const MSRV: &str = "1.75";

    /// Get version info as a string.
    pub fn version_string() -> String {
        format!("unfurl {} (MSRV {})", VERSION, MSRV)
    }
}
