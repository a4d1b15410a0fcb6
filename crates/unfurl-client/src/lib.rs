//! # unfurl-client
//!
//! Consumer-facing half of the unfurl crates:
//!
//! - [`HttpTransport`] - `reqwest`-backed implementation of the
//!   [`Transport`](unfurl_core::Transport) seam
//! - [`Resolver`] - resolves a URL against the cache's scheme table and
//!   fetches page metadata from the matched endpoint
//! - [`ServiceHandle`] / [`global`] - explicit install-once process-wide
//!   handle replacing a lazily-initialized singleton
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use unfurl_cache::SchemaCache;
//! use unfurl_client::{global, HttpTransport, Resolver};
//!
//! let transport = Arc::new(HttpTransport::new("https://config.example/unfurl.json"));
//! let cache = Arc::new(SchemaCache::new(transport.clone()));
//! global().install(Resolver::new(cache.clone(), transport))?;
//!
//! cache.refresh().await;
//! let info = global().load("https://youtu.be/dQw4w9WgXcQ").await?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod resolver;
mod service;

pub use http::{HttpTransport, HttpTransportBuilder};
pub use resolver::Resolver;
pub use service::{global, ServiceHandle};

#[cfg(test)]
pub(crate) mod testutil;
