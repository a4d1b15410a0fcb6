//! # unfurl-cache
//!
//! Endpoint-schema cache for oEmbed-style link resolution.
//!
//! This crate provides the caching layer of the unfurl crates:
//!
//! - [`SchemaCache`] - owns the configuration, provider list, and derived
//!   scheme table; runs the single-flight refresh protocol
//! - [`SchemeTable`] - immutable scheme-pattern to endpoint-URL mapping
//! - [`EventBus`] - in-process publish/subscribe for cache events
//!
//! ## Key Design Decisions
//!
//! - The scheme table is immutable and atomically replaced; readers take
//!   an `Arc` snapshot and never observe a partially-built table
//! - Configuration and providers are fetched at most once each until
//!   explicitly invalidated; only the derived table is rebuilt per refresh
//! - Overlapping refresh triggers join the in-flight refresh as no-ops
//! - Event delivery never blocks the publisher
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use unfurl_cache::{CacheEvent, SchemaCache};
//!
//! let cache = Arc::new(SchemaCache::new(transport));
//! let mut loaded = cache.events().subscribe();
//!
//! cache.on_app_state_changed(true);
//! loaded.recv().await; // CacheEvent::CacheLoaded
//!
//! let endpoint = cache.lookup("https://youtu.be/dQw4w9WgXcQ");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod events;
mod stats;
mod table;

pub use cache::{SchemaCache, SchemaCacheBuilder};
pub use events::{CacheEvent, EventBus, Subscription, SubscriptionId};
pub use stats::CacheStats;
pub use table::{SchemeTable, SchemeTableBuilder, SharedSchemeTable};
