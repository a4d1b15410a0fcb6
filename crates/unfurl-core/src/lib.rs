//! # unfurl-core
//!
//! Core types, traits, and error handling for the unfurl link-resolution crates.
//!
//! This crate provides the foundational types used across all other unfurl crates:
//!
//! - [`UnfurlError`] - Error type covering fetch, decode, and lifecycle failures
//! - [`ProviderConfig`] - Remote configuration document (carries the provider endpoint)
//! - [`Provider`] / [`Endpoint`] - Provider directory entries with their scheme patterns
//! - [`PageInfo`] - Decoded oEmbed page metadata
//! - [`Transport`] - Trait for the remote fetch seam
//! - [`scheme_matches`] - Wildcard matching of URLs against scheme patterns
//!
//! ## Example
//!
//! ```rust
//! use unfurl_core::scheme_matches;
//!
//! assert!(scheme_matches(
//!     "https://twitter.com/*/status/*",
//!     "https://twitter.com/rustlang/status/123",
//! ));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod page;
mod provider;
mod scheme;
mod transport;

pub use config::{OembedConfig, ProviderConfig};
pub use error::UnfurlError;
pub use page::PageInfo;
pub use provider::{Endpoint, Provider};
pub use scheme::scheme_matches;
pub use transport::Transport;

/// Result type alias using [`UnfurlError`].
pub type Result<T> = std::result::Result<T, UnfurlError>;

/// Alias for [`Result`] usable alongside `std::result::Result` imports.
pub type UnfurlResult<T> = Result<T>;
