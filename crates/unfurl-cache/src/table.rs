//! Scheme table: immutable mapping from scheme patterns to endpoint URLs.
//!
//! A scheme table represents one complete generation of provider data.
//! Tables are:
//!
//! - **Immutable**: Once built, a table cannot be modified
//! - **Generational**: Each table carries the refresh generation it was
//!   built from
//! - **Replaced wholesale**: The cache swaps in a fresh table on every
//!   successful rebuild, never patches one in place

use std::collections::HashMap;
use std::sync::Arc;

use unfurl_core::{scheme_matches, Provider};

/// An immutable mapping from scheme pattern to resolution endpoint URL.
///
/// Built from a provider directory by [`SchemeTableBuilder`]; for
/// duplicate scheme patterns the last insertion wins.
#[derive(Debug, Clone, Default)]
pub struct SchemeTable {
    /// Scheme pattern to endpoint URL.
    entries: HashMap<String, String>,
    /// Refresh generation this table was built from. Generation 0 is the
    /// empty table a cache starts with.
    generation: u64,
    /// Build timestamp.
    built_at: Option<std::time::Instant>,
}

impl SchemeTable {
    /// Create a new table builder.
    pub fn builder() -> SchemeTableBuilder {
        SchemeTableBuilder::new()
    }

    /// Build a table from a provider directory.
    ///
    /// Providers without endpoints and endpoints without schemes are
    /// skipped; later duplicate schemes overwrite earlier ones.
    pub fn from_providers(providers: &[Provider], generation: u64) -> Self {
        let mut builder = Self::builder().generation(generation);
        for provider in providers {
            for endpoint in &provider.endpoints {
                for scheme in &endpoint.schemes {
                    builder = builder.entry(scheme.clone(), endpoint.url.clone());
                }
            }
        }
        builder.build()
    }

    /// Resolve a URL to its endpoint URL.
    ///
    /// Exact pattern matches are checked first; otherwise patterns are
    /// scanned with wildcard matching.
    pub fn resolve(&self, url: &str) -> Option<&str> {
        if let Some(endpoint) = self.entries.get(url) {
            return Some(endpoint.as_str());
        }
        self.entries
            .iter()
            .find(|(scheme, _)| scheme_matches(scheme, url))
            .map(|(_, endpoint)| endpoint.as_str())
    }

    /// Look up a scheme pattern verbatim.
    #[inline]
    pub fn get(&self, scheme: &str) -> Option<&str> {
        self.entries.get(scheme).map(String::as_str)
    }

    /// Refresh generation this table was built from.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Build timestamp, `None` for the initial empty table.
    #[inline]
    pub fn built_at(&self) -> Option<std::time::Instant> {
        self.built_at
    }

    /// Number of scheme entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(scheme, endpoint_url)` entries.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }
}

/// Builder for creating scheme tables.
#[derive(Debug, Default)]
pub struct SchemeTableBuilder {
    entries: HashMap<String, String>,
    generation: u64,
}

impl SchemeTableBuilder {
    /// Create a new table builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the refresh generation.
    pub fn generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Insert a scheme pattern, overwriting any earlier entry for it.
    pub fn entry(mut self, scheme: impl Into<String>, endpoint_url: impl Into<String>) -> Self {
        self.entries.insert(scheme.into(), endpoint_url.into());
        self
    }

    /// Build the table.
    pub fn build(self) -> SchemeTable {
        SchemeTable {
            entries: self.entries,
            generation: self.generation,
            built_at: Some(std::time::Instant::now()),
        }
    }
}

/// Wrapper around `Arc<SchemeTable>` for convenient sharing.
pub type SharedSchemeTable = Arc<SchemeTable>;
