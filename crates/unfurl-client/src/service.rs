//! Process-wide service handle.
//!
//! Replaces a lazily-initialized static singleton with an explicit
//! install-once cell: the host constructs the cache and resolver during
//! startup and installs them here. Using the handle before install
//! fails fast with [`UnfurlError::Uninitialized`] instead of crashing
//! through a dangling reference.

use std::sync::OnceLock;

use tracing::debug;
use unfurl_core::{PageInfo, Result, UnfurlError};

use crate::resolver::Resolver;

/// Install-once cell holding the process's [`Resolver`].
///
/// Hosts that prefer pure dependency injection can ignore this type and
/// pass `Resolver` handles around directly; the cell exists for callers
/// that need a process-wide entry point.
#[derive(Debug, Default)]
pub struct ServiceHandle {
    inner: OnceLock<Resolver>,
}

impl ServiceHandle {
    /// Create an empty handle.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Install the resolver.
    ///
    /// Errors with [`UnfurlError::AlreadyInitialized`] on a second call.
    pub fn install(&self, resolver: Resolver) -> Result<()> {
        self.inner
            .set(resolver)
            .map_err(|_| UnfurlError::AlreadyInitialized)?;
        debug!("unfurl service installed");
        Ok(())
    }

    /// Get the installed resolver.
    ///
    /// Errors with [`UnfurlError::Uninitialized`] before install.
    pub fn get(&self) -> Result<&Resolver> {
        self.inner.get().ok_or(UnfurlError::Uninitialized)
    }

    /// Whether a resolver has been installed.
    #[inline]
    pub fn is_installed(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Load page metadata through the installed resolver.
    pub async fn load(&self, url: &str) -> Result<PageInfo> {
        self.get()?.load(url).await
    }
}

static GLOBAL: ServiceHandle = ServiceHandle::new();

/// The process-wide service handle.
pub fn global() -> &'static ServiceHandle {
    &GLOBAL
}
