//! Shared test transport.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use unfurl::prelude::*;

/// Install a test subscriber so `RUST_LOG` controls trace output.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Transport backed by in-memory fixtures with switchable failures.
pub struct FixtureTransport {
    providers: std::sync::Mutex<Vec<Provider>>,
    pub fail_config: AtomicBool,
    pub fail_providers: AtomicBool,
    pub config_calls: AtomicUsize,
    pub provider_calls: AtomicUsize,
    pub page_calls: AtomicUsize,
}

impl FixtureTransport {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self {
            providers: std::sync::Mutex::new(providers),
            fail_config: AtomicBool::new(false),
            fail_providers: AtomicBool::new(false),
            config_calls: AtomicUsize::new(0),
            provider_calls: AtomicUsize::new(0),
            page_calls: AtomicUsize::new(0),
        }
    }

    /// A small realistic directory: two video providers and a blog host.
    pub fn directory() -> Vec<Provider> {
        vec![
            Provider::with_endpoint(
                "TubeSite",
                Endpoint::new(
                    "https://tube.example/oembed",
                    ["https://*.tube.example/watch*", "https://tu.be/*"],
                ),
            ),
            Provider::with_endpoint(
                "ClipSite",
                Endpoint::new("https://clips.example/api/oembed", ["https://clips.example/*"]),
            ),
            Provider::with_endpoint(
                "BlogHost",
                Endpoint::new("https://blog.example/oembed", ["https://blog.example/*"]),
            ),
        ]
    }

    /// Replace the provider fixtures served by the next fetch.
    pub fn set_providers(&self, providers: Vec<Provider>) {
        *self.providers.lock().unwrap() = providers;
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn fetch_config(&self) -> UnfurlResult<ProviderConfig> {
        self.config_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_config.load(Ordering::SeqCst) {
            return Err(UnfurlError::ConfigFetch {
                message: "fixture failure".to_string(),
                source: None,
            });
        }
        Ok(ProviderConfig {
            oembed: OembedConfig {
                endpoint: "https://directory.example/providers.json".to_string(),
            },
        })
    }

    async fn fetch_providers(&self, _endpoint: &str) -> UnfurlResult<Vec<Provider>> {
        self.provider_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_providers.load(Ordering::SeqCst) {
            return Err(UnfurlError::ProviderFetch {
                endpoint: "https://directory.example/providers.json".to_string(),
                message: "fixture failure".to_string(),
                source: None,
            });
        }
        Ok(self.providers.lock().unwrap().clone())
    }

    async fn fetch_page(&self, resolve_url: &str, target_url: &str) -> UnfurlResult<PageInfo> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        Ok(PageInfo {
            title: Some(format!("Page at {target_url}")),
            provider_name: Some(resolve_url.to_string()),
            url: Some(target_url.to_string()),
            ..PageInfo::default()
        })
    }
}
