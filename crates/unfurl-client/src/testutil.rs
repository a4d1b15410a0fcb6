//! Test doubles shared across this crate's unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use unfurl_core::{
    Endpoint, OembedConfig, PageInfo, Provider, ProviderConfig, Result, Transport, UnfurlError,
};

/// Transport serving a fixed provider directory and canned page metadata.
pub(crate) struct StaticTransport {
    providers: Vec<Provider>,
    pub(crate) fail_pages: AtomicBool,
    pub(crate) page_calls: AtomicUsize,
    /// `(resolve_url, target_url)` of the last page fetch.
    pub(crate) last_page_fetch: Mutex<Option<(String, String)>>,
}

impl StaticTransport {
    pub(crate) fn new(providers: Vec<Provider>) -> Self {
        Self {
            providers,
            fail_pages: AtomicBool::new(false),
            page_calls: AtomicUsize::new(0),
            last_page_fetch: Mutex::new(None),
        }
    }

    /// One provider resolving `https://v.example/*` via `https://v.example/oembed`.
    pub(crate) fn single_video_provider() -> Self {
        Self::new(vec![Provider::with_endpoint(
            "Video",
            Endpoint::new("https://v.example/oembed", ["https://v.example/*"]),
        )])
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn fetch_config(&self) -> Result<ProviderConfig> {
        Ok(ProviderConfig {
            oembed: OembedConfig {
                endpoint: "https://directory.example/providers.json".to_string(),
            },
        })
    }

    async fn fetch_providers(&self, _endpoint: &str) -> Result<Vec<Provider>> {
        Ok(self.providers.clone())
    }

    async fn fetch_page(&self, resolve_url: &str, target_url: &str) -> Result<PageInfo> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_page_fetch.lock().unwrap() =
            Some((resolve_url.to_string(), target_url.to_string()));

        if self.fail_pages.load(Ordering::SeqCst) {
            return Err(UnfurlError::PageFetch {
                url: target_url.to_string(),
                message: "canned failure".to_string(),
                source: None,
            });
        }

        Ok(PageInfo {
            title: Some("Example Page".to_string()),
            provider_name: Some("Video".to_string()),
            url: Some(target_url.to_string()),
            ..PageInfo::default()
        })
    }
}
