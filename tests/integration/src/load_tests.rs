//! Resolver load paths and concurrent lookup behavior.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use unfurl::prelude::*;

use crate::support::{init_tracing, FixtureTransport};

async fn loaded_resolver() -> (Arc<FixtureTransport>, Resolver) {
    let transport = Arc::new(FixtureTransport::new(FixtureTransport::directory()));
    let cache = Arc::new(SchemaCache::new(transport.clone()));
    assert!(cache.refresh().await);
    (transport.clone(), Resolver::new(cache, transport))
}

#[tokio::test]
async fn load_resolves_through_matched_endpoint() {
    let (transport, resolver) = loaded_resolver().await;

    let info = resolver
        .load("https://clips.example/c/abc123")
        .await
        .expect("load");

    assert_eq!(
        info.provider_name.as_deref(),
        Some("https://clips.example/api/oembed")
    );
    assert_eq!(info.url.as_deref(), Some("https://clips.example/c/abc123"));
    assert_eq!(transport.page_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn load_unknown_url_is_not_found_not_a_crash() {
    let (transport, resolver) = loaded_resolver().await;

    let err = resolver
        .load("https://somewhere-else.example/x/y")
        .await
        .expect_err("no scheme matches");

    assert!(err.is_not_found());
    assert_eq!(transport.page_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn service_handle_fails_fast_before_install() {
    let handle = ServiceHandle::new();
    let err = handle
        .load("https://tu.be/abc")
        .await
        .expect_err("nothing installed");
    assert!(matches!(err, UnfurlError::Uninitialized));
}

#[tokio::test]
async fn service_handle_serves_installed_resolver() {
    let (_transport, resolver) = loaded_resolver().await;
    let handle = ServiceHandle::new();
    handle.install(resolver).expect("install");

    let info = handle.load("https://tu.be/abc").await.expect("load");
    assert_eq!(info.url.as_deref(), Some("https://tu.be/abc"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_loads_share_one_table_snapshot() {
    let (transport, resolver) = loaded_resolver().await;

    let mut handles = Vec::new();
    for i in 0..100 {
        let resolver = resolver.clone();
        handles.push(tokio::spawn(async move {
            resolver.load(&format!("https://tu.be/video-{i}")).await
        }));
    }

    for handle in handles {
        let info = handle.await.expect("task").expect("load");
        assert!(info.url.is_some());
    }

    assert_eq!(transport.page_calls.load(Ordering::SeqCst), 100);
    assert_eq!(resolver.cache().stats().lookup_hits(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn loads_during_refresh_never_see_partial_table() {
    init_tracing();
    let transport = Arc::new(FixtureTransport::new(FixtureTransport::directory()));
    let cache = Arc::new(SchemaCache::new(transport.clone()));
    assert!(cache.refresh().await);

    // Readers hammer the table while refreshes rebuild it.
    let mut handles = Vec::new();
    for _ in 0..4 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            for _ in 0..200 {
                let table = cache.table();
                // A published table is always a complete generation.
                assert!(table.len() == 4);
                tokio::task::yield_now().await;
            }
        }));
    }
    for _ in 0..10 {
        cache.refresh().await;
        tokio::task::yield_now().await;
    }

    for handle in handles {
        handle.await.expect("reader task");
    }
}
