//! End-to-end refresh protocol tests.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use unfurl::prelude::*;

use crate::support::{init_tracing, FixtureTransport};

#[tokio::test]
async fn lifecycle_event_drives_refresh_and_notification() {
    init_tracing();
    let transport = Arc::new(FixtureTransport::new(FixtureTransport::directory()));
    let cache = Arc::new(SchemaCache::new(transport.clone()));
    let mut observer = cache.events().subscribe();
    let _listener = cache.listen();

    // Host publishes the foreground transition on the shared bus.
    cache
        .events()
        .publish(CacheEvent::AppStateChanged { foreground: true });

    // Observer sees its own copy of the state change, then the load event.
    loop {
        match observer.recv().await {
            Some(CacheEvent::CacheLoaded) => break,
            Some(CacheEvent::AppStateChanged { .. }) => continue,
            None => panic!("bus closed"),
        }
    }

    let table = cache.table();
    assert_eq!(table.len(), 4);
    assert_eq!(
        table.get("https://tu.be/*"),
        Some("https://tube.example/oembed")
    );
    assert_eq!(transport.config_calls.load(Ordering::SeqCst), 1);
    assert_eq!(transport.provider_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn background_transitions_never_fetch() {
    let transport = Arc::new(FixtureTransport::new(FixtureTransport::directory()));
    let cache = Arc::new(SchemaCache::new(transport.clone()));
    let _listener = cache.listen();

    for _ in 0..3 {
        cache
            .events()
            .publish(CacheEvent::AppStateChanged { foreground: false });
    }
    tokio::task::yield_now().await;

    assert_eq!(transport.config_calls.load(Ordering::SeqCst), 0);
    assert!(cache.table().is_empty());
}

#[tokio::test]
async fn failed_refresh_keeps_prior_table() {
    let transport = Arc::new(FixtureTransport::new(FixtureTransport::directory()));
    let cache = SchemaCache::new(transport.clone());

    assert!(cache.refresh().await);
    let generation_before = cache.table().generation();

    // Remote goes away; invalidate so the next refresh must re-fetch.
    cache.invalidate().await;
    transport.fail_config.store(true, Ordering::SeqCst);

    assert!(!cache.refresh().await);

    // The previously published table is still served.
    let table = cache.table();
    assert_eq!(table.generation(), generation_before);
    assert_eq!(table.len(), 4);
}

#[tokio::test]
async fn remote_provider_changes_ignored_until_invalidated() {
    let transport = Arc::new(FixtureTransport::new(FixtureTransport::directory()));
    let cache = SchemaCache::new(transport.clone());

    assert!(cache.refresh().await);
    assert_eq!(cache.table().len(), 4);

    // The remote directory changes, but providers are cached.
    transport.set_providers(vec![Provider::with_endpoint(
        "OnlyOne",
        Endpoint::new("https://one.example/oembed", ["https://one.example/*"]),
    )]);
    assert!(cache.refresh().await);
    assert_eq!(cache.table().len(), 4, "stale directory is by design");

    // Explicit invalidation picks up the new directory.
    cache.invalidate().await;
    assert!(cache.refresh().await);
    assert_eq!(cache.table().len(), 1);
    assert_eq!(
        cache.table().get("https://one.example/*"),
        Some("https://one.example/oembed")
    );
}

#[tokio::test]
async fn stats_reflect_refresh_outcomes() {
    let transport = Arc::new(FixtureTransport::new(FixtureTransport::directory()));
    transport.fail_config.store(true, Ordering::SeqCst);
    let cache = SchemaCache::new(transport.clone());

    assert!(!cache.refresh().await);
    transport.fail_config.store(false, Ordering::SeqCst);
    assert!(cache.refresh().await);

    let stats = cache.stats();
    assert_eq!(stats.refreshes_started(), 2);
    assert_eq!(stats.refreshes_completed(), 1);
    assert_eq!(stats.fetch_failures(), 1);
    assert_eq!(stats.table_rebuilds(), 1);
}
