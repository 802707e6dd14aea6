//! Live endpoint tests. Run with: `cargo test --features online`
#![cfg(feature = "online")]

use regpop_rs::api::{self, SourceKind};
use regpop_rs::Client;

#[test]
fn fetch_with_fallback_always_yields_records() {
    let client = Client::from_env();
    let (records, source) = client.fetch_with_fallback();
    assert!(!records.is_empty());
    if source == SourceKind::Fallback {
        assert_eq!(records, api::fallback_records());
    }
}

#[test]
fn fetch_live_with_service_key() {
    // Requires a real credential; skip silently when none is configured.
    if std::env::var(api::SERVICE_KEY_ENV).is_err() {
        return;
    }
    let client = Client::from_env();
    let records = client.fetch_live().expect("live fetch");
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| !r.region.is_empty()));
}
