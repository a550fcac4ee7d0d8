//! Integration tests for the store registry fan-out protocol.
//!
//! These tests pin the registration-order guarantee, the full/partial reset
//! payload semantics, and the explicit choice that a failing store aborts
//! the remaining resets.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use graphql_api::{BoxError, Store, StoreRegistry};

/// Shared call log: (store name, slice received), in call order.
type CallLog = Arc<Mutex<Vec<(String, Option<Value>)>>>;

/// A store that records every reset it receives.
struct RecordingStore {
    name: &'static str,
    log: CallLog,
}

impl Store for RecordingStore {
    fn reset(&self, slice: Option<Value>) -> Result<(), BoxError> {
        self.log
            .lock()
            .unwrap()
            .push((self.name.to_string(), slice));
        Ok(())
    }
}

/// A store whose reset always fails.
struct FailingStore;

impl Store for FailingStore {
    fn reset(&self, _slice: Option<Value>) -> Result<(), BoxError> {
        Err("backing store unavailable".into())
    }
}

fn recording_registry(log: &CallLog, names: &[&'static str]) -> StoreRegistry {
    let mut builder = StoreRegistry::builder();
    for &name in names {
        builder = builder.register(
            name,
            RecordingStore {
                name,
                log: Arc::clone(log),
            },
        );
    }
    builder.build()
}

// ============================================================================
// Full Clear Tests
// ============================================================================

#[test]
fn test_reset_none_clears_every_store_in_registration_order() {
    let log: CallLog = Arc::default();
    let registry = recording_registry(&log, &["RepoStore", "TreeStore", "UserStore"]);

    registry.reset(None).unwrap();

    let calls = log.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            ("RepoStore".to_string(), None),
            ("TreeStore".to_string(), None),
            ("UserStore".to_string(), None),
        ]
    );
}

#[test]
fn test_reset_calls_each_store_exactly_once() {
    let log: CallLog = Arc::default();
    let registry = recording_registry(&log, &["RepoStore", "TreeStore", "UserStore"]);

    registry.reset(None).unwrap();

    assert_eq!(log.lock().unwrap().len(), 3);
}

// ============================================================================
// Partial Payload Tests
// ============================================================================

#[test]
fn test_partial_payload_clears_unmentioned_stores() {
    let log: CallLog = Arc::default();
    let registry = recording_registry(&log, &["RepoStore", "TreeStore"]);

    let data = json!({"RepoStore": {"x": 1}});
    registry.reset(data.as_object()).unwrap();

    let calls = log.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            ("RepoStore".to_string(), Some(json!({"x": 1}))),
            ("TreeStore".to_string(), None),
        ]
    );
}

#[test]
fn test_payload_keys_without_a_store_are_ignored() {
    let log: CallLog = Arc::default();
    let registry = recording_registry(&log, &["RepoStore"]);

    let data = json!({"RepoStore": {"x": 1}, "GhostStore": {"y": 2}});
    registry.reset(data.as_object()).unwrap();

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "RepoStore");
}

// ============================================================================
// Failure Semantics Tests
// ============================================================================

#[test]
fn test_reset_error_aborts_remaining_stores() {
    let log: CallLog = Arc::default();
    let registry = StoreRegistry::builder()
        .register(
            "RepoStore",
            RecordingStore {
                name: "RepoStore",
                log: Arc::clone(&log),
            },
        )
        .register("BrokenStore", FailingStore)
        .register(
            "UserStore",
            RecordingStore {
                name: "UserStore",
                log: Arc::clone(&log),
            },
        )
        .build();

    let error = registry.reset(None).unwrap_err();

    assert_eq!(error.store_name(), "BrokenStore");
    assert!(error.to_string().contains("BrokenStore"));

    // The store before the failure was reset; the one after was not.
    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "RepoStore");
}

#[test]
fn test_reset_error_carries_the_store_failure_as_source() {
    let registry = StoreRegistry::builder()
        .register("BrokenStore", FailingStore)
        .build();

    let error = registry.reset(None).unwrap_err();
    let source = std::error::Error::source(&error).unwrap();
    assert!(source.to_string().contains("backing store unavailable"));
}

// ============================================================================
// Visitor Tests
// ============================================================================

#[test]
fn test_for_each_visits_in_registration_order() {
    let log: CallLog = Arc::default();
    let registry = recording_registry(&log, &["RepoStore", "TreeStore", "UserStore"]);

    let mut visited = Vec::new();
    registry.for_each(|_store, name| visited.push(name.to_string()));

    assert_eq!(visited, vec!["RepoStore", "TreeStore", "UserStore"]);
}

#[test]
fn test_for_each_passes_the_store_instance() {
    let log: CallLog = Arc::default();
    let registry = recording_registry(&log, &["RepoStore"]);

    // Drive the store through the visitor's reference.
    registry.for_each(|store, _name| {
        store.reset(Some(json!({"via": "visitor"}))).unwrap();
    });

    let calls = log.lock().unwrap();
    assert_eq!(calls[0].1, Some(json!({"via": "visitor"})));
}
