//! Integration tests for the async combinators
//!
//! Exercises the public API the way an application would: JSON payloads,
//! async callbacks that touch shared state, and failure propagation.

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tidbits::{
    arrayify, each, every, filter, first, flat_map, flatten, map, map_to_object, none, resolved,
    some, to_type, unique_by_eq, Eventual, TypeTag,
};
use tokio::sync::Mutex;

#[derive(Debug, PartialEq)]
enum FetchError {
    NotFound(String),
}

async fn fetch_score(name: &str) -> Result<u32, FetchError> {
    tokio::time::sleep(Duration::from_millis(2)).await;
    match name {
        "alpha" => Ok(90),
        "beta" => Ok(40),
        "gamma" => Ok(0),
        other => Err(FetchError::NotFound(other.to_string())),
    }
}

#[tokio::test]
async fn test_map_over_async_lookups() {
    let names = ["alpha", "beta", "gamma"];
    let scores = map(&names, |name, _, _| fetch_score(name)).await.unwrap();
    assert_eq!(scores, vec![90, 40, 0]);
}

#[tokio::test]
async fn test_lookup_failure_rejects_whole_operation() {
    let names = ["alpha", "delta", "beta", "omega"];
    let result = map(&names, |name, _, _| fetch_score(name)).await;
    assert_eq!(result, Err(FetchError::NotFound("delta".to_string())));
}

#[tokio::test]
async fn test_predicates_over_async_lookups() {
    let names = ["alpha", "beta", "gamma"];

    assert!(some(&names, |name, _, _| fetch_score(name)).await.unwrap());
    // gamma scores zero, which is falsy
    assert!(!every(&names, |name, _, _| fetch_score(name)).await.unwrap());
    assert!(!none(&names, |name, _, _| fetch_score(name)).await.unwrap());

    let passing = filter(&names, |name, _, _| async move {
        Ok::<_, FetchError>(fetch_score(name).await? >= 50)
    })
    .await
    .unwrap();
    assert_eq!(passing, vec![&"alpha"]);

    let first_scored = first(&names[1..], |name, _, _| fetch_score(name))
        .await
        .unwrap();
    assert_eq!(first_scored, Some(&"beta"));
}

#[tokio::test]
async fn test_map_to_object_builds_lookup_table() {
    let names = vec!["alpha".to_string(), "beta".to_string()];
    let table: HashMap<String, u32> = map_to_object(&names, |name, _, _| fetch_score(name))
        .await
        .unwrap();

    assert_eq!(table.get("alpha"), Some(&90));
    assert_eq!(table.get("beta"), Some(&40));
}

#[tokio::test]
async fn test_each_with_shared_state() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let items = [json!({"id": 1}), json!({"id": 2}), json!({"id": 3})];

    each(&items, |item, index, all| {
        let log = log.clone();
        let id = item["id"].as_u64().unwrap_or_default();
        let total = all.len();
        async move {
            log.lock().await.push(format!("{}:{}/{}", id, index, total));
            Ok::<_, std::convert::Infallible>(())
        }
    })
    .await
    .unwrap();

    let mut entries = log.lock().await.clone();
    entries.sort();
    assert_eq!(entries, vec!["1:0/3", "2:1/3", "3:2/3"]);
}

#[tokio::test]
async fn test_all_callbacks_start_before_any_result_is_used() {
    let started = AtomicUsize::new(0);
    let started = &started;
    let items = [1, 2, 3, 4, 5];

    let observed = map(&items, |_, _, all| async move {
        started.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        // By the time any callback resumes, every sibling has started
        Ok::<_, std::convert::Infallible>(started.load(Ordering::SeqCst) == all.len())
    })
    .await
    .unwrap();

    assert!(observed.into_iter().all(|all_started| all_started));
}

#[tokio::test]
async fn test_flat_map_over_json_payloads() {
    let batches = [json!({"tags": ["a", "b"]}), json!({"tags": ["b"]}), json!({})];

    let tags = flat_map(&batches, |batch, _, _| {
        resolved(arrayify(batch.get("tags").cloned().unwrap_or(Value::Null)))
    })
    .await
    .unwrap();

    assert_eq!(tags, vec![json!("a"), json!("b"), json!("b"), Value::Null]);
    assert_eq!(
        unique_by_eq(tags.into_iter().filter(|t| !t.is_null())),
        vec![json!("a"), json!("b")]
    );
}

#[test]
fn test_flatten_matches_flat_map_for_objects() {
    let grouped = json!({"a": [1, 2], "b": [3]});
    assert_eq!(flatten(&grouped), vec![json!(1), json!(2), json!(3)]);
}

#[tokio::test]
async fn test_eventual_handles_are_promises() {
    let pending = Eventual(fetch_score("alpha"));
    assert_eq!(to_type(&pending), TypeTag::Promise);
    assert_eq!(pending.await, Ok(90));
}
