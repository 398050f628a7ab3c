//! Concurrent async combinators over slices
//!
//! Every combinator calls its callback once per element with
//! `(element, index, whole_slice)`, creating all of the futures before any of
//! them is awaited. The futures are then driven together on the calling task
//! with [`join_all`] and the results aggregated in index order.
//!
//! There is no concurrency cap and no cancellation. If callbacks fail, all of
//! them still run to completion and the combinator returns the error of the
//! lowest-index failure; no partial results are surfaced.

use crate::core::truthy::Truthy;
use futures::future::{join_all, ready, Ready};
use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use tracing::{debug, trace};

/// Lift a synchronous callback result into an already-completed future
pub fn resolved<T>(value: T) -> Ready<Result<T, Infallible>> {
    ready(Ok(value))
}

/// Launch every callback, wait for all of them, then fail on the first error by index
async fn settle_all<'a, T, R, E, F, Fut>(items: &'a [T], mut callback: F) -> Result<Vec<R>, E>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    trace!(count = items.len(), "Launching element callbacks");

    let pending: Vec<Fut> = items
        .iter()
        .enumerate()
        .map(|(index, item)| callback(item, index, items))
        .collect();

    let settled = join_all(pending).await;

    let mut results = Vec::with_capacity(settled.len());
    for (index, outcome) in settled.into_iter().enumerate() {
        match outcome {
            Ok(value) => results.push(value),
            Err(err) => {
                debug!(index, "Element callback failed, rejecting combinator");
                return Err(err);
            }
        }
    }
    Ok(results)
}

/// Run the callback for every element, ignoring the results
pub async fn each<'a, T, R, E, F, Fut>(items: &'a [T], callback: F) -> Result<(), E>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    settle_all(items, callback).await.map(|_| ())
}

/// True when every result is truthy. Vacuously true for an empty slice.
pub async fn every<'a, T, R, E, F, Fut>(items: &'a [T], callback: F) -> Result<bool, E>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: Truthy,
{
    let results = settle_all(items, callback).await?;
    Ok(results.iter().all(|result| result.is_truthy()))
}

/// True when at least one result is truthy
pub async fn some<'a, T, R, E, F, Fut>(items: &'a [T], callback: F) -> Result<bool, E>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: Truthy,
{
    let results = settle_all(items, callback).await?;
    Ok(results.iter().any(|result| result.is_truthy()))
}

/// True when no result is truthy
pub async fn none<'a, T, R, E, F, Fut>(items: &'a [T], callback: F) -> Result<bool, E>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: Truthy,
{
    let results = settle_all(items, callback).await?;
    Ok(!results.iter().any(|result| result.is_truthy()))
}

/// Results in the original index order
pub async fn map<'a, T, R, E, F, Fut>(items: &'a [T], callback: F) -> Result<Vec<R>, E>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    settle_all(items, callback).await
}

/// [`map`] followed by a one-level concatenation of the results
pub async fn flat_map<'a, T, R, E, F, Fut>(items: &'a [T], callback: F) -> Result<Vec<R::Item>, E>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: IntoIterator,
{
    let results = map(items, callback).await?;
    Ok(results.into_iter().flatten().collect())
}

/// Elements whose callback result was truthy, in original order
pub async fn filter<'a, T, R, E, F, Fut>(items: &'a [T], callback: F) -> Result<Vec<&'a T>, E>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: Truthy,
{
    let results = settle_all(items, callback).await?;
    Ok(items
        .iter()
        .zip(results)
        .filter(|(_, result)| result.is_truthy())
        .map(|(item, _)| item)
        .collect())
}

/// Map each element, used as a string key, to its callback result.
///
/// A key that appears more than once keeps the result of its last occurrence.
pub async fn map_to_object<'a, T, R, E, F, Fut>(
    items: &'a [T],
    callback: F,
) -> Result<HashMap<String, R>, E>
where
    T: AsRef<str>,
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let results = settle_all(items, callback).await?;
    Ok(items
        .iter()
        .zip(results)
        .map(|(key, result)| (key.as_ref().to_owned(), result))
        .collect())
}

/// First element, by index, whose callback result is truthy.
///
/// Every callback is still invoked; the search only starts once all of them
/// have completed.
pub async fn first<'a, T, R, E, F, Fut>(items: &'a [T], callback: F) -> Result<Option<&'a T>, E>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: Truthy,
{
    let results = settle_all(items, callback).await?;
    Ok(items
        .iter()
        .zip(results)
        .find(|(_, result)| result.is_truthy())
        .map(|(item, _)| item))
}
