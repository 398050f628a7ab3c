//! Array normalization helpers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;

/// Normalize a JSON value into a list.
///
/// Arrays are returned as their own elements (no copy, order kept); every
/// other value, `null` included, becomes a one-element list.
pub fn arrayify(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// A single item or a list of items, as commonly accepted by config fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(item: T) -> Self {
        Self::One(item)
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}

/// Remove duplicates, keeping the first occurrence of each item in order
pub fn unique<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// [`unique`] for items that are only `PartialEq`, such as JSON values.
///
/// Quadratic in the number of distinct items.
pub fn unique_by_eq<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    let mut kept: Vec<T> = Vec::new();
    for item in items {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    kept
}

/// Concatenate the immediate values of an array or object, one level deep.
///
/// Nested arrays are spliced in; other values are appended as they are.
/// Objects are walked in key order. Scalars and `null` have no values and
/// produce an empty list.
pub fn flatten(collection: &Value) -> Vec<Value> {
    let values: Vec<&Value> = match collection {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => return Vec::new(),
    };

    values.into_iter().fold(Vec::new(), |mut acc, value| {
        match value {
            Value::Array(inner) => acc.extend(inner.iter().cloned()),
            other => acc.push(other.clone()),
        }
        acc
    })
}

/// Typed one-level flatten over any collection of collections
pub fn flatten_collection<I>(collection: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    collection.into_iter().flatten().collect()
}
