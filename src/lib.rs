//! # Tidbits
//!
//! Small generic helpers that keep turning up in application code.
//!
//! ## Usage
//!
//! ```
//! use tidbits::{filter, resolved, to_type, unique};
//! use serde_json::json;
//!
//! assert_eq!(to_type(&json!([1, 2])), "array");
//! assert_eq!(unique(vec![1, 2, 2, 3, 1]), vec![1, 2, 3]);
//!
//! let items = [1, 2, 3, 4];
//! let evens = tokio_test::block_on(filter(&items, |v, _, _| resolved(v % 2 == 0))).unwrap();
//! assert_eq!(evens, vec![&2, &4]);
//! ```
//!
//! ## Modules
//!
//! - `core` - Pure helpers: type inspection, array normalization, identifiers, JSON
//! - `combinators` - Concurrent async combinators over slices (`map`, `filter`, `every`, ...)
//! - `timer` - Fire-and-forget deferred callbacks on the tokio runtime
//! - `config` - Defaults for identifiers and deferred callbacks
//! - `error` - Library error type
//! - `logging` - Optional tracing subscriber setup
pub mod combinators;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod timer;

pub use combinators::{
    each, every, filter, first, flat_map, map, map_to_object, none, resolved, some,
};
pub use config::UtilsConfig;
pub use crate::core::{
    arrayify, flatten, flatten_collection, is_array, is_nullish, json_parse, json_safe_parse,
    to_type, unique, unique_by_eq, unique_id, unique_id_with, Eventual, Inspect, OneOrMany,
    Truthy, TypeTag,
};
pub use error::{Result, UtilsError};
pub use timer::{wait, wait_with_config, wait_with_delay};
