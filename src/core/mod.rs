//! Pure helper functions
//!
//! Everything here is synchronous and free of I/O: each function takes its
//! inputs and returns an output, so it can be tested without a runtime.

pub mod array;
pub mod ident;
pub mod inspect;
pub mod json;
pub mod truthy;

pub use array::{arrayify, flatten, flatten_collection, unique, unique_by_eq, OneOrMany};
pub use ident::{unique_id, unique_id_with};
pub use inspect::{is_array, is_nullish, to_type, Eventual, Inspect, TypeTag};
pub use json::{json_parse, json_safe_parse};
pub use truthy::Truthy;
