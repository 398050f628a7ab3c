//! Runtime type inspection
//!
//! Values are classified into a closed set of lowercase tags. Types opt in
//! through [`Inspect`]; eventual-completion handles are recognised by their
//! declared type rather than by probing for methods.

use futures::future::{BoxFuture, LocalBoxFuture};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::future::IntoFuture;
use std::rc::Rc;
use std::sync::Arc;

/// Classification of a value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Null,
    Nan,
    Promise,
    Array,
    Object,
    Number,
    String,
    Boolean,
    Function,
    /// A user type, named after the last segment of its Rust path
    Named(String),
}

impl TypeTag {
    /// Tag derived from the type's own name, lowercased with generics stripped
    pub fn named<T: ?Sized>() -> Self {
        Self::Named(short_type_name(std::any::type_name::<T>()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Nan => "nan",
            Self::Promise => "promise",
            Self::Array => "array",
            Self::Object => "object",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for TypeTag {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TypeTag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Last identifier of a Rust type path, e.g. `my_app::model::Order<u8>` -> `order`.
/// Yields an empty string when no identifier can be found.
fn short_type_name(full: &str) -> String {
    let path = full.split('<').next().unwrap_or_default();
    path.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Capability to report a runtime type tag.
///
/// The default implementation names the implementing type, so
/// `impl Inspect for Invoice {}` classifies as `"invoice"`.
pub trait Inspect {
    fn type_tag(&self) -> TypeTag {
        TypeTag::named::<Self>()
    }
}

/// Classify a value. Never fails.
pub fn to_type<T: Inspect + ?Sized>(value: &T) -> TypeTag {
    value.type_tag()
}

pub fn is_array<T: Inspect + ?Sized>(value: &T) -> bool {
    to_type(value) == TypeTag::Array
}

/// True for undefined (`None`) and null values
pub fn is_nullish<T: Inspect + ?Sized>(value: &T) -> bool {
    matches!(to_type(value), TypeTag::Undefined | TypeTag::Null)
}

/// Explicit marker for an eventual-completion handle.
///
/// Wrapping a future in `Eventual` lets it be classified as a promise while
/// still being awaitable.
#[derive(Debug)]
pub struct Eventual<F>(pub F);

impl<F> Eventual<F> {
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F: std::future::Future> IntoFuture for Eventual<F> {
    type Output = F::Output;
    type IntoFuture = F;

    fn into_future(self) -> Self::IntoFuture {
        self.0
    }
}

impl<F> Inspect for Eventual<F> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Promise
    }
}

impl<T> Inspect for BoxFuture<'_, T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Promise
    }
}

impl<T> Inspect for LocalBoxFuture<'_, T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Promise
    }
}

impl<T> Inspect for tokio::task::JoinHandle<T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Promise
    }
}

impl Inspect for Value {
    fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn type_tag(&self) -> TypeTag {
        match self {
            None => TypeTag::Undefined,
            Some(value) => value.type_tag(),
        }
    }
}

impl Inspect for () {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Null
    }
}

macro_rules! fixed_tag {
    ($tag:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::$tag
                }
            }
        )+
    };
}

fixed_tag!(Number: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
fixed_tag!(Boolean: bool);
fixed_tag!(String: str, String, char);
fixed_tag!(Object: Map<String, Value>);

impl Inspect for f32 {
    fn type_tag(&self) -> TypeTag {
        if self.is_nan() {
            TypeTag::Nan
        } else {
            TypeTag::Number
        }
    }
}

impl Inspect for f64 {
    fn type_tag(&self) -> TypeTag {
        if self.is_nan() {
            TypeTag::Nan
        } else {
            TypeTag::Number
        }
    }
}

impl<T> Inspect for [T] {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Array
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Array
    }
}

impl<T> Inspect for Vec<T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Array
    }
}

impl<T> Inspect for VecDeque<T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Array
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }
}

macro_rules! fn_pointer_tag {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Inspect for fn($($arg),*) -> R {
            fn type_tag(&self) -> TypeTag {
                TypeTag::Function
            }
        }
    };
}

fn_pointer_tag!();
fn_pointer_tag!(A);
fn_pointer_tag!(A, B);
fn_pointer_tag!(A, B, C);

// Pointers taking borrowed arguments are higher-ranked over the borrow
#[allow(coherence_leak_check)]
impl<R, A: ?Sized> Inspect for for<'x> fn(&'x A) -> R {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Function
    }
}

#[allow(coherence_leak_check)]
impl<R, A: ?Sized, B> Inspect for for<'x> fn(&'x A, B) -> R {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Function
    }
}

#[allow(coherence_leak_check)]
impl<R, A: ?Sized, B: ?Sized> Inspect for for<'x, 'y> fn(&'x A, &'y B) -> R {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Function
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}
