//! Run-time values bound to template variables.
//!
//! A [`Value`] is one of the shapes RFC 6570 knows how to expand. Richer
//! input formats are coerced into these shapes by the caller before
//! expansion. [`Bindings`] is the lookup seam the expander reads through, so
//! any string-keyed map of values can be expanded against directly.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// The value bound to a single variable name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// No value; the variable contributes nothing to the expansion.
    #[default]
    Undefined,
    Scalar(String),
    List(Vec<String>),
    /// Ordered key/value pairs.
    AssocList(Vec<(String, String)>),
}

impl Value {
    /// Whether the value takes part in expansion.
    ///
    /// `Undefined` and empty composite values are treated as undefined. An
    /// empty string scalar is defined.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        match self {
            Self::Undefined => false,
            Self::Scalar(_) => true,
            Self::List(items) => !items.is_empty(),
            Self::AssocList(pairs) => !pairs.is_empty(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(ToString::to_string).collect())
    }
}

impl From<Vec<(String, String)>> for Value {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::AssocList(pairs)
    }
}

impl From<Vec<(&str, &str)>> for Value {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        Self::AssocList(
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// Lookup of variable values by name.
///
/// A missing name and a name bound to [`Value::Undefined`] are treated the
/// same by the expander.
pub trait Bindings {
    fn lookup(&self, name: &str) -> Option<&Value>;
}

impl<S: BuildHasher> Bindings for HashMap<String, Value, S> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Bindings for BTreeMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> Bindings for IndexMap<String, Value, S> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<B: Bindings + ?Sized> Bindings for &B {
    fn lookup(&self, name: &str) -> Option<&Value> {
        (**self).lookup(name)
    }
}
