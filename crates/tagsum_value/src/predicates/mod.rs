//! Predicate toolkit for building classifiers.
//!
//! Every predicate is a shared closure `Predicate<V>`. The scalar checks
//! (`is_string`, `is_number`, ...) are leaves; `is_array_of` and
//! `is_record_of` compose predicates into structural checks.
//!
//! ```text
//! let circle = is_record_of(FieldPredicates::new().field("radius", is_number()));
//! let square = is_record_of(FieldPredicates::new().field("side", is_number()));
//! ```
//!
//! The same set is handed to predicate producers as a [`Toolkit`].

mod toolkit;

use std::sync::Arc;

use crate::shape::Shape;

pub use toolkit::Toolkit;

/// A shared, thread-safe boolean check over `V`.
pub type Predicate<V> = Arc<dyn Fn(&V) -> bool + Send + Sync>;

/// Wrap a closure as a `Predicate`.
pub fn predicate<V, F>(check: F) -> Predicate<V>
where
    F: Fn(&V) -> bool + Send + Sync + 'static,
{
    Arc::new(check)
}

/// Matches nothing. Fills unused classifier slots.
pub fn never<V: 'static>() -> Predicate<V> {
    Arc::new(|_: &V| false)
}

/// Matches any present value.
pub fn is<V: Shape + 'static>() -> Predicate<V> {
    Arc::new(|v: &V| v.is_present())
}

pub fn is_string<V: Shape + 'static>() -> Predicate<V> {
    Arc::new(|v: &V| v.as_str().is_some())
}

pub fn is_boolean<V: Shape + 'static>() -> Predicate<V> {
    Arc::new(|v: &V| v.as_bool().is_some())
}

pub fn is_number<V: Shape + 'static>() -> Predicate<V> {
    Arc::new(|v: &V| v.as_number().is_some())
}

pub fn is_function<V: Shape + 'static>() -> Predicate<V> {
    Arc::new(|v: &V| v.is_function())
}

/// Matches strings, numbers and booleans. Functions are not primitive.
pub fn is_primitive<V: Shape + 'static>() -> Predicate<V> {
    Arc::new(|v: &V| v.as_str().is_some() || v.as_number().is_some() || v.as_bool().is_some())
}

pub fn is_array<V: Shape + 'static>() -> Predicate<V> {
    Arc::new(|v: &V| v.as_array().is_some())
}

/// Matches arrays whose every element satisfies `element`.
///
/// The empty array matches.
pub fn is_array_of<V: Shape + 'static>(element: Predicate<V>) -> Predicate<V> {
    Arc::new(move |v: &V| {
        v.as_array()
            .is_some_and(|items| items.iter().all(|item| element(item)))
    })
}

/// Matches arrays and records.
pub fn is_object<V: Shape + 'static>() -> Predicate<V> {
    Arc::new(|v: &V| v.is_object())
}

/// Matches truthy values whose fields satisfy the given field predicates.
///
/// Absent values, `false`, `0`, `NaN` and the empty string never match. A
/// missing field is presented to its predicate as `V::absent()`, so a field
/// predicate may accept absence explicitly. With no field predicates any
/// truthy value matches.
pub fn is_record_of<V: Shape + 'static>(fields: FieldPredicates<V>) -> Predicate<V> {
    let fields = fields.entries;
    Arc::new(move |v: &V| {
        if !is_truthy(v) {
            return false;
        }
        fields.iter().all(|(name, check)| match v.field(name) {
            Some(field) => check(field),
            None => check(&V::absent()),
        })
    })
}

fn is_truthy<V: Shape>(v: &V) -> bool {
    if !v.is_present() {
        return false;
    }
    if let Some(b) = v.as_bool() {
        return b;
    }
    if let Some(n) = v.as_number() {
        return n != 0.0 && !n.is_nan();
    }
    !v.as_str().is_some_and(str::is_empty)
}

/// Ordered per-field predicates for [`is_record_of`].
pub struct FieldPredicates<V> {
    entries: Vec<(String, Predicate<V>)>,
}

impl<V> FieldPredicates<V> {
    pub fn new() -> Self {
        FieldPredicates {
            entries: Vec::new(),
        }
    }

    /// Require `name` to satisfy `check`.
    ///
    /// Declaring the same field twice keeps both checks.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, check: Predicate<V>) -> Self {
        self.entries.push((name.into(), check));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<V> Default for FieldPredicates<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K: Into<String>> FromIterator<(K, Predicate<V>)> for FieldPredicates<V> {
    fn from_iter<I: IntoIterator<Item = (K, Predicate<V>)>>(iter: I) -> Self {
        FieldPredicates {
            entries: iter
                .into_iter()
                .map(|(name, check)| (name.into(), check))
                .collect(),
        }
    }
}
