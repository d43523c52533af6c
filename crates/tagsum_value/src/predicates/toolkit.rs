//! The predicate set handed to predicate producers.

use super::{FieldPredicates, Predicate};
use crate::shape::Shape;

/// Named access to every toolkit predicate.
///
/// Producers receive a `&Toolkit` and build their label to predicate
/// mapping from it, which keeps producer closures free of imports.
#[derive(Clone, Copy, Debug, Default)]
pub struct Toolkit {
    _private: (),
}

impl Toolkit {
    pub const fn new() -> Self {
        Toolkit { _private: () }
    }

    pub fn never<V: 'static>(&self) -> Predicate<V> {
        super::never()
    }

    pub fn is<V: Shape + 'static>(&self) -> Predicate<V> {
        super::is()
    }

    pub fn is_string<V: Shape + 'static>(&self) -> Predicate<V> {
        super::is_string()
    }

    pub fn is_boolean<V: Shape + 'static>(&self) -> Predicate<V> {
        super::is_boolean()
    }

    pub fn is_number<V: Shape + 'static>(&self) -> Predicate<V> {
        super::is_number()
    }

    pub fn is_function<V: Shape + 'static>(&self) -> Predicate<V> {
        super::is_function()
    }

    pub fn is_primitive<V: Shape + 'static>(&self) -> Predicate<V> {
        super::is_primitive()
    }

    pub fn is_array<V: Shape + 'static>(&self) -> Predicate<V> {
        super::is_array()
    }

    pub fn is_array_of<V: Shape + 'static>(&self, element: Predicate<V>) -> Predicate<V> {
        super::is_array_of(element)
    }

    pub fn is_object<V: Shape + 'static>(&self) -> Predicate<V> {
        super::is_object()
    }

    pub fn is_record_of<V: Shape + 'static>(&self, fields: FieldPredicates<V>) -> Predicate<V> {
        super::is_record_of(fields)
    }

    /// Start a field predicate list for [`Toolkit::is_record_of`].
    pub fn fields<V>(&self) -> FieldPredicates<V> {
        FieldPredicates::new()
    }

    /// Wrap a custom check.
    pub fn custom<V, F>(&self, check: F) -> Predicate<V>
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        super::predicate(check)
    }
}
