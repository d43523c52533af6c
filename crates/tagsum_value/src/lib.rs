//! Tagsum Value - dynamic values and the predicate toolkit.
//!
//! This crate provides:
//! - A dynamic runtime value (`Value`) for structurally classified data
//! - The `Shape` trait, the introspection surface predicates are written against
//! - The predicate toolkit (`never`, `is`, `is_string`, ..., `is_record_of`)
//!
//! # Architecture
//!
//! Predicates are plain shared closures (`Predicate<V>`). They are built
//! once, usually while declaring a sum type, and reused for every
//! classification afterwards. Combinators (`is_array_of`, `is_record_of`)
//! compose smaller predicates into structural checks.
//!
//! Any type implementing `Shape` can be classified, so callers are not tied
//! to `Value`; it is the reference implementation used by the tests.

pub mod predicates;
mod shape;
mod value;

pub use predicates::{FieldPredicates, Predicate, Toolkit};
pub use shape::Shape;
pub use value::{FunctionValue, Heap, NativeFn, Record, Value};
