//! Tagsum - runtime sum types.
//!
//! This crate provides:
//! - Classifier resolution from a direct function, a predicate mapping, or a
//!   producer of that mapping (`SumInput`)
//! - The dispatcher (`Sum`) with membership checks, `type_of` and `match_value`
//! - Matcher builders `f` through `f5` for handlers taking zero to four extra
//!   arguments
//! - Extension layers (`Sum::extend`) that add named members without
//!   touching the original dispatcher
//!
//! # Architecture
//!
//! Classification is the only place a value is inspected. Predicate
//! mappings compile to a table whose first ten slots are checked by an
//! unrolled branch chain; matchers built within that window bind handlers to
//! the same slots. Larger unions and direct classifiers dispatch by label.
//! Either way the first declared variant that accepts a value wins.
//!
//! ```text
//! let shapes = Sum::from_producer(|p| {
//!     Predicates::new()
//!         .variant("Circle", p.is_record_of(p.fields().field("radius", p.is_number())))
//!         .variant("Square", p.is_record_of(p.fields().field("side", p.is_number())))
//! })?;
//!
//! let area = shapes.f(
//!     Pattern1::new()
//!         .on("Circle", |c: &Value| PI * radius(c).powi(2))
//!         .on("Square", |s: &Value| side(s).powi(2)),
//! );
//! area.call(&circle)?;
//! ```
//!
//! All state is immutable and shared behind `Arc`, so dispatchers and
//! matchers can be used from any thread.

mod arity;
pub mod classify;
mod dispatch;
mod errors;
pub mod extend;
mod label;
pub mod matcher;
pub mod pattern;

pub use classify::{Predicates, SumInput, Tagged, UNROLL_WINDOW};
pub use dispatch::Sum;
pub use errors::{SumError, SumErrorKind, SumResult};
pub use extend::{Extension, Members, Method};
pub use label::Label;
pub use matcher::{Matcher, Matcher1, Matcher2, Matcher3, Matcher4, Matcher5};
pub use pattern::{Handler, Pattern, Pattern1, Pattern2, Pattern3, Pattern4, Pattern5};

pub use tagsum_value::{predicates, Predicate, Toolkit};
