//! Compiled matchers.
//!
//! A `Matcher` is a pattern bound to a classifier. It is callable (`call`,
//! one form per arity) and keeps the pattern's handlers reachable by label
//! through `handler`.
//!
//! When the classifier is a predicate table within the unroll window, each
//! handler is bound to its table slot at build time and dispatch goes
//! through the same unrolled predicate chain as classification. Otherwise
//! the resolved label is looked up in a hash map.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::classify::{Classifier, PredicateTable, UNROLL_WINDOW};
use crate::errors::{classification_failure, missing_handler, SumResult};
use crate::label::Label;
use crate::pattern::{Handler, Pattern};

/// Matcher over handlers taking only the value.
pub type Matcher1<A, R> = Matcher<A, (), R>;
/// Matcher over handlers taking one extra argument.
pub type Matcher2<A, B, R> = Matcher<A, (B,), R>;
/// Matcher over handlers taking two extra arguments.
pub type Matcher3<A, B, C, R> = Matcher<A, (B, C), R>;
/// Matcher over handlers taking three extra arguments.
pub type Matcher4<A, B, C, D, R> = Matcher<A, (B, C, D), R>;
/// Matcher over handlers taking four extra arguments.
pub type Matcher5<A, B, C, D, E, R> = Matcher<A, (B, C, D, E), R>;

pub struct Matcher<A, Args, B> {
    pattern: Pattern<A, Args, B>,
    route: Route<A, Args, B>,
}

enum Route<A, Args, B> {
    /// Slot `i` holds the handler of the table's `i`-th variant.
    Unrolled {
        table: Arc<PredicateTable<A>>,
        slots: [Option<Handler<A, Args, B>>; UNROLL_WINDOW],
    },
    Lookup {
        classifier: Classifier<A>,
        handlers: FxHashMap<Label, Handler<A, Args, B>>,
    },
}

impl<A, Args, B> Matcher<A, Args, B> {
    pub(crate) fn build(classifier: &Classifier<A>, pattern: Pattern<A, Args, B>) -> Self {
        if let Some(labels) = classifier.labels() {
            let missing: Vec<&Label> = labels
                .iter()
                .filter(|label| !pattern.contains(label))
                .collect();
            if !missing.is_empty() {
                tracing::debug!(?missing, "matcher built from a non-exhaustive pattern");
            }
        }

        let route = match classifier {
            Classifier::Table(table) if table.is_unrolled() => {
                let slots = std::array::from_fn(|slot| {
                    table
                        .labels()
                        .get(slot)
                        .and_then(|label| pattern.handler(label))
                        .cloned()
                });
                Route::Unrolled {
                    table: Arc::clone(table),
                    slots,
                }
            }
            _ => Route::Lookup {
                classifier: classifier.clone(),
                handlers: pattern
                    .iter()
                    .map(|(label, handler)| (label.clone(), handler.clone()))
                    .collect(),
            },
        };

        Matcher { pattern, route }
    }

    /// Classify `value` and run its handler with packed extra arguments.
    pub fn call_with(&self, value: &A, args: Args) -> SumResult<B> {
        let handler = match &self.route {
            Route::Unrolled { table, slots } => {
                let slot = table
                    .slot_of(value)
                    .ok_or_else(classification_failure::<A>)?;
                slots
                    .get(slot)
                    .and_then(Option::as_ref)
                    .ok_or_else(|| missing_handler(table.label(slot)))?
            }
            Route::Lookup {
                classifier,
                handlers,
            } => {
                let label = classifier
                    .classify(value)
                    .ok_or_else(classification_failure::<A>)?;
                handlers
                    .get(&label)
                    .ok_or_else(|| missing_handler(&label))?
            }
        };
        Ok(handler.invoke(value, args))
    }

    /// Handler for `label`, for reuse outside the matcher.
    pub fn handler(&self, label: &str) -> Option<&Handler<A, Args, B>> {
        self.pattern.handler(label)
    }

    /// Labels the pattern has handlers for.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.pattern.labels()
    }

    pub fn pattern(&self) -> &Pattern<A, Args, B> {
        &self.pattern
    }

    /// Whether dispatch goes through the unrolled slot chain.
    pub fn is_unrolled(&self) -> bool {
        matches!(self.route, Route::Unrolled { .. })
    }
}

impl<A, Args, B> fmt::Debug for Matcher<A, Args, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("labels", &self.pattern)
            .field("unrolled", &self.is_unrolled())
            .finish()
    }
}
