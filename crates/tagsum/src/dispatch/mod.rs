//! The sum type dispatcher.
//!
//! `Sum<A>` bundles a resolved classifier with an extension record. It is
//! built once and shared; every operation borrows it immutably and `extend`
//! returns a new dispatcher.
//!
//! # Failure policy
//!
//! A value no variant accepts is a `ClassificationFailure` on every path,
//! including a direct classifier returning `None`. A resolved label without
//! a handler is a `MissingHandler`. The membership checks (`is_of_type`,
//! `matches`) never fail: an unclassifiable value is simply not of the
//! requested variant.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tagsum_value::Toolkit;

use crate::classify::{Classifier, Predicates, SumInput, Tagged};
use crate::errors::{classification_failure, missing_handler, non_exhaustive, SumResult};
use crate::extend::{Extension, Members, Method};
use crate::label::Label;
use crate::matcher::{Matcher, Matcher1, Matcher2, Matcher3, Matcher4, Matcher5};
use crate::pattern::{Pattern, Pattern1, Pattern2, Pattern3, Pattern4, Pattern5};

/// Runtime dispatcher over a closed set of labeled variants.
pub struct Sum<A> {
    classifier: Classifier<A>,
    members: Members,
}

impl<A: 'static> Sum<A> {
    /// Resolve `input` and build a dispatcher.
    ///
    /// Fails only when a predicate mapping declares a label twice.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(input: SumInput<A>) -> SumResult<Self> {
        let classifier = Classifier::resolve(input)?;
        tracing::debug!(
            variants = ?classifier.labels().map(<[Label]>::len),
            unrolled = classifier.is_unrolled(),
            "resolved sum type"
        );
        Ok(Sum::with_classifier(classifier))
    }

    /// Dispatcher over a direct classification function.
    pub fn from_type_of<F>(classify: F) -> Self
    where
        F: Fn(&A) -> Option<Label> + Send + Sync + 'static,
    {
        Sum::with_classifier(Classifier::direct(Arc::new(classify)))
    }

    pub fn from_predicates(predicates: Predicates<A>) -> SumResult<Self> {
        Sum::new(SumInput::Predicates(predicates))
    }

    /// Dispatcher over the mapping `produce` builds from the toolkit.
    pub fn from_producer<F>(produce: F) -> SumResult<Self>
    where
        F: FnOnce(&Toolkit) -> Predicates<A> + 'static,
    {
        Sum::new(SumInput::producer(produce))
    }

    /// Dispatcher over a type that carries its own tag.
    pub fn from_tagged() -> Self
    where
        A: Tagged,
    {
        Sum::with_classifier(Classifier::tagged())
    }

    fn with_classifier(classifier: Classifier<A>) -> Self {
        Sum {
            classifier,
            members: Members::default(),
        }
    }

    /// Reusable membership predicate for `label`.
    pub fn is_of_type(&self, label: impl Into<Label>) -> impl Fn(&A) -> bool + Send + Sync {
        let classifier = self.classifier.clone();
        let label = label.into();
        move |value: &A| classifier.classifies_as(value, &label)
    }

    /// Member function `name` added by `Extension::method`.
    pub fn method<R: 'static>(&self, name: &str) -> Option<&Method<A, R>> {
        self.members.get::<Method<A, R>>(name)
    }

    /// A new dispatcher with the members `build` returns layered on top.
    ///
    /// `build` sees this dispatcher, including every earlier layer. `self`
    /// is left unchanged.
    #[must_use]
    pub fn extend<F>(&self, build: F) -> Sum<A>
    where
        F: FnOnce(&Sum<A>) -> Extension<A>,
    {
        let layer = build(self);
        tracing::trace!(members = ?layer.names().collect::<Vec<_>>(), "extending sum type");
        Sum {
            classifier: self.classifier.clone(),
            members: self.members.merged(layer),
        }
    }
}

impl<A> Sum<A> {
    /// Label of `value`.
    pub fn type_of(&self, value: &A) -> SumResult<Label> {
        self.classifier
            .classify(value)
            .ok_or_else(classification_failure::<A>)
    }

    /// Whether `value` belongs to the variant `label`.
    pub fn matches(&self, label: &str, value: &A) -> bool {
        self.classifier.classifies_as(value, label)
    }

    /// Classify `value` and run the pattern's handler for it.
    pub fn match_value<B>(&self, value: &A, pattern: &Pattern1<A, B>) -> SumResult<B> {
        let label = self.type_of(value)?;
        let handler = pattern
            .handler(&label)
            .ok_or_else(|| missing_handler(&label))?;
        Ok(handler.call(value))
    }

    /// Bind `pattern` to this dispatcher's classifier.
    pub fn matcher<Args, B>(&self, pattern: Pattern<A, Args, B>) -> Matcher<A, Args, B> {
        Matcher::build(&self.classifier, pattern)
    }

    pub fn f<B>(&self, pattern: Pattern1<A, B>) -> Matcher1<A, B> {
        self.matcher(pattern)
    }

    pub fn f2<C, B>(&self, pattern: Pattern2<A, C, B>) -> Matcher2<A, C, B> {
        self.matcher(pattern)
    }

    pub fn f3<C, D, B>(&self, pattern: Pattern3<A, C, D, B>) -> Matcher3<A, C, D, B> {
        self.matcher(pattern)
    }

    pub fn f4<C, D, E, B>(&self, pattern: Pattern4<A, C, D, E, B>) -> Matcher4<A, C, D, E, B> {
        self.matcher(pattern)
    }

    pub fn f5<C, D, E, G, B>(
        &self,
        pattern: Pattern5<A, C, D, E, G, B>,
    ) -> Matcher5<A, C, D, E, G, B> {
        self.matcher(pattern)
    }

    /// Check that `pattern` has a handler for every declared variant.
    ///
    /// Direct classifiers do not declare their labels, so any pattern
    /// passes for them.
    pub fn check_exhaustive<Args, B>(&self, pattern: &Pattern<A, Args, B>) -> SumResult<()> {
        let missing: Vec<Label> = self
            .labels()
            .unwrap_or_default()
            .iter()
            .filter(|label| !pattern.contains(label))
            .cloned()
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(non_exhaustive(missing))
        }
    }

    /// Declared variant labels in order, when known.
    pub fn labels(&self) -> Option<&[Label]> {
        self.classifier.labels()
    }

    pub fn variant_count(&self) -> Option<usize> {
        self.labels().map(<[Label]>::len)
    }

    /// Whether classification stays within the unrolled window.
    pub fn is_unrolled(&self) -> bool {
        self.classifier.is_unrolled()
    }

    /// Member `name`, if present and of type `T`.
    pub fn member<T: Any>(&self, name: &str) -> Option<&T> {
        self.members.get(name)
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn member_names(&self) -> impl Iterator<Item = &Label> {
        self.members.names()
    }

    pub fn members(&self) -> &Members {
        &self.members
    }
}

impl<A> Clone for Sum<A> {
    fn clone(&self) -> Self {
        Sum {
            classifier: self.classifier.clone(),
            members: self.members.clone(),
        }
    }
}

impl<A> fmt::Debug for Sum<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sum")
            .field("labels", &self.labels())
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
