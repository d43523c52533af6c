//! Classifier resolution.
//!
//! A sum type is declared in one of three ways, all captured by
//! [`SumInput`]:
//!
//! - a direct classification function (`TypeOf`), used verbatim;
//! - an ordered label to predicate mapping (`Predicates`);
//! - a producer that builds that mapping from the predicate [`Toolkit`].
//!
//! Each resolves to a single `Classifier`. Predicate mappings become a
//! `PredicateTable`, whose first [`UNROLL_WINDOW`] entries are checked by
//! an unrolled branch chain before the remaining entries are scanned.
//! Evaluation is first match wins in declaration order on both paths.

mod table;

use std::sync::Arc;

use tagsum_value::{Predicate, Toolkit};

use crate::errors::SumResult;
use crate::label::Label;

pub(crate) use table::PredicateTable;

/// Number of leading variants checked without a scan.
pub const UNROLL_WINDOW: usize = 10;

/// A direct classification function.
///
/// `None` means the value does not belong to the union.
pub type TypeOfFn<A> = dyn Fn(&A) -> Option<Label> + Send + Sync;

/// Builds a predicate mapping from the toolkit.
pub type PredicateProducer<A> = Box<dyn FnOnce(&Toolkit) -> Predicates<A>>;

/// Ordered label to predicate declarations.
///
/// Declaration order is the tie-break order: when several predicates accept
/// a value, the earliest declared label wins.
pub struct Predicates<A> {
    entries: Vec<(Label, Predicate<A>)>,
}

impl<A> Predicates<A> {
    pub fn new() -> Self {
        Predicates {
            entries: Vec::new(),
        }
    }

    /// Declare a variant classified by `check`.
    #[must_use]
    pub fn variant(mut self, label: impl Into<Label>, check: Predicate<A>) -> Self {
        self.entries.push((label.into(), check));
        self
    }

    /// Declare a variant classified by a closure.
    #[must_use]
    pub fn variant_fn<F>(self, label: impl Into<Label>, check: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.variant(label, Arc::new(check))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.entries.iter().map(|(label, _)| label)
    }

    pub(crate) fn into_entries(self) -> Vec<(Label, Predicate<A>)> {
        self.entries
    }
}

impl<A> Default for Predicates<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, L: Into<Label>> FromIterator<(L, Predicate<A>)> for Predicates<A> {
    fn from_iter<I: IntoIterator<Item = (L, Predicate<A>)>>(iter: I) -> Self {
        Predicates {
            entries: iter
                .into_iter()
                .map(|(label, check)| (label.into(), check))
                .collect(),
        }
    }
}

/// How a sum type classifies its values.
pub enum SumInput<A> {
    /// Direct classification function.
    TypeOf(Arc<TypeOfFn<A>>),
    /// Label to predicate mapping.
    Predicates(Predicates<A>),
    /// Producer of a label to predicate mapping.
    Producer(PredicateProducer<A>),
}

impl<A> SumInput<A> {
    pub fn type_of<F>(classify: F) -> Self
    where
        F: Fn(&A) -> Option<Label> + Send + Sync + 'static,
    {
        SumInput::TypeOf(Arc::new(classify))
    }

    pub fn predicates(predicates: Predicates<A>) -> Self {
        SumInput::Predicates(predicates)
    }

    pub fn producer<F>(produce: F) -> Self
    where
        F: FnOnce(&Toolkit) -> Predicates<A> + 'static,
    {
        SumInput::Producer(Box::new(produce))
    }
}

impl<A> From<Predicates<A>> for SumInput<A> {
    fn from(predicates: Predicates<A>) -> Self {
        SumInput::Predicates(predicates)
    }
}

/// A type whose variant label is stored explicitly, such as a Rust enum.
///
/// ```text
/// impl Tagged for Shape {
///     const TAGS: &'static [&'static str] = &["Circle", "Square"];
///     fn tag(&self) -> &'static str {
///         match self { Shape::Circle(_) => "Circle", Shape::Square(_) => "Square" }
///     }
/// }
/// ```
pub trait Tagged {
    /// Every label `tag` can return, in declaration order.
    const TAGS: &'static [&'static str];

    fn tag(&self) -> &'static str;
}

/// Resolved classification strategy of a sum type.
///
/// Cheap to clone: every variant shares its state behind `Arc`.
pub(crate) enum Classifier<A> {
    /// User supplied function. `labels` is known for `Tagged` types only.
    Direct {
        classify: Arc<TypeOfFn<A>>,
        labels: Option<Arc<[Label]>>,
    },
    Table(Arc<PredicateTable<A>>),
}

impl<A> Clone for Classifier<A> {
    fn clone(&self) -> Self {
        match self {
            Classifier::Direct { classify, labels } => Classifier::Direct {
                classify: Arc::clone(classify),
                labels: labels.clone(),
            },
            Classifier::Table(table) => Classifier::Table(Arc::clone(table)),
        }
    }
}

impl<A: 'static> Classifier<A> {
    /// Resolve any input form to a classifier.
    pub(crate) fn resolve(input: SumInput<A>) -> SumResult<Self> {
        match input {
            SumInput::TypeOf(classify) => Ok(Self::direct(classify)),
            SumInput::Predicates(predicates) => Self::from_predicates(predicates),
            SumInput::Producer(produce) => Self::from_predicates(produce(&Toolkit::new())),
        }
    }

    /// A direct classifier. Never fails.
    pub(crate) fn direct(classify: Arc<TypeOfFn<A>>) -> Self {
        Classifier::Direct {
            classify,
            labels: None,
        }
    }

    fn from_predicates(predicates: Predicates<A>) -> SumResult<Self> {
        let table = PredicateTable::build(predicates)?;
        Ok(Classifier::Table(Arc::new(table)))
    }

    pub(crate) fn tagged() -> Self
    where
        A: Tagged,
    {
        let labels: Arc<[Label]> = A::TAGS.iter().copied().map(Label::from_static).collect();
        Classifier::Direct {
            classify: Arc::new(|value: &A| Some(Label::from_static(value.tag()))),
            labels: Some(labels),
        }
    }
}

impl<A> Classifier<A> {
    /// The label of `value`, or `None` if it is outside the union.
    pub(crate) fn classify(&self, value: &A) -> Option<Label> {
        match self {
            Classifier::Direct { classify, .. } => classify(value),
            Classifier::Table(table) => table.slot_of(value).map(|slot| table.label(slot).clone()),
        }
    }

    /// Whether `value` classifies as `label`.
    pub(crate) fn classifies_as(&self, value: &A, label: &str) -> bool {
        match self {
            Classifier::Direct { classify, .. } => {
                classify(value).is_some_and(|resolved| resolved == label)
            }
            Classifier::Table(table) => table
                .slot_of(value)
                .is_some_and(|slot| table.label(slot) == label),
        }
    }

    /// Declared labels, when the classifier knows its variant set.
    pub(crate) fn labels(&self) -> Option<&[Label]> {
        match self {
            Classifier::Direct { labels, .. } => labels.as_deref(),
            Classifier::Table(table) => Some(table.labels()),
        }
    }

    /// Whether classification runs entirely through the unrolled window.
    pub(crate) fn is_unrolled(&self) -> bool {
        match self {
            Classifier::Direct { .. } => false,
            Classifier::Table(table) => table.is_unrolled(),
        }
    }
}
