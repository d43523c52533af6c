//! Predicate table with an unrolled fast path.

use rustc_hash::FxHashSet;
use tagsum_value::predicates::never;
use tagsum_value::Predicate;

use super::{Predicates, UNROLL_WINDOW};
use crate::errors::{duplicate_variant, SumResult};
use crate::label::Label;

/// Expands to one `if` per slot, returning the first slot whose predicate
/// accepts the value.
macro_rules! first_match {
    ($slots:expr, $value:expr; $($slot:literal)+) => {
        $(
            if ($slots[$slot])($value) {
                return Some($slot);
            }
        )+
    };
}

/// Classification table built from a predicate mapping.
///
/// Slot `i` holds the `i`-th declared variant. The first `UNROLL_WINDOW`
/// predicates live in a fixed array padded with `never`, so unused slots
/// cannot match. Later predicates are scanned linearly.
pub(crate) struct PredicateTable<A> {
    labels: Box<[Label]>,
    unrolled: [Predicate<A>; UNROLL_WINDOW],
    overflow: Box<[Predicate<A>]>,
}

impl<A: 'static> PredicateTable<A> {
    /// Build the table, rejecting duplicate labels.
    pub(crate) fn build(predicates: Predicates<A>) -> SumResult<Self> {
        let entries = predicates.into_entries();

        let mut seen = FxHashSet::default();
        for (label, _) in &entries {
            if !seen.insert(label.clone()) {
                return Err(duplicate_variant(label.clone()));
            }
        }

        let mut labels = Vec::with_capacity(entries.len());
        let mut checks = Vec::with_capacity(entries.len());
        for (label, check) in entries {
            labels.push(label);
            checks.push(check);
        }

        let unrolled = std::array::from_fn(|slot| checks.get(slot).cloned().unwrap_or_else(never));
        let overflow = checks.into_iter().skip(UNROLL_WINDOW).collect();

        Ok(PredicateTable {
            labels: labels.into_boxed_slice(),
            unrolled,
            overflow,
        })
    }
}

impl<A> PredicateTable<A> {
    /// Slot of the first predicate accepting `value`.
    #[inline]
    pub(crate) fn slot_of(&self, value: &A) -> Option<usize> {
        first_match!(self.unrolled, value; 0 1 2 3 4 5 6 7 8 9);
        self.overflow
            .iter()
            .position(|check| check(value))
            .map(|offset| UNROLL_WINDOW + offset)
    }

    /// Label bound to `slot`.
    ///
    /// Slots come from `slot_of`, which only returns declared slots.
    #[inline]
    pub(crate) fn label(&self, slot: usize) -> &Label {
        &self.labels[slot]
    }

    pub(crate) fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub(crate) fn is_unrolled(&self) -> bool {
        self.labels.len() <= UNROLL_WINDOW
    }
}
