//! Property-based tests for classification and dispatch.
//!
//! Builds unions of `n` variants over integers, where variant `Vi` accepts
//! every value whose residue mod `n` is `i`, and checks that the unrolled
//! and scanning paths agree with that definition.

#![allow(
    clippy::redundant_closure_for_method_calls,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tagsum::predicates::never;
use tagsum::{Extension, Label, Pattern1, Predicate, Predicates, Sum, SumErrorKind};

fn residues(n: usize) -> Sum<i64> {
    let modulus = n as i64;
    let predicates: Predicates<i64> = (0..n)
        .map(|i| {
            let residue = i as i64;
            let check: Predicate<i64> = Arc::new(move |v: &i64| v.rem_euclid(modulus) == residue);
            (format!("V{i}"), check)
        })
        .collect();
    match Sum::from_predicates(predicates) {
        Ok(sum) => sum,
        Err(err) => panic!("residue union should build: {err}"),
    }
}

/// Handlers that report the label they were dispatched to.
fn echo(n: usize) -> Pattern1<i64, String> {
    (0..n).fold(Pattern1::new(), |pattern, i| {
        pattern.on(format!("V{i}"), move |_: &i64| format!("V{i}"))
    })
}

proptest! {
    #[test]
    fn classification_matches_construction(n in 1usize..16, value in -10_000i64..10_000) {
        let sum = residues(n);
        prop_assert_eq!(sum.is_unrolled(), n <= tagsum::UNROLL_WINDOW);
        let expected = format!("V{}", value.rem_euclid(n as i64));
        prop_assert_eq!(sum.type_of(&value).map(|l| l.to_string()), Ok(expected));
    }

    #[test]
    fn early_and_late_variants_on_wide_union(value in -10_000i64..10_000) {
        let sum = residues(12);
        let early = value - value.rem_euclid(12);
        let late = early + 11;
        prop_assert_eq!(sum.type_of(&early), Ok(Label::from("V0")));
        prop_assert_eq!(sum.type_of(&late), Ok(Label::from("V11")));
    }

    #[test]
    fn membership_forms_agree(n in 1usize..14, label in 0usize..16, value in any::<i64>()) {
        let sum = residues(n);
        let label = format!("V{label}");
        let predicate = sum.is_of_type(label.clone());
        prop_assert_eq!(predicate(&value), sum.matches(&label, &value));
    }

    #[test]
    fn match_value_uses_the_classified_handler(n in 1usize..14, value in any::<i64>()) {
        let sum = residues(n);
        let pattern = echo(n);
        let label = sum.type_of(&value).map_err(|e| e.kind());
        let via_handler = label
            .clone()
            .map(|l| pattern.handler(&l).map(|h| h.call(&value)));
        prop_assert_eq!(sum.match_value(&value, &pattern).map_err(|e| e.kind()).map(Some), via_handler);
        prop_assert_eq!(sum.match_value(&value, &pattern).ok(), label.ok().map(|l| l.to_string()));
    }

    #[test]
    fn matcher_call_agrees_with_named_handler(n in 1usize..14, value in any::<i64>()) {
        let sum = residues(n);
        let matcher = sum.f(echo(n));
        prop_assert_eq!(matcher.is_unrolled(), n <= tagsum::UNROLL_WINDOW);
        let named = sum
            .type_of(&value)
            .ok()
            .and_then(|l| matcher.handler(&l).map(|h| h.call(&value)));
        prop_assert_eq!(matcher.call(&value).ok(), named);
    }

    #[test]
    fn first_match_wins(value in any::<i64>(), shadowed in 0usize..12) {
        let catch_all: Predicate<i64> = Arc::new(|_: &i64| true);
        let predicates: Predicates<i64> = (0..12)
            .map(|i| {
                let check: Predicate<i64> = if i == shadowed {
                    Arc::clone(&catch_all)
                } else {
                    never()
                };
                (format!("V{i}"), check)
            })
            .chain(std::iter::once(("Last".to_string(), Arc::clone(&catch_all))))
            .collect();
        let sum = match Sum::from_predicates(predicates) {
            Ok(sum) => sum,
            Err(err) => panic!("union should build: {err}"),
        };
        prop_assert_eq!(sum.type_of(&value).map(|l| l.to_string()), Ok(format!("V{shadowed}")));
    }

    #[test]
    fn missing_handler_never_yields_a_default(n in 2usize..14, value in any::<i64>()) {
        let sum = residues(n);
        let partial = Pattern1::new().on("V0", |_: &i64| "zero".to_string());
        let result = sum.f(partial).call(&value).map_err(|e| e.kind());
        if value.rem_euclid(n as i64) == 0 {
            prop_assert_eq!(result, Ok("zero".to_string()));
        } else {
            prop_assert_eq!(result, Err(SumErrorKind::MissingHandler));
        }
    }

    #[test]
    fn extension_chain_leaves_base_untouched(start in any::<i32>()) {
        let base = residues(3);
        let first = base.extend(|_| Extension::new().with("a", i64::from(start)));
        let second = first.extend(|prev| {
            let a = prev.member::<i64>("a").copied().unwrap_or_default();
            Extension::new().with("b", a + 1)
        });
        prop_assert_eq!(second.member::<i64>("b").copied(), Some(i64::from(start) + 1));
        prop_assert!(!base.has_member("a"));
        prop_assert!(!base.has_member("b"));
    }
}

#[test]
fn no_matching_predicate_is_a_classification_failure() {
    let evens = match Sum::from_predicates(Predicates::new().variant_fn("Even", |v: &i64| v % 2 == 0)) {
        Ok(sum) => sum,
        Err(err) => panic!("union should build: {err}"),
    };
    assert_eq!(evens.type_of(&3).map_err(|e| e.kind()), Err(SumErrorKind::ClassificationFailure));
    assert_eq!(
        evens.f(echo(1)).call(&3).map_err(|e| e.kind()),
        Err(SumErrorKind::ClassificationFailure)
    );
}

#[test]
fn extend_chain_sees_previous_layer() {
    let base = residues(2);
    let extended = base
        .extend(|_| Extension::new().with("a", 1_i64))
        .extend(|y| Extension::new().with("b", y.member::<i64>("a").copied().unwrap_or_default() + 1));
    assert_eq!(extended.member::<i64>("b"), Some(&2));
    assert!(!base.has_member("a"));
}
