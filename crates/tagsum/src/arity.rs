//! Arity-specialized entry points.
//!
//! Patterns, handlers and matchers store extra arguments packed in a tuple.
//! This module generates the positional forms (`Pattern::on`,
//! `Handler::call`, `Matcher::call`) for zero to four extra arguments.

use crate::errors::SumResult;
use crate::label::Label;
use crate::matcher::Matcher;
use crate::pattern::{Handler, Pattern};

macro_rules! impl_arity {
    ($($arg:ident: $ty:ident),*) => {
        impl<A: 'static, $($ty: 'static,)* R: 'static> Pattern<A, ($($ty,)*), R> {
            /// Add or replace the handler for `label`.
            #[must_use]
            pub fn on<H>(self, label: impl Into<Label>, handler: H) -> Self
            where
                H: Fn(&A $(, $ty)*) -> R + Send + Sync + 'static,
            {
                self.with_handler(
                    label,
                    Handler::new(move |value: &A, ($($arg,)*): ($($ty,)*)| {
                        handler(value $(, $arg)*)
                    }),
                )
            }
        }

        impl<A, $($ty,)* R> Handler<A, ($($ty,)*), R> {
            #[inline]
            pub fn call(&self, value: &A $(, $arg: $ty)*) -> R {
                self.invoke(value, ($($arg,)*))
            }
        }

        impl<A, $($ty,)* R> Matcher<A, ($($ty,)*), R> {
            /// Classify `value` and run its handler with the extra arguments.
            #[inline]
            pub fn call(&self, value: &A $(, $arg: $ty)*) -> SumResult<R> {
                self.call_with(value, ($($arg,)*))
            }
        }
    };
}

impl_arity!();
impl_arity!(b: B);
impl_arity!(b: B, c: C);
impl_arity!(b: B, c: C, d: D);
impl_arity!(b: B, c: C, d: D, e: E);
