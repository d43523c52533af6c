//! Handler patterns.
//!
//! A `Pattern<A, Args, B>` maps variant labels to handlers. Every handler
//! receives the classified value plus the extra positional arguments `Args`
//! (a tuple of zero to four types) and returns `B`.
//!
//! Handlers are added with `on`, which exists once per arity:
//!
//! ```text
//! let area = Pattern1::new()
//!     .on("Circle", |c: &Value| PI * radius(c).powi(2))
//!     .on("Square", |s: &Value| side(s).powi(2));
//!
//! let scaled = Pattern2::new()
//!     .on("Circle", |c: &Value, k: f64| k * radius(c))
//!     .on("Square", |s: &Value, k: f64| k * side(s));
//! ```

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::classify::UNROLL_WINDOW;
use crate::label::Label;

/// Type-erased handler body. Extra arguments arrive packed in `Args`.
pub type HandlerFn<A, Args, B> = dyn Fn(&A, Args) -> B + Send + Sync;

/// A single variant handler.
///
/// `call` takes the extra arguments positionally; `invoke` takes them packed.
pub struct Handler<A, Args, B> {
    func: Arc<HandlerFn<A, Args, B>>,
}

impl<A, Args, B> Handler<A, Args, B> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&A, Args) -> B + Send + Sync + 'static,
    {
        Handler {
            func: Arc::new(func),
        }
    }

    /// Invoke with packed extra arguments.
    #[inline]
    pub fn invoke(&self, value: &A, args: Args) -> B {
        (self.func)(value, args)
    }
}

impl<A, Args, B> Clone for Handler<A, Args, B> {
    fn clone(&self) -> Self {
        Handler {
            func: Arc::clone(&self.func),
        }
    }
}

impl<A, Args, B> fmt::Debug for Handler<A, Args, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

/// Label to handler mapping.
///
/// Labels keep insertion order. Adding a handler for a label that is already
/// present replaces the earlier handler in place.
pub struct Pattern<A, Args, B> {
    handlers: SmallVec<[(Label, Handler<A, Args, B>); UNROLL_WINDOW]>,
}

/// Pattern over handlers taking only the value.
pub type Pattern1<A, R> = Pattern<A, (), R>;
/// Pattern over handlers taking one extra argument.
pub type Pattern2<A, B, R> = Pattern<A, (B,), R>;
/// Pattern over handlers taking two extra arguments.
pub type Pattern3<A, B, C, R> = Pattern<A, (B, C), R>;
/// Pattern over handlers taking three extra arguments.
pub type Pattern4<A, B, C, D, R> = Pattern<A, (B, C, D), R>;
/// Pattern over handlers taking four extra arguments.
pub type Pattern5<A, B, C, D, E, R> = Pattern<A, (B, C, D, E), R>;

impl<A, Args, B> Pattern<A, Args, B> {
    pub fn new() -> Self {
        Pattern {
            handlers: SmallVec::new(),
        }
    }

    /// Add or replace the handler for `label`.
    #[must_use]
    pub fn with_handler(mut self, label: impl Into<Label>, handler: Handler<A, Args, B>) -> Self {
        let label = label.into();
        match self.handlers.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => *slot = handler,
            None => self.handlers.push((label, handler)),
        }
        self
    }

    /// Handler registered for `label`.
    pub fn handler(&self, label: &str) -> Option<&Handler<A, Args, B>> {
        self.handlers
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, handler)| handler)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.handler(label).is_some()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.handlers.iter().map(|(label, _)| label)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&Label, &Handler<A, Args, B>)> {
        self.handlers.iter().map(|(label, handler)| (label, handler))
    }
}

impl<A, Args, B> Default for Pattern<A, Args, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, Args, B> Clone for Pattern<A, Args, B> {
    fn clone(&self) -> Self {
        Pattern {
            handlers: self.handlers.clone(),
        }
    }
}

impl<A, Args, B> fmt::Debug for Pattern<A, Args, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.labels()).finish()
    }
}
