//! Extension layers.
//!
//! `Sum::extend` layers named members on top of a dispatcher. Members are
//! kept in an immutable, shared record; each layer copies the record, applies
//! its own entries (a name already present is overwritten, keeping its
//! original position) and produces a new record. Earlier dispatchers keep
//! their record untouched.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::label::Label;

/// A type-erased member value.
pub type Member = Arc<dyn Any + Send + Sync>;

/// A member function over the union's values.
///
/// Stored by `Extension::method` and read back with `Sum::method`.
pub type Method<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

/// Named members of a dispatcher, in first-insertion order.
#[derive(Clone, Default)]
pub struct Members {
    table: Arc<MemberTable>,
}

#[derive(Default)]
struct MemberTable {
    order: Vec<Label>,
    values: FxHashMap<Label, Member>,
}

impl Members {
    /// The member `name`, if present and of type `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.table
            .values
            .get(name)
            .and_then(|member| (**member).downcast_ref::<T>())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.values.contains_key(name)
    }

    /// Member names in first-insertion order.
    pub fn names(&self) -> impl Iterator<Item = &Label> {
        self.table.order.iter()
    }

    pub fn len(&self) -> usize {
        self.table.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.order.is_empty()
    }

    /// Copy of this record with `layer` applied on top.
    pub(crate) fn merged<A>(&self, layer: Extension<A>) -> Members {
        let mut order = self.table.order.clone();
        let mut values = self.table.values.clone();
        for (name, member) in layer.entries {
            if values.insert(name.clone(), member).is_none() {
                order.push(name);
            }
        }
        Members {
            table: Arc::new(MemberTable { order, values }),
        }
    }
}

impl fmt::Debug for Members {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// One extension layer, returned from the builder passed to `Sum::extend`.
///
/// ```text
/// let shapes = shapes
///     .extend(|_| Extension::new().with("unit", 1.0_f64))
///     .extend(|prev| {
///         let unit = prev.member::<f64>("unit").copied().unwrap_or_default();
///         Extension::new().with("double_unit", unit * 2.0)
///     });
/// ```
pub struct Extension<A> {
    entries: Vec<(Label, Member)>,
    _values: PhantomData<fn(&A)>,
}

impl<A> Extension<A> {
    pub fn new() -> Self {
        Extension {
            entries: Vec::new(),
            _values: PhantomData,
        }
    }

    /// Add a member. Later entries with the same name win.
    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, name: impl Into<Label>, value: T) -> Self {
        self.entries.push((name.into(), Arc::new(value)));
        self
    }

    /// Add a function member over the union's values.
    #[must_use]
    pub fn method<R, F>(self, name: impl Into<Label>, func: F) -> Self
    where
        A: 'static,
        R: 'static,
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        let method: Method<A, R> = Arc::new(func);
        self.with(name, method)
    }

    /// Names added by this layer, in order.
    pub fn names(&self) -> impl Iterator<Item = &Label> {
        self.entries.iter().map(|(name, _)| name)
    }
}

impl<A> Default for Extension<A> {
    fn default() -> Self {
        Self::new()
    }
}
