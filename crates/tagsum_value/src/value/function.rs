//! Native function values.

use std::fmt;
use std::sync::Arc;

use super::Value;

/// Signature of a native function stored inside a `Value`.
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named native function.
///
/// Equality is identity: two function values are equal only when they share
/// the same underlying closure.
#[derive(Clone)]
pub struct FunctionValue {
    name: Arc<str>,
    func: Arc<NativeFn>,
}

impl FunctionValue {
    /// Wrap a closure as a function value.
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        FunctionValue {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The name the function was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &&*self.name)
            .finish_non_exhaustive()
    }
}
