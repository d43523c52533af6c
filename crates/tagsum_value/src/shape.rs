//! Structural introspection used by the predicate toolkit.

use crate::value::Value;

/// Introspection surface for dynamically shaped data.
///
/// The toolkit predicates only ever look at a value through this trait, so
/// any dynamic representation can be classified by implementing it.
pub trait Shape: Sized {
    /// The value a missing record field reads as.
    fn absent() -> Self;

    /// Whether the value exists (is not the absent value).
    fn is_present(&self) -> bool;

    fn as_str(&self) -> Option<&str>;

    fn as_bool(&self) -> Option<bool>;

    fn as_number(&self) -> Option<f64>;

    fn is_function(&self) -> bool;

    /// Elements, when the value is an array.
    fn as_array(&self) -> Option<&[Self]>;

    /// Whether the value is a compound object (array or record).
    fn is_object(&self) -> bool;

    /// A named field, when the value is a record that has it.
    fn field(&self, name: &str) -> Option<&Self>;
}

impl Shape for Value {
    fn absent() -> Self {
        Value::Null
    }

    fn is_present(&self) -> bool {
        !self.is_null()
    }

    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn as_bool(&self) -> Option<bool> {
        Value::as_bool(self)
    }

    fn as_number(&self) -> Option<f64> {
        Value::as_number(self)
    }

    fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    fn as_array(&self) -> Option<&[Self]> {
        self.as_list()
    }

    fn is_object(&self) -> bool {
        matches!(self, Value::List(_) | Value::Record(_))
    }

    fn field(&self, name: &str) -> Option<&Self> {
        Value::field(self, name)
    }
}
