//! Variant labels.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Name of a variant.
///
/// Literal labels are stored without allocation; runtime labels share one
/// `Arc<str>`. Equality, ordering and hashing only look at the text, so a
/// `Label` can be looked up by `&str` in hashed collections.
#[derive(Clone)]
pub struct Label(Repr);

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    Shared(Arc<str>),
}

impl Label {
    /// Label from a string literal.
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        Label(Repr::Static(name))
    }

    /// Label from borrowed text (allocates).
    pub fn new(name: &str) -> Self {
        Label(Repr::Shared(Arc::from(name)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Static(name) => name,
            Repr::Shared(name) => name,
        }
    }
}

impl Deref for Label {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Label {}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

// Must agree with `str`'s hash for `Borrow<str>` lookups.
impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&'static str> for Label {
    fn from(name: &'static str) -> Self {
        Label::from_static(name)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label(Repr::Shared(Arc::from(name)))
    }
}

impl From<Arc<str>> for Label {
    fn from(name: Arc<str>) -> Self {
        Label(Repr::Shared(name))
    }
}

impl From<&Label> for Label {
    fn from(label: &Label) -> Self {
        label.clone()
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_static_and_shared_compare_by_text() {
        let a = Label::from_static("Circle");
        let b = Label::new("Circle");
        let c = Label::from(String::from("Square"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert_eq!(a, "Circle");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = FxHashMap::default();
        map.insert(Label::new("Circle"), 1);
        map.insert(Label::from_static("Square"), 2);
        assert_eq!(map.get("Circle"), Some(&1));
        assert_eq!(map.get("Square"), Some(&2));
        assert_eq!(map.get("Triangle"), None);
    }

    #[test]
    fn test_display_and_debug() {
        let label = Label::from("Circle");
        assert_eq!(label.to_string(), "Circle");
        assert_eq!(format!("{label:?}"), "\"Circle\"");
        assert_eq!(label.len(), 6);
    }
}
