//! Ordered typed key/value storage.
//!
//! [`TypedValues`] is the single store behind both per-owner attributes
//! ([`AttributeSet`](crate::attribute::AttributeSet)) and global options
//! ([`OptionSet`](crate::option::OptionSet)). Entries are kept in attach
//! order and are never removed or edited. A lookup by kind returns the most
//! recently attached entry of that kind; older entries of the same kind stay
//! in storage and are only reachable through [`TypedValues::iter`].

use std::fmt;

/// A single kind/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K> {
    kind: K,
    value: String,
}

impl<K: Copy> Entry<K> {
    /// Create a new entry, taking ownership of `value`.
    pub fn new(kind: K, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Get the entry kind.
    pub fn kind(&self) -> K {
        self.kind
    }

    /// Borrow the raw string value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<K: fmt::Display> fmt::Display for Entry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = \"{}\"", self.kind, self.value)
    }
}

/// Append-only sequence of [`Entry`] values with last-write-wins lookup.
///
/// # Examples
///
/// ```
/// use msc_core::attribute::AttrKind;
/// use msc_core::values::TypedValues;
///
/// let mut values = TypedValues::new();
/// values.attach(AttrKind::Label, "first");
/// values.attach(AttrKind::Label, "second");
///
/// assert_eq!(values.lookup(AttrKind::Label), Some("second"));
/// assert_eq!(values.lookup(AttrKind::Url), None);
/// assert_eq!(values.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedValues<K> {
    entries: Vec<Entry<K>>,
}

impl<K> Default for TypedValues<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> TypedValues<K> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry. A previous entry of the same kind is shadowed, not replaced.
    pub fn attach(&mut self, kind: K, value: impl Into<String>) {
        self.entries.push(Entry::new(kind, value));
    }

    /// Get the value of the most recently attached entry of `kind`.
    pub fn lookup(&self, kind: K) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.kind == kind)
            .map(Entry::value)
    }

    /// Number of physical entries, shadowed ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over raw entries in attach order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K>> {
        self.entries.iter()
    }
}

impl<'a, K> IntoIterator for &'a TypedValues<K> {
    type Item = &'a Entry<K>;
    type IntoIter = std::slice::Iter<'a, Entry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
