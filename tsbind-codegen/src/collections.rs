//! Insertion-ordered, deduplicated collection of type names.

use indexmap::IndexSet;

/// A list with set semantics.
///
/// [`OrderedSet::insert`] (add-if-absent) is the only way to grow the set, so
/// iteration order is always the order in which names were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: IndexSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.items.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Last name in insertion order.
    pub fn last(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Split into names matching `keep` and the rest, both in original order.
    pub fn partition(self, mut keep: impl FnMut(&str) -> bool) -> (Self, Self) {
        let mut kept = Self::new();
        let mut removed = Self::new();
        for name in self.items {
            if keep(&name) {
                kept.insert(name);
            } else {
                removed.insert(name);
            }
        }
        (kept, removed)
    }
}

impl<S: Into<String>> Extend<S> for OrderedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<indexmap::set::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.items
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}
