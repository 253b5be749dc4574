//! Drill-down state for table rows.
//!
//! A row is "open" when its detail panel is shown. The set is page-scoped:
//! `PageState` empties it whenever the current page or the filter changes.

use std::collections::BTreeSet;

/// The set of currently expanded row keys on the active page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRows<K: Ord> {
    keys: BTreeSet<K>,
}

impl<K: Ord> Default for OpenRows<K> {
    fn default() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> OpenRows<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Flip a single row. Returns whether the row is open afterwards.
    pub fn toggle_in_place(&mut self, key: K) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Collapse every row.
    pub fn reset(&mut self) {
        self.keys.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}

/// Pure toggle: returns a new set with `key` flipped, leaving `open_rows` untouched.
pub fn toggle<K: Ord + Clone>(open_rows: &OpenRows<K>, key: K) -> OpenRows<K> {
    let mut next = open_rows.clone();
    next.toggle_in_place(key);
    next
}

pub fn is_open<K: Ord + Clone>(open_rows: &OpenRows<K>, key: &K) -> bool {
    open_rows.is_open(key)
}

/// An empty set, as installed on page or filter change.
pub fn reset<K: Ord + Clone>() -> OpenRows<K> {
    OpenRows::new()
}
