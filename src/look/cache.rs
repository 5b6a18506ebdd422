//! Lazily populated cache slots
//!
//! Each slot wraps a [`OnceCell`]. Concurrent first callers block on the cell
//! while one of them runs the initializer, and an empty value (an empty log
//! message, a changeset with no paths) counts as populated. A failed
//! initializer leaves the cell empty, so a later call retries.

use crate::error::LookResult;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// A single memoized value
pub(crate) struct Slot<T> {
    name: &'static str,
    cell: OnceCell<T>,
}

impl<T: Clone> Slot<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, computing it first if needed
    pub(crate) fn get_or_try_init<F>(&self, init: F) -> LookResult<T>
    where
        F: FnOnce() -> LookResult<T>,
    {
        self.cell
            .get_or_try_init(|| init().inspect(|_| debug!("Cached {}", self.name)))
            .cloned()
    }

    #[cfg(test)]
    pub(crate) fn is_populated(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Memoized values keyed by an argument, e.g. a repository path.
///
/// The map lock only guards cell lookup. Initializers for distinct keys run
/// in parallel; callers of the same key wait on that key's cell.
pub(crate) struct KeyedSlot<K, V> {
    name: &'static str,
    cells: Mutex<HashMap<K, Arc<OnceCell<V>>>>,
}

impl<K: Eq + Hash + Clone, V: Clone> KeyedSlot<K, V> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            cells: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn get_or_try_init<F>(&self, key: &K, init: F) -> LookResult<V>
    where
        F: FnOnce() -> LookResult<V>,
    {
        let cell = self.cell(key);
        cell.get_or_try_init(|| init().inspect(|_| debug!("Cached {} entry", self.name)))
            .cloned()
    }

    fn cell(&self, key: &K) -> Arc<OnceCell<V>> {
        // Entries are inserted whole, so a poisoned map is still consistent
        let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cells.entry(key.clone()).or_default())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|cell| cell.get().is_some())
            .count()
    }
}
