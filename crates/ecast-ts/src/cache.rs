//! Per-country memoization of prediction runs.

use std::collections::HashMap;
use std::sync::Arc;

use ecast_core::EnergyRecord;
use parking_lot::RwLock;

/// Shared, immutable sequence of predicted records.
pub type Predictions = Arc<[EnergyRecord]>;

/// Cache of computed predictions keyed by country identifier.
///
/// Entries never expire on their own; they live until [`invalidate`] or
/// [`clear`] removes them. The lock makes the cache safe to share between
/// threads, and lookups that hit only take the read lock.
///
/// [`invalidate`]: PredictionCache::invalidate
/// [`clear`]: PredictionCache::clear
#[derive(Debug, Default)]
pub struct PredictionCache {
    entries: RwLock<HashMap<String, Predictions>>,
}

impl PredictionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, country: &str) -> Option<Predictions> {
        self.entries.read().get(country).cloned()
    }

    /// Return the cached entry for `country`, or run `compute` and store its
    /// result. `compute` returning `None` leaves the cache untouched.
    pub fn get_or_compute<F>(&self, country: &str, compute: F) -> Option<Predictions>
    where
        F: FnOnce() -> Option<Predictions>,
    {
        if let Some(hit) = self.get(country) {
            return Some(hit);
        }

        let mut entries = self.entries.write();
        // another writer may have filled the slot while we waited
        if let Some(hit) = entries.get(country) {
            return Some(Arc::clone(hit));
        }
        let computed = compute()?;
        entries.insert(country.to_string(), Arc::clone(&computed));
        Some(computed)
    }

    /// Replace the entry for `country` with a fresh `compute` result.
    ///
    /// Removal and insertion happen under one write lock, so the returned
    /// sequence is always the one computed here. `compute` returning `None`
    /// leaves no entry behind.
    pub fn recompute<F>(&self, country: &str, compute: F) -> Option<Predictions>
    where
        F: FnOnce() -> Option<Predictions>,
    {
        let mut entries = self.entries.write();
        entries.remove(country);
        let computed = compute()?;
        entries.insert(country.to_string(), Arc::clone(&computed));
        Some(computed)
    }

    /// Drop the entry for `country`. Returns whether one was present.
    pub fn invalidate(&self, country: &str) -> bool {
        self.entries.write().remove(country).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn contains(&self, country: &str) -> bool {
        self.entries.read().contains_key(country)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Cached country identifiers, sorted.
    pub fn countries(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}
