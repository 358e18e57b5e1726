//! In-memory name cache.
//!
//! Keys are the exact (case-sensitive) name strings used for the fetch.
//! Entries live for the lifetime of the cache; there is no eviction or TTL.

use crate::domain::model::NameRecordSet;
use dashmap::DashMap;
use std::sync::Arc;

/// Concurrent map from name to the record set fetched for it.
///
/// Two concurrent misses for the same name may both store a set; the last
/// insert wins.
#[derive(Debug, Default)]
pub struct NameCache {
    entries: DashMap<String, Arc<NameRecordSet>>,
}

impl NameCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<NameRecordSet>> {
        self.entries.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Store a set under its own name and hand back the shared copy.
    pub fn insert(&self, set: NameRecordSet) -> Arc<NameRecordSet> {
        let set = Arc::new(set);
        self.entries.insert(set.name.clone(), Arc::clone(&set));
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached names, sorted for stable output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}
