//! Set catalog - display name to set code resolution.
//!
//! Populated once at session start from [`CardLookup::list_sets`] and
//! read-only for the rest of the session.
//!
//! [`CardLookup::list_sets`]: crate::CardLookup::list_sets

use crate::{SetCode, SetInfo, SetName};
use std::collections::BTreeMap;

/// Mapping from a human-readable set name to its internal code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCatalog {
    sets: BTreeMap<SetName, SetCode>,
}

impl SetCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            sets: BTreeMap::new(),
        }
    }

    /// Build a catalog from a set listing.
    pub fn from_sets(sets: Vec<SetInfo>) -> Self {
        Self {
            sets: sets.into_iter().map(|s| (s.name, s.code)).collect(),
        }
    }

    /// Resolve a display name to its set code.
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.sets.get(name).map(String::as_str)
    }

    /// Iterate display names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Number of known sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check whether the catalog has been populated.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
