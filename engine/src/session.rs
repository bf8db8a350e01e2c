//! Session - the single owner of tracker state.
//!
//! One [`Session`] value holds the inventory and set catalog for the life
//! of the process and exposes the operations the presentation layer binds
//! to. There are no process-wide singletons: every caller goes through
//! the session it was handed.

use crate::{
    codec, error::Result, CardKey, CardLookup, Count, Inventory, SetCatalog, Variant,
};
use std::path::Path;

/// A running tracker session.
///
/// Generic over the lookup implementation so tests can drive the session
/// with an in-memory card database.
#[derive(Debug)]
pub struct Session<L> {
    lookup: L,
    inventory: Inventory,
    catalog: SetCatalog,
}

impl<L: CardLookup> Session<L> {
    /// Create a session with an empty inventory and catalog.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            inventory: Inventory::new(),
            catalog: SetCatalog::new(),
        }
    }

    /// Populate the set catalog from the lookup service.
    ///
    /// Called once at startup; returns the number of sets loaded. The
    /// session stays usable if this fails - set selection just falls back
    /// to raw codes.
    pub fn load_catalog(&mut self) -> Result<usize> {
        self.catalog = SetCatalog::from_sets(self.lookup.list_sets()?);
        Ok(self.catalog.len())
    }

    /// The set catalog.
    pub fn catalog(&self) -> &SetCatalog {
        &self.catalog
    }

    /// The current tally.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Resolve a card and tally one copy of it.
    ///
    /// The raw number is submitted to the lookup as typed; the key is
    /// built from its padded form. Returns the key and its new count.
    /// Lookup failures leave the inventory untouched.
    pub fn add_entry(
        &mut self,
        set_code: &str,
        raw_number: &str,
        variant: Variant,
    ) -> Result<(CardKey, Count)> {
        let name = self.lookup.resolve(set_code, raw_number)?;
        let key = CardKey::new(raw_number, name, variant);
        let count = self.inventory.add(key.clone());
        Ok((key, count))
    }

    /// Drop one copy of the entry behind a displayed key string.
    ///
    /// Absent and unparseable keys are a no-op: the string came from the
    /// listing, so either means the entry is already gone.
    pub fn remove_entry(&mut self, packed: &str) {
        if let Ok(key) = CardKey::parse(packed) {
            self.inventory.remove(&key);
        }
    }

    /// Export the tally to a CSV file in the current schema.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<()> {
        codec::encode_to_path(&self.inventory, path)
    }

    /// Merge a CSV file (current or legacy schema) into the tally.
    pub fn import_from(&mut self, path: impl AsRef<Path>) -> Result<codec::ImportReport> {
        codec::decode_from_path(&mut self.inventory, path)
    }

    /// Entries in display order.
    pub fn snapshot(&self) -> impl Iterator<Item = (&CardKey, Count)> {
        self.inventory.snapshot()
    }
}
