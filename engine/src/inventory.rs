//! Inventory - the duplicate tally.
//!
//! Maps a [`CardKey`] to how many copies are on hand. Counts at rest are
//! always >= 1: a mutation that would leave a count at zero removes the
//! entry instead, so absent and zero are the same state.

use crate::{CardKey, Count};
use std::collections::BTreeMap;

/// The tally of duplicate cards, sorted by key.
///
/// Backed by a `BTreeMap` so iteration order is the canonical display
/// order (number, then name, then variant) with no extra sorting step.
/// Persistence goes through the [`codec`](crate::codec) module, not serde.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    counts: BTreeMap<CardKey, Count>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Tally one more copy of a card, creating the entry at 1 if absent.
    ///
    /// Returns the new count.
    pub fn add(&mut self, key: CardKey) -> Count {
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Drop one copy of a card, deleting the entry when the count hits
    /// zero. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &CardKey) {
        if let Some(count) = self.counts.get_mut(key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(key);
            }
        }
    }

    /// Add a signed delta to a card's count, creating the entry if absent.
    ///
    /// Used by import. A resulting count <= 0 deletes the entry (and a
    /// non-positive delta against an absent key creates nothing), the
    /// same floor-at-zero rule [`Inventory::remove`] follows.
    pub fn merge(&mut self, key: CardKey, delta: i64) {
        let current = self.counts.get(&key).copied().unwrap_or(0) as i64;
        let next = current.saturating_add(delta);
        if next <= 0 {
            self.counts.remove(&key);
        } else {
            self.counts.insert(key, next.min(Count::MAX as i64) as Count);
        }
    }

    /// Get the count for a key, if present.
    pub fn get(&self, key: &CardKey) -> Option<Count> {
        self.counts.get(key).copied()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the inventory has no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate entries in canonical order. Read-only; used for both
    /// display and export.
    pub fn snapshot(&self) -> impl Iterator<Item = (&CardKey, Count)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    fn key(number: &str, name: &str, variant: Variant) -> CardKey {
        CardKey::new(number, name, variant)
    }

    #[test]
    fn add_creates_at_one() {
        let mut inventory = Inventory::new();
        let count = inventory.add(key("7", "Pikachu", Variant::Holo));
        assert_eq!(count, 1);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn add_increments_existing() {
        let mut inventory = Inventory::new();
        inventory.add(key("7", "Pikachu", Variant::Holo));
        let count = inventory.add(key("7", "Pikachu", Variant::Holo));
        assert_eq!(count, 2);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn variants_are_distinct_entries() {
        let mut inventory = Inventory::new();
        inventory.add(key("7", "Pikachu", Variant::Holo));
        inventory.add(key("7", "Pikachu", Variant::Reverse));
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn remove_decrements() {
        let mut inventory = Inventory::new();
        let k = key("7", "Pikachu", Variant::Holo);
        inventory.add(k.clone());
        inventory.add(k.clone());
        inventory.remove(&k);
        assert_eq!(inventory.get(&k), Some(1));
    }

    #[test]
    fn remove_deletes_at_zero() {
        let mut inventory = Inventory::new();
        let k = key("7", "Pikachu", Variant::Holo);
        inventory.add(k.clone());
        inventory.remove(&k);
        assert_eq!(inventory.get(&k), None);
        assert!(inventory.is_empty());
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut inventory = Inventory::new();
        let k = key("7", "Pikachu", Variant::Holo);
        inventory.remove(&k);
        assert!(inventory.is_empty());
        assert_eq!(inventory.get(&k), None); // no phantom zero-count entry
    }

    #[test]
    fn merge_creates_and_adds() {
        let mut inventory = Inventory::new();
        let k = key("7", "Pikachu", Variant::Holo);
        inventory.merge(k.clone(), 3);
        assert_eq!(inventory.get(&k), Some(3));
        inventory.merge(k.clone(), 2);
        assert_eq!(inventory.get(&k), Some(5));
    }

    #[test]
    fn merge_clamps_to_delete() {
        let mut inventory = Inventory::new();
        let k = key("7", "Pikachu", Variant::Holo);
        inventory.merge(k.clone(), 2);
        inventory.merge(k.clone(), -5);
        assert_eq!(inventory.get(&k), None);
    }

    #[test]
    fn merge_negative_on_absent_creates_nothing() {
        let mut inventory = Inventory::new();
        let k = key("7", "Pikachu", Variant::Holo);
        inventory.merge(k.clone(), -3);
        assert!(inventory.is_empty());
    }

    #[test]
    fn snapshot_is_sorted_by_canonical_order() {
        let mut inventory = Inventory::new();
        inventory.add(key("42", "Xerneas", Variant::Standard));
        inventory.add(key("7", "Yveltal", Variant::Holo));

        let labels: Vec<String> = inventory
            .snapshot()
            .map(|(key, _)| key.canonical())
            .collect();
        assert_eq!(
            labels,
            vec!["007 - Yveltal (Holo)", "042 - Xerneas (Standard)"]
        );
    }

    #[test]
    fn snapshot_does_not_mutate() {
        let mut inventory = Inventory::new();
        inventory.add(key("7", "Pikachu", Variant::Holo));
        let before = inventory.clone();
        let _ = inventory.snapshot().count();
        assert_eq!(inventory, before);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_variant() -> impl Strategy<Value = Variant> {
            prop_oneof![
                Just(Variant::Holo),
                Just(Variant::Reverse),
                Just(Variant::Standard),
            ]
        }

        proptest! {
            #[test]
            fn prop_add_then_remove_restores(
                number in 1u32..1000,
                name in "[A-Za-z]{1,12}",
                variant in arb_variant(),
                seed in 0u32..5,
            ) {
                let mut inventory = Inventory::new();
                let k = CardKey::new(&number.to_string(), name, variant);
                for _ in 0..seed {
                    inventory.add(k.clone());
                }
                let before = inventory.clone();

                inventory.add(k.clone());
                inventory.remove(&k);
                prop_assert_eq!(inventory, before);
            }

            #[test]
            fn prop_counts_at_rest_are_positive(
                deltas in proptest::collection::vec(-5i64..5, 0..20),
            ) {
                let mut inventory = Inventory::new();
                let k = CardKey::new("7", "Pikachu", Variant::Holo);
                for delta in deltas {
                    inventory.merge(k.clone(), delta);
                }
                if let Some(count) = inventory.get(&k) {
                    prop_assert!(count >= 1);
                }
            }
        }
    }
}
