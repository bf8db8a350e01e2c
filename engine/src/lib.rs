//! # Binder Engine
//!
//! Core logic for Binder, a personal duplicate tracker for trading-card
//! collections.
//!
//! This crate owns everything with invariants: the tally of duplicates,
//! the canonical card-key format, and the CSV round-trip. The network
//! lookup and the interactive front-end live in the outer `binder-tracker`
//! crate and reach the core through the seams defined here.
//!
//! ## Design Principles
//!
//! - **No network**: the engine only sees the [`CardLookup`] trait
//! - **One key format**: `"{number} - {name} ({variant})"` is formatted
//!   and parsed in exactly one place ([`CardKey`])
//! - **Counts never rest at zero**: an entry exists iff its count is >= 1
//! - **Imports never abort**: bad rows are skipped and reported
//!
//! ## Core Concepts
//!
//! ### Card keys
//!
//! A tracked line is identified by collector number (zero-padded to at
//! least three digits), resolved card name, and print [`Variant`].
//!
//! ### Inventory
//!
//! The [`Inventory`] maps keys to positive counts. [`Inventory::add`] and
//! [`Inventory::remove`] move counts by one; [`Inventory::merge`] applies
//! signed import deltas; [`Inventory::snapshot`] iterates in display
//! order.
//!
//! ### CSV round-trip
//!
//! The [`codec`] module writes the current `Number,Card,Variant,Count`
//! schema and reads both it and the legacy packed `Card,Count` schema,
//! reporting skipped rows in an [`ImportReport`].
//!
//! ### Session
//!
//! A [`Session`] owns the inventory plus the set catalog and exposes the
//! operations a front-end binds to: `add_entry`, `remove_entry`,
//! `export_to`, `import_from`.
//!
//! ## Quick Start
//!
//! ```rust
//! use binder_engine::{CardKey, Inventory, Variant};
//!
//! let mut inventory = Inventory::new();
//! let key = CardKey::new("7", "Pikachu", Variant::Holo);
//! assert_eq!(key.canonical(), "007 - Pikachu (Holo)");
//!
//! inventory.add(key.clone());
//! inventory.add(key.clone());
//! assert_eq!(inventory.get(&key), Some(2));
//!
//! inventory.remove(&key);
//! assert_eq!(inventory.get(&key), Some(1));
//! ```

pub mod card;
pub mod catalog;
pub mod codec;
pub mod error;
pub mod inventory;
pub mod lookup;
pub mod session;

// Re-export main types at crate root
pub use card::{pad_number, CardKey, Variant};
pub use catalog::SetCatalog;
pub use codec::{ImportReport, SkippedRow};
pub use error::Error;
pub use inventory::Inventory;
pub use lookup::{card_id, CardLookup, SetInfo};
pub use session::Session;

/// Type aliases for clarity
pub type CardName = String;
pub type SetCode = String;
pub type SetName = String;
pub type Count = u32;
