//! The lookup seam between the engine and the external card database.
//!
//! The engine never talks to the network itself. Implementations of
//! [`CardLookup`] live in the outer layer; the engine only relies on the
//! contract that a definitive miss and a service fault are distinguishable
//! and that neither mutates any state.

use crate::{CardName, Error, SetCode, SetName};
use serde::{Deserialize, Serialize};

/// A set known to the card database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInfo {
    /// Internal set code, e.g. `sv9`
    pub code: SetCode,
    /// Human-readable set name, e.g. `Journey Together`
    pub name: SetName,
}

/// Format the upstream card id for a lookup attempt.
///
/// The number goes upstream as the user typed it; zero-padding is a
/// display concern, not a lookup one.
pub fn card_id(set_code: &str, number: &str) -> String {
    format!("{}-{}", set_code, number)
}

/// Resolves set + collector number to a card's display name.
pub trait CardLookup {
    /// Resolve the display name of the card `"{set_code}-{number}"`.
    ///
    /// Returns [`Error::NotFound`] (naming the attempted id) when the
    /// card definitively does not exist, and [`Error::Service`] with a
    /// best-effort diagnostic for transport or service faults.
    fn resolve(&self, set_code: &str, number: &str) -> Result<CardName, Error>;

    /// List every set the database knows about, used once at session
    /// start to populate the set catalog.
    fn list_sets(&self) -> Result<Vec<SetInfo>, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_uses_raw_number() {
        assert_eq!(card_id("sv9", "7"), "sv9-7");
        assert_eq!(card_id("sv9", "007"), "sv9-007");
    }
}
