//! Card identity types.
//!
//! A tracked line item is identified by (number, name, variant). The
//! canonical string form `"{number} - {name} ({variant})"` doubles as the
//! display label and as the packed key of the legacy CSV schema, so
//! formatting and parsing both live here and nowhere else.

use crate::{CardName, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum digit width collector numbers are padded to for display.
const NUMBER_WIDTH: usize = 3;

/// Print finish of a card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Variant {
    Holo,
    Reverse,
    Standard,
}

impl Variant {
    /// All variants, in the order the add form offers them.
    pub const ALL: [Variant; 3] = [Variant::Holo, Variant::Reverse, Variant::Standard];

    /// The variant's display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Holo => "Holo",
            Variant::Reverse => "Reverse",
            Variant::Standard => "Standard",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Holo" => Ok(Variant::Holo),
            "Reverse" => Ok(Variant::Reverse),
            "Standard" => Ok(Variant::Standard),
            other => Err(Error::UnknownVariant(other.to_string())),
        }
    }
}

/// Left-pad a collector number to the minimum display width.
///
/// Wider numbers pass through unchanged; there is no upper bound.
pub fn pad_number(raw: &str) -> String {
    format!("{:0>width$}", raw, width = NUMBER_WIDTH)
}

/// The identity of a tracked inventory line.
///
/// Equality and ordering are structural: number first, then name, then
/// variant - the same order the canonical string encodes.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct CardKey {
    /// Collector number, zero-padded to at least three digits
    pub number: String,
    /// Resolved display name of the card
    pub name: CardName,
    /// Print finish
    pub variant: Variant,
}

impl CardKey {
    /// Create a key from a raw (possibly unpadded) collector number.
    pub fn new(raw_number: &str, name: impl Into<CardName>, variant: Variant) -> Self {
        Self {
            number: pad_number(raw_number),
            name: name.into(),
            variant,
        }
    }

    /// Canonical textual form, `"{number} - {name} ({variant})"`.
    pub fn canonical(&self) -> String {
        format!("{} - {} ({})", self.number, self.name, self.variant)
    }

    /// Parse a canonical (packed) key back into its fields.
    ///
    /// Splits on the first `" - "` to separate the number, then on the
    /// last `" ("` to separate the name from the variant. A name that
    /// itself ends in a parenthesized segment only parses correctly when
    /// the final segment is the variant; a packed key whose trailing
    /// segment is not a known variant is rejected rather than merged
    /// under a mangled name.
    pub fn parse(packed: &str) -> Result<Self, Error> {
        let (number, rest) = packed
            .split_once(" - ")
            .ok_or_else(|| Error::MalformedKey(packed.to_string()))?;

        let open = rest
            .rfind(" (")
            .ok_or_else(|| Error::MalformedKey(packed.to_string()))?;
        let name = &rest[..open];
        let variant = rest[open + 2..]
            .strip_suffix(')')
            .ok_or_else(|| Error::MalformedKey(packed.to_string()))?;

        if number.is_empty() || name.is_empty() {
            return Err(Error::MalformedKey(packed.to_string()));
        }

        Ok(Self {
            number: pad_number(number),
            name: name.to_string(),
            variant: variant.parse()?,
        })
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.number, self.name, self.variant)
    }
}
