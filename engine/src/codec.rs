//! CSV codec for the inventory.
//!
//! Two schemas are understood on decode; only the current one is written:
//!
//! - current, 4 columns: `Number,Card,Variant,Count`
//! - legacy, 2 columns: `Card,Count`, where the card column carries the
//!   packed canonical key (`"007 - Pikachu (Holo)"`)
//!
//! Decoding is partial-failure tolerant: a row that fails shape or type
//! validation is skipped and reported in the [`ImportReport`], never
//! fatal. A file that cannot be opened merges nothing.

use crate::{error::Result, CardKey, Error, Inventory};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Header of the current 4-column schema.
pub const CURRENT_HEADER: [&str; 4] = ["Number", "Card", "Variant", "Count"];

/// Header of the legacy 2-column schema.
pub const LEGACY_HEADER: [&str; 2] = ["Card", "Count"];

/// Which schema a file's header announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schema {
    Legacy,
    Current,
}

impl Schema {
    fn width(self) -> usize {
        match self {
            Schema::Legacy => LEGACY_HEADER.len(),
            Schema::Current => CURRENT_HEADER.len(),
        }
    }
}

/// A row the decoder refused, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// 1-based data-row position, header excluded
    pub row: usize,
    /// Raw row content as read
    pub content: String,
    /// Why the row was refused
    pub reason: String,
}

/// Outcome of a decode: how many rows merged, and which were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Rows merged into the inventory
    pub imported: usize,
    /// Rows refused, in file order
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    fn skip(&mut self, row: usize, content: String, reason: String) {
        tracing::warn!(row, %content, %reason, "skipping import row");
        self.skipped.push(SkippedRow {
            row,
            content,
            reason,
        });
    }
}

/// Write the inventory in the current schema, sorted, header first.
pub fn encode<W: Write>(inventory: &Inventory, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CURRENT_HEADER)?;
    for (key, count) in inventory.snapshot() {
        wtr.write_record([
            key.number.as_str(),
            key.name.as_str(),
            key.variant.as_str(),
            count.to_string().as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Merge a CSV file's rows into the inventory.
///
/// The header decides the schema: 2 columns is legacy, 4 is current,
/// anything else is [`Error::UnrecognizedHeader`] and nothing merges.
pub fn decode<R: Read>(inventory: &mut Inventory, reader: R) -> Result<ImportReport> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let schema = match rdr.headers()?.len() {
        2 => Schema::Legacy,
        4 => Schema::Current,
        n => return Err(Error::UnrecognizedHeader(n)),
    };

    let mut report = ImportReport::default();
    for (idx, record) in rdr.records().enumerate() {
        let row = idx + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                report.skip(row, String::new(), format!("unreadable row: {}", e));
                continue;
            }
        };

        match decode_row(schema, &record) {
            Ok((key, delta)) => {
                inventory.merge(key, delta);
                report.imported += 1;
            }
            Err(reason) => {
                let content = record.iter().collect::<Vec<_>>().join(",");
                report.skip(row, content, reason);
            }
        }
    }

    Ok(report)
}

fn decode_row(schema: Schema, record: &csv::StringRecord) -> std::result::Result<(CardKey, i64), String> {
    if record.len() != schema.width() {
        return Err(format!(
            "expected {} columns, got {}",
            schema.width(),
            record.len()
        ));
    }

    match schema {
        Schema::Legacy => {
            let packed = &record[0];
            let count = parse_count(packed, &record[1])?;
            let key = CardKey::parse(packed).map_err(|e| e.to_string())?;
            Ok((key, count))
        }
        Schema::Current => {
            let number = record[0].trim();
            let name = &record[1];
            if number.is_empty() || name.is_empty() {
                return Err("empty number or card name".to_string());
            }
            let variant = record[2].parse().map_err(|e: Error| e.to_string())?;
            let count = parse_count(name, &record[3])?;
            Ok((CardKey::new(number, name, variant), count))
        }
    }
}

fn parse_count(card: &str, raw: &str) -> std::result::Result<i64, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("invalid count for card '{}': {}", card, raw))
}

/// Encode the inventory to a file path, replacing any existing file.
pub fn encode_to_path(inventory: &Inventory, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    encode(inventory, file)
}

/// Decode a CSV file into the inventory.
///
/// If the file cannot be opened, the error surfaces before anything is
/// merged.
pub fn decode_from_path(inventory: &mut Inventory, path: impl AsRef<Path>) -> Result<ImportReport> {
    let file = File::open(path)?;
    decode(inventory, file)
}
