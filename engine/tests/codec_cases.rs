//! Codec tests covering both CSV schemas and malformed input.

use binder_engine::{codec, CardKey, Inventory, Variant};

fn decode(data: &str) -> (Inventory, codec::ImportReport) {
    let mut inventory = Inventory::new();
    let report = codec::decode(&mut inventory, data.as_bytes()).unwrap();
    (inventory, report)
}

// ============================================================================
// Current schema
// ============================================================================

#[test]
fn current_schema_decodes() {
    let (inventory, report) = decode(
        "Number,Card,Variant,Count\n\
         007,Pikachu,Holo,2\n\
         012,Charmander,Standard,1\n",
    );

    assert_eq!(report.imported, 2);
    assert!(report.skipped.is_empty());
    assert_eq!(
        inventory.get(&CardKey::new("7", "Pikachu", Variant::Holo)),
        Some(2)
    );
    assert_eq!(
        inventory.get(&CardKey::new("12", "Charmander", Variant::Standard)),
        Some(1)
    );
}

#[test]
fn current_schema_pads_hand_edited_numbers() {
    let (inventory, _) = decode("Number,Card,Variant,Count\n7,Pikachu,Holo,1\n");
    assert_eq!(
        inventory.get(&CardKey::new("7", "Pikachu", Variant::Holo)),
        Some(1)
    );
}

#[test]
fn crlf_input_is_accepted() {
    let (inventory, report) =
        decode("Number,Card,Variant,Count\r\n007,Pikachu,Holo,2\r\n");
    assert_eq!(report.imported, 1);
    assert_eq!(
        inventory.get(&CardKey::new("7", "Pikachu", Variant::Holo)),
        Some(2)
    );
}

#[test]
fn negative_count_clamps_entry_away() {
    let (inventory, report) = decode(
        "Number,Card,Variant,Count\n\
         007,Pikachu,Holo,3\n\
         007,Pikachu,Holo,-5\n",
    );

    // Both rows merge; the net count is <= 0, so the entry is deleted.
    assert_eq!(report.imported, 2);
    assert!(inventory.is_empty());
}

// ============================================================================
// Legacy schema
// ============================================================================

#[test]
fn legacy_schema_decodes_packed_keys() {
    let (inventory, report) = decode("Card,Count\n\"007 - Pikachu (Holo)\",3\n");

    assert_eq!(report.imported, 1);
    assert_eq!(
        inventory.get(&CardKey::new("7", "Pikachu", Variant::Holo)),
        Some(3)
    );
}

#[test]
fn legacy_and_current_merge_into_same_keys() {
    let mut inventory = Inventory::new();
    codec::decode(
        &mut inventory,
        "Card,Count\n\"007 - Pikachu (Holo)\",2\n".as_bytes(),
    )
    .unwrap();
    codec::decode(
        &mut inventory,
        "Number,Card,Variant,Count\n007,Pikachu,Holo,1\n".as_bytes(),
    )
    .unwrap();

    assert_eq!(inventory.len(), 1);
    assert_eq!(
        inventory.get(&CardKey::new("7", "Pikachu", Variant::Holo)),
        Some(3)
    );
}

#[test]
fn legacy_packed_key_with_unknown_variant_is_skipped() {
    let (inventory, report) = decode(
        "Card,Count\n\
         \"025 - Pikachu (Birthday)\",1\n\
         \"007 - Pikachu (Holo)\",1\n",
    );

    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].reason.contains("Birthday"));
    assert_eq!(inventory.len(), 1);
}

// ============================================================================
// Malformed rows
// ============================================================================

#[test]
fn short_row_is_skipped_with_column_counts() {
    let (inventory, report) = decode(
        "Number,Card,Variant,Count\n\
         007,Pikachu,Holo\n\
         012,Charmander,Standard,1\n",
    );

    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped.len(), 1);

    let skipped = &report.skipped[0];
    assert_eq!(skipped.row, 1);
    assert_eq!(skipped.content, "007,Pikachu,Holo");
    assert_eq!(skipped.reason, "expected 4 columns, got 3");
    assert_eq!(inventory.len(), 1);
}

#[test]
fn non_integer_count_is_skipped_without_aborting() {
    let (inventory, report) = decode(
        "Number,Card,Variant,Count\n\
         007,Pikachu,Holo,abc\n\
         012,Charmander,Standard,1\n",
    );

    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(
        report.skipped[0].reason,
        "invalid count for card 'Pikachu': abc"
    );
    assert_eq!(
        inventory.get(&CardKey::new("12", "Charmander", Variant::Standard)),
        Some(1)
    );
}

#[test]
fn unknown_variant_column_is_skipped() {
    let (inventory, report) = decode(
        "Number,Card,Variant,Count\n\
         007,Pikachu,Foil,1\n",
    );

    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].reason.contains("Foil"));
    assert!(inventory.is_empty());
}

#[test]
fn skipped_rows_keep_file_order() {
    let (_, report) = decode(
        "Number,Card,Variant,Count\n\
         007,Pikachu,Holo,abc\n\
         012,Charmander,Standard,1\n\
         015,Squirtle,Reverse\n",
    );

    assert_eq!(report.imported, 1);
    let rows: Vec<usize> = report.skipped.iter().map(|s| s.row).collect();
    assert_eq!(rows, vec![1, 3]);
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn encode_decode_round_trip_preserves_counts() {
    let mut inventory = Inventory::new();
    inventory.merge(CardKey::new("7", "Pikachu", Variant::Holo), 2);
    inventory.merge(CardKey::new("12", "Charmander", Variant::Standard), 1);
    inventory.merge(CardKey::new("12", "Ho-oh (Shining)", Variant::Reverse), 4);

    let mut out = Vec::new();
    codec::encode(&inventory, &mut out).unwrap();

    let mut fresh = Inventory::new();
    let report = codec::decode(&mut fresh, out.as_slice()).unwrap();

    assert_eq!(report.imported, 3);
    assert!(report.skipped.is_empty());
    assert_eq!(fresh, inventory);
}
