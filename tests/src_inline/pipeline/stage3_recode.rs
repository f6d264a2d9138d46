use super::*;
use crate::fixtures::{number_column, text_column};

fn reversal_table() -> ObservationTable {
    ObservationTable::new(vec![
        text_column("item", &["S3", "S4", "D3"]),
        text_column("scale_name", &["Struktur", "Struktur", "Diagnose"]),
        text_column("scale_short", &["STR", "STR", "DIA"]),
        number_column("self", &[Some(1.0), Some(1.0), Some(2.0)]),
        number_column("blk", &[Some(2.0), Some(0.0), Some(4.0)]),
        number_column("pk1", &[Some(3.0), None, Some(3.0)]),
        number_column("sus1", &[Some(4.0), Some(3.0), Some(6.0)]),
    ])
}

fn value(table: &ObservationTable, col: &str, row: usize) -> Cell {
    table.cell(row, table.column_index(col).unwrap()).clone()
}

#[test]
fn test_reversed_item_self_one_becomes_four() {
    let mut table = reversal_table();
    recode_inverted_items(
        &mut table,
        &RaterColumns::default(),
        &ReversalRule::default(),
        &LikertScale::default(),
    );
    assert_eq!(value(&table, "self", 1), Cell::Number(4.0));
    assert_eq!(value(&table, "self", 2), Cell::Number(3.0));
    assert_eq!(value(&table, "sus1", 1), Cell::Number(2.0));
}

#[test]
fn test_zero_and_blank_left_unchanged() {
    let mut table = reversal_table();
    let summary = recode_inverted_items(
        &mut table,
        &RaterColumns::default(),
        &ReversalRule::default(),
        &LikertScale::default(),
    );
    assert_eq!(value(&table, "blk", 1), Cell::Number(0.0));
    assert_eq!(value(&table, "pk1", 1), Cell::Empty);
    assert_eq!(summary.rows, 2);
    // S4: self, sus1. D3: self, blk, pk1, sus1.
    assert_eq!(summary.cells, 6);
}

#[test]
fn test_other_items_untouched() {
    let mut table = reversal_table();
    recode_inverted_items(
        &mut table,
        &RaterColumns::default(),
        &ReversalRule::default(),
        &LikertScale::default(),
    );
    assert_eq!(value(&table, "self", 0), Cell::Number(1.0));
    assert_eq!(value(&table, "sus1", 0), Cell::Number(4.0));
}

#[test]
fn test_out_of_range_value_passes_through_formula() {
    let mut table = reversal_table();
    recode_inverted_items(
        &mut table,
        &RaterColumns::default(),
        &ReversalRule::default(),
        &LikertScale::default(),
    );
    assert_eq!(value(&table, "sus1", 2), Cell::Number(-1.0));
}

#[test]
fn test_recoding_twice_restores_ratings() {
    let original = reversal_table();
    let mut table = original.clone();
    for _ in 0..2 {
        recode_inverted_items(
            &mut table,
            &RaterColumns::default(),
            &ReversalRule::default(),
            &LikertScale::default(),
        );
    }
    assert_eq!(table, original);
}

#[test]
fn test_configured_reversal_set() {
    let mut table = reversal_table();
    let rule = ReversalRule {
        items: vec!["S3".to_string()],
    };
    let summary = recode_inverted_items(
        &mut table,
        &RaterColumns::default(),
        &rule,
        &LikertScale::default(),
    );
    assert_eq!(summary.rows, 1);
    assert_eq!(value(&table, "self", 0), Cell::Number(4.0));
    assert_eq!(value(&table, "self", 1), Cell::Number(1.0));
}
