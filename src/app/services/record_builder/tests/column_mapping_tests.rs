//! Tests for mapping positional rows onto named fields

use super::super::column_mapping::ComponentFields;
use super::{compact_layout, export_row};
use crate::Error;
use crate::config::ColumnLayout;
use csv::StringRecord;

#[test]
fn test_default_layout_offsets() {
    let row = export_row("DGH105Q2R7", "1 F", "2.7V", "(10.00mm)", "(21.50mm)");
    let fields = ComponentFields::from_record(&row, &ColumnLayout::default()).unwrap();

    assert_eq!(fields.part_number, "DGH105Q2R7");
    assert_eq!(fields.capacitance, "1 F");
    assert_eq!(fields.voltage, "2.7V");
    assert_eq!(fields.size, "(10.00mm)");
    assert_eq!(fields.height, "(21.50mm)");
}

#[test]
fn test_short_row_reports_missing_column() {
    let row = StringRecord::from(vec!["a", "b", "c"]);
    let err = ComponentFields::from_record(&row, &ColumnLayout::default()).unwrap_err();

    match err {
        Error::MissingColumn {
            field,
            index,
            found,
        } => {
            assert_eq!(field, "capacitance");
            assert_eq!(index, 14);
            assert_eq!(found, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_fields_are_not_trimmed() {
    let row = StringRecord::from(vec!["  P1 ", " 1F", "2V ", "(1)", "(2)"]);
    let fields = ComponentFields::from_record(&row, &compact_layout()).unwrap();
    assert_eq!(fields.part_number, "  P1 ");
    assert_eq!(fields.capacitance, " 1F");
}
