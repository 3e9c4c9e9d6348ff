//! Test utilities for record builder testing

use csv::StringRecord;

use crate::config::ColumnLayout;

mod builder_tests;
mod column_mapping_tests;

/// Compact layout used by most tests: one column per consumed field
pub fn compact_layout() -> ColumnLayout {
    ColumnLayout {
        part_number: 0,
        capacitance: 1,
        voltage: 2,
        size: 3,
        height: 4,
    }
}

/// Row in the compact layout
pub fn compact_row(
    part_number: &str,
    capacitance: &str,
    voltage: &str,
    size: &str,
    height: &str,
) -> StringRecord {
    StringRecord::from(vec![part_number, capacitance, voltage, size, height])
}

/// Row in the default 25-column export layout
pub fn export_row(
    part_number: &str,
    capacitance: &str,
    voltage: &str,
    size: &str,
    height: &str,
) -> StringRecord {
    let layout = ColumnLayout::default();
    let mut fields = vec![String::new(); layout.min_fields()];
    fields[layout.part_number] = part_number.to_string();
    fields[layout.capacitance] = capacitance.to_string();
    fields[layout.voltage] = voltage.to_string();
    fields[layout.size] = size.to_string();
    fields[layout.height] = height.to_string();
    StringRecord::from(fields)
}

/// Relative floating-point comparison
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs() * 1e-9;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
