//! Tests for physical record construction

use super::super::builder::{RecordBuilder, parse_capacitance, parse_geometry, parse_voltage};
use super::{assert_close, compact_layout, compact_row, export_row};
use crate::Error;
use crate::app::models::PackageGeometry;
use std::f64::consts::PI;

#[test]
fn test_build_cylinder_record() {
    let builder = RecordBuilder::new(compact_layout());
    let row = compact_row("SC-100", "100 mF", "2.7V", "(10)", "(20)");

    let record = builder.build(&row).unwrap();

    assert_eq!(record.part_number(), "SC-100");
    assert_close(record.capacitance(), 0.1);
    assert_close(record.voltage(), 2.7);
    assert_close(record.volume(), PI * 0.005 * 0.005 * 0.02);
    assert_close(record.energy(), 0.5 * 0.1 * 2.7 * 2.7);
    assert_close(record.energy_density(), record.energy() / record.volume());
}

#[test]
fn test_build_prism_record() {
    let builder = RecordBuilder::new(compact_layout());
    let row = compact_row("MOD-1", "2.5F", "5.5 V", "(10x5)", "(20)");

    let record = builder.build(&row).unwrap();

    assert_close(record.capacitance(), 2.5);
    assert_close(record.volume(), 1.0e-6);
    assert_close(record.energy(), 0.5 * 2.5 * 5.5 * 5.5);
}

#[test]
fn test_build_from_default_export_layout() {
    let builder = RecordBuilder::default();
    let row = export_row(
        "DGH105Q2R7",
        "1 F",
        "2.7V",
        "0.394\" Dia (10.00mm)",
        "0.846\" (21.50mm)",
    );

    let record = builder.build(&row).unwrap();
    assert_eq!(record.part_number(), "DGH105Q2R7");
    assert_close(record.volume(), PI * 0.005 * 0.005 * 0.0215);
}

#[test]
fn test_energy_matches_formula_for_many_inputs() {
    let builder = RecordBuilder::new(compact_layout());

    for (cap, cap_f) in [("1F", 1.0), ("470 mF", 0.47), ("3000F", 3000.0)] {
        for volts in [2.3, 2.7, 3.0, 5.5] {
            let voltage = format!("{volts}V");
            let row = compact_row("P", cap, &voltage, "(8x4)", "(2)");
            let record = builder.build(&row).unwrap();
            assert_close(record.energy(), 0.5 * cap_f * volts * volts);
        }
    }
}

#[test]
fn test_sentinel_in_any_field_rejects_row() {
    let builder = RecordBuilder::new(compact_layout());
    let rows = [
        compact_row("P", "-", "2.7V", "(10)", "(20)"),
        compact_row("P", "1F", " - ", "(10)", "(20)"),
        compact_row("P", "1F", "2.7V", "-", "(20)"),
        compact_row("P", "1F", "2.7V", "(10)", "-"),
    ];

    for row in rows {
        let err = builder.build(&row).unwrap_err();
        assert!(matches!(err, Error::MissingValue { .. }), "{row:?}: {err}");
    }
}

#[test]
fn test_unsupported_geometry() {
    let err = parse_geometry("(10x5x2)", "(20)").unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedGeometry { dimensions: 3, .. }
    ));
}

#[test]
fn test_missing_parenthesis_is_format_error() {
    let err = parse_geometry("10mm Dia", "(20)").unwrap_err();
    assert!(matches!(err, Error::NumericFormat { ref field, .. } if field == "size"));

    let err = parse_geometry("(10)", "20mm").unwrap_err();
    assert!(matches!(err, Error::NumericFormat { ref field, .. } if field == "height"));
}

#[test]
fn test_geometry_units_are_meters() {
    let geometry = parse_geometry("(12.5)", "(40)").unwrap();
    assert_eq!(
        geometry,
        PackageGeometry::Cylinder {
            diameter: 0.0125,
            height: 0.04,
        }
    );
}

#[test]
fn test_height_uses_first_dimension() {
    let geometry = parse_geometry("(10x5)", "(20x99)").unwrap();
    match geometry {
        PackageGeometry::Prism { height, .. } => assert_close(height, 0.02),
        other => panic!("expected prism, got {other:?}"),
    }
}

#[test]
fn test_zero_volume_is_invalid() {
    let builder = RecordBuilder::new(compact_layout());
    let row = compact_row("P", "1F", "2.7V", "(0)", "(20)");
    let err = builder.build(&row).unwrap_err();
    assert!(matches!(err, Error::InvalidVolume { .. }));
}

#[test]
fn test_zero_voltage_is_rejected() {
    let builder = RecordBuilder::new(compact_layout());
    let row = compact_row("P", "1F", "0V", "(10)", "(20)");
    let err = builder.build(&row).unwrap_err();
    assert!(matches!(err, Error::NonPositiveQuantity { .. }));
}

#[test]
fn test_quantities_checked_before_geometry() {
    let builder = RecordBuilder::new(compact_layout());

    let row = compact_row("P", "0F", "2.7V", "-", "(20)");
    let err = builder.build(&row).unwrap_err();
    assert!(matches!(err, Error::NonPositiveQuantity { ref field, .. } if field == "capacitance"));

    let row = compact_row("P", "1F", "0V", "(10)", "-");
    let err = builder.build(&row).unwrap_err();
    assert!(matches!(err, Error::NonPositiveQuantity { ref field, .. } if field == "voltage"));
}

#[test]
fn test_field_parsers() {
    assert_close(parse_capacitance("330mF").unwrap(), 0.33);
    assert!(matches!(
        parse_capacitance("330 µF"),
        Err(Error::UnrecognizedUnit { .. })
    ));
    assert!(matches!(
        parse_capacitance("F"),
        Err(Error::NumericFormat { .. })
    ));
    assert_close(parse_voltage("2.7V").unwrap(), 2.7);
    assert_close(parse_voltage("16").unwrap(), 16.0);
}

#[test]
fn test_short_row_is_rejected() {
    let builder = RecordBuilder::default();
    let row = compact_row("P", "1F", "2.7V", "(10)", "(20)");
    let err = builder.build(&row).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { .. }));
}
