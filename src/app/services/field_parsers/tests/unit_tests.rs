//! Tests for capacitance unit normalization

use super::super::numeric_token::NumericToken;
use super::super::units::CapacitanceUnit;
use crate::Error;

fn normalize(raw: &str) -> crate::Result<f64> {
    let token = NumericToken::extract(raw, "capacitance")?;
    let unit = CapacitanceUnit::from_suffix(token.suffix)?;
    Ok(unit.to_farads(token.value("capacitance")?))
}

#[test]
fn test_millifarads_divide_by_thousand() {
    for n in [1.0, 3.3, 100.0, 470.0, 1500.0] {
        let farads = normalize(&format!("{n} mF")).unwrap();
        assert!((farads - n / 1000.0).abs() < 1e-15, "{n} mF -> {farads}");

        let farads = normalize(&format!("{n}mF")).unwrap();
        assert!((farads - n / 1000.0).abs() < 1e-15, "{n}mF -> {farads}");
    }
}

#[test]
fn test_farads_unchanged() {
    for n in [0.5, 2.5, 10.0, 3000.0] {
        assert_eq!(normalize(&format!("{n}F")).unwrap(), n);
        assert_eq!(normalize(&format!("{n} F")).unwrap(), n);
    }
}

#[test]
fn test_prefix_is_case_sensitive() {
    assert_eq!(
        CapacitanceUnit::from_suffix("mF").unwrap(),
        CapacitanceUnit::Millifarad
    );
    assert!(matches!(
        CapacitanceUnit::from_suffix("MF"),
        Err(Error::UnrecognizedUnit { .. })
    ));
    assert!(matches!(
        CapacitanceUnit::from_suffix("f"),
        Err(Error::UnrecognizedUnit { .. })
    ));
}

#[test]
fn test_unknown_or_empty_suffix() {
    for suffix in ["", "   ", "µF", "uF", "kF"] {
        let err = CapacitanceUnit::from_suffix(suffix).unwrap_err();
        assert!(
            matches!(err, Error::UnrecognizedUnit { .. }),
            "suffix {suffix:?} gave {err}"
        );
    }
}

#[test]
fn test_to_farads() {
    assert_eq!(CapacitanceUnit::Millifarad.to_farads(100.0), 0.1);
    assert_eq!(CapacitanceUnit::Millifarad.to_farads(2500.0), 2.5);
    assert_eq!(CapacitanceUnit::Farad.to_farads(2.5), 2.5);
}
