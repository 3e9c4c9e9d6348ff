//! Tests for catalog field parsers
//!
//! Sample field values below are taken from the shapes found in distributor
//! exports (imperial text followed by a metric group, unit letters with and
//! without spacing).

mod unit_tests;

/// Size fields as they appear in exports, paired with the expected dimensions
pub fn sample_size_fields() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("0.394\" Dia (10.00mm)", vec!["10.00"]),
        ("0.315\" Dia (8.00mm)", vec!["8.00"]),
        ("0.512\" L x 0.236\" W (13.00mm x 6.00mm)", vec!["13.00", "6.00"]),
        ("1.575\" L x 0.984\" W (40.00mm x 25.00mm)", vec!["40.00", "25.00"]),
    ]
}

/// Height fields as they appear in exports
pub fn sample_height_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("0.846\" (21.50mm)", "21.50"),
        ("0.079\" (2.00mm)", "2.00"),
        ("2.480\" (63.00mm)", "63.00"),
    ]
}
