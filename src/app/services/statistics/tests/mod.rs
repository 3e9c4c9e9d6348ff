//! Test utilities for statistics testing

use crate::app::models::{PackageGeometry, PhysicalRecord};


/// 10 mm x 10 mm x 10 mm package (1e-6 m³)
pub fn cube_package() -> PackageGeometry {
    PackageGeometry::Prism {
        length: 0.01,
        width: 0.01,
        height: 0.01,
    }
}

/// Record with the given capacitance at 1 V in a 1e-6 m³ package
pub fn record_with_capacitance(part_number: &str, capacitance: f64) -> PhysicalRecord {
    PhysicalRecord::new(part_number.to_string(), capacitance, 1.0, cube_package()).unwrap()
}

/// Records whose capacitances are the given values, in order
pub fn records_with_capacitances(values: &[f64]) -> Vec<PhysicalRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, &c)| record_with_capacitance(&format!("P{i}"), c))
        .collect()
}
