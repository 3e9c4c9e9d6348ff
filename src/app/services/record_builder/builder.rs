//! Physical record builder
//!
//! Drives the field parsers over one row and derives the package volume,
//! stored energy and energy density.

use super::column_mapping::ComponentFields;
use crate::app::models::{PackageGeometry, PhysicalRecord, ensure_positive};
use crate::app::services::field_parsers::{
    CapacitanceUnit, NumericToken, parse_dimensions, parse_number,
};
use crate::config::ColumnLayout;
use crate::constants::MILLIMETERS_PER_METER;
use crate::{Error, Result};
use csv::StringRecord;

/// Builds [`PhysicalRecord`]s from rows laid out by a [`ColumnLayout`]
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    layout: ColumnLayout,
}

impl RecordBuilder {
    /// Create a builder for the given column layout
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    /// Build a record from a raw export row
    pub fn build(&self, row: &StringRecord) -> Result<PhysicalRecord> {
        let fields = ComponentFields::from_record(row, &self.layout)?;
        self.build_from_fields(&fields)
    }

    /// Build a record from already-mapped fields
    pub fn build_from_fields(&self, fields: &ComponentFields<'_>) -> Result<PhysicalRecord> {
        let capacitance = parse_capacitance(fields.capacitance)?;
        ensure_positive("capacitance", capacitance)?;
        let voltage = parse_voltage(fields.voltage)?;
        ensure_positive("voltage", voltage)?;
        let geometry = parse_geometry(fields.size, fields.height)?;

        PhysicalRecord::new(
            fields.part_number.to_string(),
            capacitance,
            voltage,
            geometry,
        )
    }
}

/// Parse a capacitance field into farads
pub fn parse_capacitance(raw: &str) -> Result<f64> {
    let token = NumericToken::extract(raw, "capacitance")?;
    let magnitude = token.value("capacitance")?;
    let unit = CapacitanceUnit::from_suffix(token.suffix)?;
    Ok(unit.to_farads(magnitude))
}

/// Parse a voltage field into volts; any suffix is ignored
pub fn parse_voltage(raw: &str) -> Result<f64> {
    NumericToken::extract(raw, "voltage")?.value("voltage")
}

/// Parse size and height fields into a package geometry in meters
///
/// One size dimension is a cylinder diameter, two are the length and width of
/// a rectangular module. The height is the first dimension of the height field.
pub fn parse_geometry(size: &str, height: &str) -> Result<PackageGeometry> {
    let size_dimensions = parse_dimensions(size, "size")?;
    let height_dimensions = parse_dimensions(height, "height")?;

    let height_mm = height_dimensions
        .first()
        .map(String::as_str)
        .unwrap_or_default();

    match size_dimensions.as_slice() {
        [diameter] => Ok(PackageGeometry::Cylinder {
            diameter: millimeters_to_meters(diameter, "size")?,
            height: millimeters_to_meters(height_mm, "height")?,
        }),
        [length, width] => Ok(PackageGeometry::Prism {
            length: millimeters_to_meters(length, "size")?,
            width: millimeters_to_meters(width, "size")?,
            height: millimeters_to_meters(height_mm, "height")?,
        }),
        other => Err(Error::unsupported_geometry(size.trim(), other.len())),
    }
}

fn millimeters_to_meters(token: &str, field: &str) -> Result<f64> {
    Ok(parse_number(token, field)? / MILLIMETERS_PER_METER)
}
