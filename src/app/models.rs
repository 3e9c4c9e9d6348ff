//! Data models for supercapacitor catalog analysis
//!
//! This module contains the normalized physical record built from one catalog
//! row, the package geometry it is derived from, and the set of metrics the
//! statistics engine can summarize.

use crate::{Error, Result};
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Package Geometry
// =============================================================================

/// Package shape with all dimensions in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum PackageGeometry {
    /// Radial can described by diameter and height
    Cylinder { diameter: f64, height: f64 },

    /// Rectangular module described by length, width and height
    Prism { length: f64, width: f64, height: f64 },
}

impl PackageGeometry {
    /// Enclosed volume in cubic meters
    pub fn volume(&self) -> f64 {
        match *self {
            PackageGeometry::Cylinder { diameter, height } => {
                let radius = diameter / 2.0;
                PI * radius * radius * height
            }
            PackageGeometry::Prism {
                length,
                width,
                height,
            } => length * width * height,
        }
    }
}

// =============================================================================
// Physical Record
// =============================================================================

/// A fully validated supercapacitor with SI quantities
///
/// Derived quantities (volume, energy, energy density) are computed once in
/// [`PhysicalRecord::new`] and cannot be changed afterwards. A record either
/// satisfies every invariant or is never constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysicalRecord {
    part_number: String,
    capacitance: f64,
    voltage: f64,
    volume: f64,
    energy: f64,
    energy_density: f64,
}

impl PhysicalRecord {
    /// Create a record from its independent quantities and derive the rest
    pub fn new(
        part_number: String,
        capacitance: f64,
        voltage: f64,
        geometry: PackageGeometry,
    ) -> Result<Self> {
        ensure_positive("capacitance", capacitance)?;
        ensure_positive("voltage", voltage)?;

        let volume = geometry.volume();
        if !volume.is_finite() || volume <= 0.0 {
            return Err(Error::invalid_volume(volume));
        }

        let energy = 0.5 * capacitance * voltage * voltage;
        let energy_density = energy / volume;
        if !energy_density.is_finite() {
            return Err(Error::invalid_volume(volume));
        }

        Ok(Self {
            part_number,
            capacitance,
            voltage,
            volume,
            energy,
            energy_density,
        })
    }

    /// Manufacturer part number, copied verbatim from the catalog
    pub fn part_number(&self) -> &str {
        &self.part_number
    }

    /// Capacitance in farads
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Rated voltage in volts
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Package volume in cubic meters
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Stored energy at rated voltage in joules
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Stored energy per package volume in joules per cubic meter
    pub fn energy_density(&self) -> f64 {
        self.energy_density
    }
}

/// Fail with `NonPositiveQuantity` unless `value` is finite and above zero
pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::non_positive_quantity(field, value))
    }
}

impl fmt::Display for PhysicalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "part number:    {}", self.part_number)?;
        writeln!(f, "capacitance:    {:.6} F", self.capacitance)?;
        writeln!(f, "voltage:        {:.6} V", self.voltage)?;
        writeln!(f, "volume:         {:.6e} m³", self.volume)?;
        writeln!(f, "energy:         {:.6} J", self.energy)?;
        write!(f, "energy density: {:.6} J / m³", self.energy_density)
    }
}

// =============================================================================
// Metrics
// =============================================================================

/// Scalar quantities that can be summarized or ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Capacitance,
    Voltage,
    Volume,
    Energy,
    EnergyDensity,
}

impl Metric {
    /// Every metric, in report order
    pub const ALL: [Metric; 5] = [
        Metric::Capacitance,
        Metric::Voltage,
        Metric::Volume,
        Metric::Energy,
        Metric::EnergyDensity,
    ];

    /// Select this metric's value from a record
    pub fn select(&self, record: &PhysicalRecord) -> f64 {
        match self {
            Metric::Capacitance => record.capacitance(),
            Metric::Voltage => record.voltage(),
            Metric::Volume => record.volume(),
            Metric::Energy => record.energy(),
            Metric::EnergyDensity => record.energy_density(),
        }
    }

    /// Human-readable name used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Capacitance => "Capacitance",
            Metric::Voltage => "Voltage",
            Metric::Volume => "Volume",
            Metric::Energy => "Energy",
            Metric::EnergyDensity => "Energy Density",
        }
    }

    /// SI unit symbol
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Capacitance => "F",
            Metric::Voltage => "V",
            Metric::Volume => "m³",
            Metric::Energy => "J",
            Metric::EnergyDensity => "J / m³",
        }
    }

    /// Format a value with this metric's report precision
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Metric::Voltage => format!("{:.1} {}", value, self.unit()),
            // Package volumes sit around 1e-6 m³
            Metric::Volume => format!("{:.4e} {}", value, self.unit()),
            _ => format!("{:.4} {}", value, self.unit()),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "capacitance" => Ok(Metric::Capacitance),
            "voltage" => Ok(Metric::Voltage),
            "volume" => Ok(Metric::Volume),
            "energy" => Ok(Metric::Energy),
            "energy_density" => Ok(Metric::EnergyDensity),
            _ => Err(Error::configuration(format!(
                "Unknown metric '{}' (expected capacitance, voltage, volume, energy or energy-density)",
                s
            ))),
        }
    }
}
