//! Label/value pairs for document export layers.

use crate::float_types::Real;
use crate::gear::GearParameters;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Millimeter,
    Degree,
    Count,
}

impl Unit {
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Millimeter => " mm",
            Unit::Degree => "°",
            Unit::Count => "",
        }
    }
}

/// One line of a parameter report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRow {
    pub label: &'static str,
    pub value: Real,
    pub unit: Unit,
}

impl ParameterRow {
    const fn new(label: &'static str, value: Real, unit: Unit) -> Self {
        Self { label, value, unit }
    }

    /// `"Label: value unit"` with the value rounded to `decimals` places.
    pub fn format(&self, decimals: usize) -> String {
        match self.unit {
            Unit::Count => format!("{}: {}", self.label, self.value),
            unit => format!("{}: {:.*}{}", self.label, decimals, self.value, unit.suffix()),
        }
    }
}

impl GearParameters {
    /// The inputs followed by every derived metric.
    pub fn report_rows(&self) -> Vec<ParameterRow> {
        use Unit::*;

        vec![
            ParameterRow::new("Number of Teeth", self.teeth as Real, Count),
            ParameterRow::new("Pitch Diameter", self.pitch_diameter, Millimeter),
            ParameterRow::new("Pressure Angle", self.pressure_angle, Degree),
            ParameterRow::new("Module", self.module, Millimeter),
            ParameterRow::new("Base Diameter", self.base_diameter, Millimeter),
            ParameterRow::new("Addendum", self.addendum, Millimeter),
            ParameterRow::new("Dedendum", self.dedendum, Millimeter),
            ParameterRow::new("Pitch Circle Radius", self.pitch_circle_radius, Millimeter),
            ParameterRow::new("Circular Pitch", self.circular_pitch, Millimeter),
            ParameterRow::new("Tooth Thickness", self.tooth_thickness, Millimeter),
            ParameterRow::new("Clearance", self.clearance, Millimeter),
        ]
    }

    /// Plain-text report, one row per line, values to two decimals.
    ///
    /// ```
    /// # use spurgear::gear::{GearInput, compute_gear_parameters};
    /// let params = compute_gear_parameters(&GearInput::new(24, 48.0, 20.0)).unwrap();
    /// let text = params.to_report_text();
    /// assert!(text.contains("Module: 2.00 mm"));
    /// assert!(text.contains("Base Diameter: 45.11 mm"));
    /// ```
    pub fn to_report_text(&self) -> String {
        let mut out = String::new();
        for row in self.report_rows() {
            let _ = writeln!(out, "{}", row.format(2));
        }
        out
    }
}
