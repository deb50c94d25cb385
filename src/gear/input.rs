//! Typed gear inputs and the form-field boundary that produces them.

use crate::errors::{Field, ValidationError};
use crate::float_types::Real;

/// The three values a gear is specified by.
///
/// Each value is optional so that an empty form field is representable; an
/// absent value is reported as [`ValidationError::MissingField`] by
/// [`compute_gear_parameters`](crate::gear::compute_gear_parameters) rather
/// than being replaced by a default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GearInput {
    /// Number of teeth. Signed so a negative entry reaches validation.
    pub teeth_count: Option<i64>,
    /// Pitch diameter in millimeters.
    pub pitch_diameter: Option<Real>,
    /// Pressure angle in degrees.
    pub pressure_angle: Option<Real>,
}

impl GearInput {
    /// Input with all three values supplied.
    pub const fn new(teeth_count: i64, pitch_diameter: Real, pressure_angle: Real) -> Self {
        Self {
            teeth_count: Some(teeth_count),
            pitch_diameter: Some(pitch_diameter),
            pressure_angle: Some(pressure_angle),
        }
    }

    /// Reads the raw strings of a three-field form.
    ///
    /// Blank (or whitespace-only) fields become `None`, anything else must parse
    /// as a number. The tooth count accepts a whole-valued real such as `"24.0"`.
    ///
    /// ```
    /// # use spurgear::gear::GearInput;
    /// let input = GearInput::from_fields("24", " 48 ", "20").unwrap();
    /// assert_eq!(input, GearInput::new(24, 48.0, 20.0));
    ///
    /// let blank = GearInput::from_fields("", "48", "20").unwrap();
    /// assert_eq!(blank.teeth_count, None);
    /// ```
    pub fn from_fields(
        teeth_count: &str,
        pitch_diameter: &str,
        pressure_angle: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            teeth_count: parse_count(Field::TeethCount, teeth_count)?,
            pitch_diameter: parse_real(Field::PitchDiameter, pitch_diameter)?,
            pressure_angle: parse_real(Field::PressureAngle, pressure_angle)?,
        })
    }
}

fn parse_real(field: Field, raw: &str) -> Result<Option<Real>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Real>()
        .map(Some)
        .map_err(|_| ValidationError::Malformed { field, value: raw.to_string() })
}

fn parse_count(field: Field, raw: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(count) = trimmed.parse::<i64>() {
        return Ok(Some(count));
    }
    // number inputs happily hand over "24.0"
    match trimmed.parse::<Real>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => {
            // i64::MAX rounds up to 2^63, so the upper bound is exclusive
            if value < i64::MIN as Real || value >= i64::MAX as Real {
                return Err(ValidationError::OutOfRange(field));
            }
            Ok(Some(value as i64))
        }
        _ => Err(ValidationError::Malformed { field, value: raw.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_absent() {
        let input = GearInput::from_fields("  ", "", "\t").unwrap();
        assert_eq!(input, GearInput::default());
    }

    #[test]
    fn whole_valued_real_counts_are_accepted() {
        let input = GearInput::from_fields("24.0", "48", "20").unwrap();
        assert_eq!(input.teeth_count, Some(24));
    }

    #[test]
    fn fractional_counts_are_malformed() {
        let err = GearInput::from_fields("24.5", "48", "20").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Malformed { field: Field::TeethCount, value: "24.5".into() }
        );
    }

    #[test]
    fn huge_whole_counts_are_out_of_range() {
        for raw in ["1e30", "-1e30", "9223372036854775808.0"] {
            let err = GearInput::from_fields(raw, "48", "20").unwrap_err();
            assert_eq!(err, ValidationError::OutOfRange(Field::TeethCount), "{raw}");
        }
    }

    #[test]
    fn negative_values_parse_and_are_left_to_validation() {
        let input = GearInput::from_fields("-5", "48", "-20").unwrap();
        assert_eq!(input.teeth_count, Some(-5));
        assert_eq!(input.pressure_angle, Some(-20.0));
    }

    #[test]
    fn garbage_names_the_field() {
        let err = GearInput::from_fields("24", "forty", "20").unwrap_err();
        assert_eq!(err.field(), Some(Field::PitchDiameter));
    }
}
