//! Standard spur gear proportions derived from tooth count, pitch diameter and
//! pressure angle.

use crate::errors::{Field, ValidationError};
use crate::float_types::{PI, Real, to_radians, tolerance};
use crate::gear::GearInput;

/// Teeth counts below this are accepted but cannot form a working gear.
const MIN_PRACTICAL_TEETH: i64 = 4;

/// Derived gear metrics, all lengths in millimeters.
///
/// Built only by [`compute_gear_parameters`], so the relationships between the
/// fields always hold:
///
/// | field                 | value                          |
/// |-----------------------|--------------------------------|
/// | `module`              | pitch diameter / teeth         |
/// | `base_diameter`       | pitch diameter · cos(α)        |
/// | `addendum`            | module                         |
/// | `dedendum`            | 1.25 · module                  |
/// | `pitch_circle_radius` | pitch diameter / 2             |
/// | `circular_pitch`      | π · module                     |
/// | `tooth_thickness`     | circular pitch / 2             |
/// | `clearance`           | dedendum − addendum            |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearParameters {
    pub teeth: u32,
    pub pitch_diameter: Real,
    pub pressure_angle: Real,

    pub module: Real,
    pub base_diameter: Real,
    pub addendum: Real,
    pub dedendum: Real,
    pub pitch_circle_radius: Real,
    pub circular_pitch: Real,
    pub tooth_thickness: Real,
    pub clearance: Real,
}

impl GearParameters {
    #[inline]
    pub fn base_circle_radius(&self) -> Real {
        self.base_diameter / 2.0
    }

    /// Tip circle radius, pitch radius plus addendum.
    #[inline]
    pub fn addendum_circle_radius(&self) -> Real {
        self.pitch_circle_radius + self.addendum
    }

    /// Root circle radius, pitch radius minus dedendum (never negative).
    #[inline]
    pub fn dedendum_circle_radius(&self) -> Real {
        (self.pitch_circle_radius - self.dedendum).max(0.0)
    }

    /// `true` when the base diameter is within [`tolerance`] of zero or below,
    /// i.e. the pressure angle is 90° or more.
    #[inline]
    pub fn base_circle_vanishes(&self) -> bool {
        self.base_diameter <= tolerance()
    }
}

/// Validates `input` and derives the standard gear metrics.
///
/// Fields are checked in the order teeth count, pitch diameter, pressure angle;
/// the first failure is returned and nothing is computed:
/// - absent, zero or NaN → [`ValidationError::MissingField`]
/// - negative → [`ValidationError::NonPositiveValue`]
/// - infinite pitch diameter or pressure angle → [`ValidationError::NonFinite`]
/// - more teeth than fit a `u32` → [`ValidationError::OutOfRange`]
///
/// Degenerate but positive input (one tooth, a pressure angle of 90° or more)
/// is computed as given and only logged.
///
/// ```
/// # use spurgear::gear::{GearInput, compute_gear_parameters};
/// let params = compute_gear_parameters(&GearInput::new(24, 48.0, 20.0)).unwrap();
/// assert_eq!(params.module, 2.0);
/// assert_eq!(params.dedendum, 2.5);
/// ```
pub fn compute_gear_parameters(input: &GearInput) -> Result<GearParameters, ValidationError> {
    let teeth = validate_count(Field::TeethCount, input.teeth_count)?;
    let pitch_diameter = validate_real(Field::PitchDiameter, input.pitch_diameter)?;
    let pressure_angle = validate_real(Field::PressureAngle, input.pressure_angle)?;

    if i64::from(teeth) < MIN_PRACTICAL_TEETH {
        log::warn!("{teeth} teeth is below the practical minimum of {MIN_PRACTICAL_TEETH}");
    }
    let module = pitch_diameter / teeth as Real;
    let base_diameter = pitch_diameter * to_radians(pressure_angle).cos();
    let addendum = module;
    let dedendum = 1.25 * module;
    let circular_pitch = PI * module;

    let params = GearParameters {
        teeth,
        pitch_diameter,
        pressure_angle,
        module,
        base_diameter,
        addendum,
        dedendum,
        pitch_circle_radius: pitch_diameter / 2.0,
        circular_pitch,
        tooth_thickness: circular_pitch / 2.0,
        clearance: dedendum - addendum,
    };
    if params.base_circle_vanishes() {
        log::warn!("pressure angle {pressure_angle}° gives a non-positive base diameter");
    }
    log::debug!(
        "computed gear: z={teeth} d={pitch_diameter} α={pressure_angle} -> m={module} db={base_diameter}"
    );
    Ok(params)
}

fn validate_count(field: Field, value: Option<i64>) -> Result<u32, ValidationError> {
    match value {
        None | Some(0) => Err(ValidationError::MissingField(field)),
        Some(count) if count < 0 => Err(ValidationError::NonPositiveValue(field)),
        Some(count) => u32::try_from(count).map_err(|_| ValidationError::OutOfRange(field)),
    }
}

fn validate_real(field: Field, value: Option<Real>) -> Result<Real, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField(field)),
        Some(v) if v.is_nan() || v == 0.0 => Err(ValidationError::MissingField(field)),
        Some(v) if v < 0.0 => Err(ValidationError::NonPositiveValue(field)),
        Some(v) if v.is_infinite() => Err(ValidationError::NonFinite(field)),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_counts_as_missing() {
        let err = compute_gear_parameters(&GearInput::new(24, 0.0, 20.0)).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(Field::PitchDiameter));
    }

    #[test]
    fn nan_counts_as_missing() {
        let err = compute_gear_parameters(&GearInput::new(24, 48.0, Real::NAN)).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(Field::PressureAngle));
    }

    #[test]
    fn negative_infinity_is_non_positive() {
        let err =
            compute_gear_parameters(&GearInput::new(24, Real::NEG_INFINITY, 20.0)).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveValue(Field::PitchDiameter));
    }

    #[test]
    fn infinity_is_rejected() {
        let err = compute_gear_parameters(&GearInput::new(24, Real::INFINITY, 20.0)).unwrap_err();
        assert_eq!(err, ValidationError::NonFinite(Field::PitchDiameter));
    }

    #[test]
    fn oversized_tooth_count_is_out_of_range() {
        let err = compute_gear_parameters(&GearInput::new(i64::MAX, 48.0, 20.0)).unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange(Field::TeethCount));
        assert_eq!(err.to_string(), "(OutOfRange) Number of teeth is too large");

        let err = compute_gear_parameters(&GearInput::new(i64::from(u32::MAX) + 1, 48.0, 20.0));
        assert_eq!(err, Err(ValidationError::OutOfRange(Field::TeethCount)));
    }

    #[test]
    fn base_circle_vanishes_at_right_angles() {
        let right = compute_gear_parameters(&GearInput::new(24, 48.0, 90.0)).unwrap();
        // cos(90°) is not exactly zero in floating point
        assert!(right.base_circle_vanishes());

        let obtuse = compute_gear_parameters(&GearInput::new(24, 48.0, 120.0)).unwrap();
        assert!(obtuse.base_circle_vanishes());

        let standard = compute_gear_parameters(&GearInput::new(24, 48.0, 20.0)).unwrap();
        assert!(!standard.base_circle_vanishes());
    }

    #[test]
    fn first_failing_field_wins() {
        let input = GearInput { teeth_count: Some(-1), pitch_diameter: None, pressure_angle: None };
        assert_eq!(
            compute_gear_parameters(&input),
            Err(ValidationError::NonPositiveValue(Field::TeethCount))
        );
    }

    #[test]
    fn single_tooth_is_accepted() {
        let params = compute_gear_parameters(&GearInput::new(1, 10.0, 20.0)).unwrap();
        assert_relative_eq!(params.module, 10.0);
        // root circle would be negative, so it is clamped
        assert_eq!(params.dedendum_circle_radius(), 0.0);
    }

    #[test]
    fn derived_radii() {
        let params = compute_gear_parameters(&GearInput::new(24, 48.0, 20.0)).unwrap();
        assert_relative_eq!(params.addendum_circle_radius(), 26.0);
        assert_relative_eq!(params.dedendum_circle_radius(), 21.5);
        assert_relative_eq!(params.base_circle_radius(), params.base_diameter / 2.0);
    }
}
