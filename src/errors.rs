//! Validation errors

use std::fmt::Display;

/// The three required gear inputs, used to say which one failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TeethCount,
    PitchDiameter,
    PressureAngle,
}

impl Field {
    /// Human readable label, matching the form the values come from.
    pub const fn label(self) -> &'static str {
        match self {
            Field::TeethCount => "Number of teeth",
            Field::PitchDiameter => "Pitch diameter",
            Field::PressureAngle => "Pressure angle",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (MissingField) A required input is absent, empty or zero
    #[error("(MissingField) {0} is required")]
    MissingField(Field),
    /// (NonPositiveValue) A required input is ≤ 0
    #[error("(NonPositiveValue) {0} must be greater than zero")]
    NonPositiveValue(Field),
    /// (NonFinite) A required input is infinite
    #[error("(NonFinite) {0} must be a finite number")]
    NonFinite(Field),
    /// (OutOfRange) A whole number too large to be a tooth count
    #[error("(OutOfRange) {0} is too large")]
    OutOfRange(Field),
    /// (Malformed) A form value could not be read as a number
    #[error("(Malformed) {field} is not a number: {value:?}")]
    Malformed { field: Field, value: String },
    /// (InvalidToothCount) The profile generator was handed a tooth count ≤ 0
    #[error("(InvalidToothCount) tooth count must be positive, got {0}")]
    InvalidToothCount(i64),
}

impl ValidationError {
    /// The input this error refers to, if it refers to one.
    pub const fn field(&self) -> Option<Field> {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::NonPositiveValue(field)
            | ValidationError::NonFinite(field)
            | ValidationError::OutOfRange(field)
            | ValidationError::Malformed { field, .. } => Some(*field),
            ValidationError::InvalidToothCount(_) => None,
        }
    }
}
