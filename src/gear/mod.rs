//! The gear engine: input validation, derived parameters and tooth outlines.

pub mod input;
pub mod parameters;
pub mod profile;

pub use input::GearInput;
pub use parameters::{GearParameters, compute_gear_parameters};
pub use profile::{
    POINTS_PER_TOOTH, ToothProfile, ToothRadii, gear_outline, generate_tooth_path, tooth_profiles,
};
