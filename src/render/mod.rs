//! Display scaling and drawing assembly.
//!
//! Physical [`GearParameters`] are never scaled in place. A [`RenderScale`]
//! turns them into [`ScaledCircles`], and a [`GearDrawing`] bundles those
//! circles with the tooth profiles for a rendering or export backend.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::gear::{GearParameters, ToothProfile, ToothRadii, profile};
use nalgebra::Point2;

mod geometry;

pub use geometry::DEFAULT_CIRCLE_SEGMENTS;

/// Multipliers from millimeters to drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderScale {
    /// Applied to the pitch, addendum and dedendum circle radii.
    pub pitch_factor: Real,
    /// Applied to the base *diameter*.
    pub base_factor: Real,
}

impl Default for RenderScale {
    fn default() -> Self {
        Self { pitch_factor: 5.0, base_factor: 2.5 }
    }
}

impl RenderScale {
    pub const fn new(pitch_factor: Real, base_factor: Real) -> Self {
        Self { pitch_factor, base_factor }
    }

    /// Same factor for every circle, so the drawing is true to scale.
    pub fn uniform(factor: Real) -> Self {
        Self { pitch_factor: factor, base_factor: factor / 2.0 }
    }

    /// The first calculator's factors: base diameter ×2, which draws the base
    /// circle smaller than its true proportion to the pitch circle.
    pub const fn legacy() -> Self {
        Self { pitch_factor: 5.0, base_factor: 2.0 }
    }

    pub fn scale(&self, params: &GearParameters) -> ScaledCircles {
        ScaledCircles {
            dedendum: params.dedendum_circle_radius() * self.pitch_factor,
            base: params.base_diameter * self.base_factor,
            pitch: params.pitch_circle_radius * self.pitch_factor,
            addendum: params.addendum_circle_radius() * self.pitch_factor,
        }
    }
}

/// The four reference circle radii in drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledCircles {
    pub dedendum: Real,
    pub base: Real,
    pub pitch: Real,
    pub addendum: Real,
}

impl ScaledCircles {
    /// Radii for [`generate_tooth_path`](crate::gear::generate_tooth_path):
    /// the root circle is the inner radius, the pitch circle the outer one.
    pub const fn tooth_radii(&self) -> ToothRadii {
        ToothRadii {
            outer: self.pitch,
            inner: self.dedendum,
            addendum: self.addendum,
            dedendum: self.dedendum,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleKind {
    Dedendum,
    Base,
    Pitch,
    Addendum,
}

impl CircleKind {
    pub const ALL: [CircleKind; 4] =
        [CircleKind::Dedendum, CircleKind::Base, CircleKind::Pitch, CircleKind::Addendum];

    pub const fn name(self) -> &'static str {
        match self {
            CircleKind::Dedendum => "dedendum",
            CircleKind::Base => "base",
            CircleKind::Pitch => "pitch",
            CircleKind::Addendum => "addendum",
        }
    }
}

/// A circle primitive for a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCircle {
    pub kind: CircleKind,
    pub center: Point2<Real>,
    pub radius: Real,
}

/// Everything needed to draw one gear: reference circles and tooth polylines.
#[derive(Debug, Clone, PartialEq)]
pub struct GearDrawing {
    pub center: Point2<Real>,
    pub scale: RenderScale,
    pub radii: ScaledCircles,
    circles: [ReferenceCircle; 4],
    teeth: Vec<ToothProfile>,
}

impl GearDrawing {
    /// Scales `params` and generates one profile per tooth around `center`.
    pub fn new(
        params: &GearParameters,
        scale: RenderScale,
        center: Point2<Real>,
    ) -> Result<Self, ValidationError> {
        let radii = scale.scale(params);
        let teeth = profile::tooth_profiles(center, i64::from(params.teeth), &radii.tooth_radii())?;
        let circles = CircleKind::ALL.map(|kind| ReferenceCircle {
            kind,
            center,
            radius: match kind {
                CircleKind::Dedendum => radii.dedendum,
                CircleKind::Base => radii.base,
                CircleKind::Pitch => radii.pitch,
                CircleKind::Addendum => radii.addendum,
            },
        });
        log::debug!(
            "drawing {} teeth at ({}, {}), pitch radius {}",
            teeth.len(),
            center.x,
            center.y,
            radii.pitch
        );

        Ok(Self { center, scale, radii, circles, teeth })
    }

    /// Centers the gear on a square canvas of side `canvas_size`.
    pub fn centered(
        params: &GearParameters,
        scale: RenderScale,
        canvas_size: Real,
    ) -> Result<Self, ValidationError> {
        let half = canvas_size / 2.0;
        Self::new(params, scale, Point2::new(half, half))
    }

    /// Reference circles in dedendum, base, pitch, addendum order.
    pub fn circles(&self) -> &[ReferenceCircle] {
        &self.circles
    }

    pub fn circle(&self, kind: CircleKind) -> ReferenceCircle {
        self.circles[kind as usize]
    }

    pub fn teeth(&self) -> &[ToothProfile] {
        &self.teeth
    }

    /// All tooth points in order, closed back onto the first point.
    pub fn outline(&self) -> Vec<Point2<Real>> {
        profile::close_outline(&self.teeth)
    }
}
