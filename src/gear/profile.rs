//! Simplified straight-segment tooth outlines.
//!
//! Each tooth is five points joined by straight lines, placed on the reference
//! circles at the tooth's start angle, its angular midpoint, and the start of
//! the next tooth. This is not an involute tooth form.

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};
use nalgebra::Point2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of points in every [`ToothProfile`].
pub const POINTS_PER_TOOTH: usize = 5;

/// Radii handed to [`generate_tooth_path`], usually already scaled for display
/// by [`RenderScale`](crate::render::RenderScale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothRadii {
    /// Pitch-level flank radius.
    pub outer: Real,
    /// Root radius the path starts, bends and ends on.
    pub inner: Real,
    /// Tip radius.
    pub addendum: Real,
    /// Root reference circle radius. Not used by the path itself.
    pub dedendum: Real,
}

/// One tooth: five points around `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToothProfile {
    pub index: usize,
    pub angle: Real,
    pub half_angle: Real,
    pub next_angle: Real,
    pub points: [Point2<Real>; POINTS_PER_TOOTH],
}

impl ToothProfile {
    /// Straight segments between consecutive points.
    pub fn segments(&self) -> impl Iterator<Item = (Point2<Real>, Point2<Real>)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

#[inline]
fn polar(center: &Point2<Real>, radius: Real, angle: Real) -> Point2<Real> {
    Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Points for tooth `index` of a gear with `total_teeth` teeth.
///
/// With `angle = index·τ/total_teeth`, `next_angle = (index+1)·τ/total_teeth`
/// and `half_angle` halfway between them, the points are, in order:
///
/// 1. `inner` at `angle`
/// 2. `inner` at `half_angle`
/// 3. `outer` at `half_angle`
/// 4. `addendum` at `angle`
/// 5. `inner` at `next_angle`
///
/// Point 2 is where a base-circle point would sit, but it uses `inner`, not the
/// base radius. Callers that draw the base circle will see the path bend on the
/// root circle instead.
///
/// Point 5 of tooth `i` lies on the same ray as point 1 of tooth `i + 1`;
/// joining the teeth into one outline is left to the caller
/// (see [`gear_outline`]).
///
/// # Errors
/// [`ValidationError::InvalidToothCount`] when `total_teeth <= 0`.
pub fn generate_tooth_path(
    center: Point2<Real>,
    index: usize,
    total_teeth: i64,
    radii: &ToothRadii,
) -> Result<ToothProfile, ValidationError> {
    if total_teeth <= 0 {
        return Err(ValidationError::InvalidToothCount(total_teeth));
    }

    let step = TAU / total_teeth as Real;
    let angle = index as Real * step;
    let next_angle = angle + step;
    let half_angle = angle + step / 2.0;

    Ok(ToothProfile {
        index,
        angle,
        half_angle,
        next_angle,
        points: [
            polar(&center, radii.inner, angle),
            polar(&center, radii.inner, half_angle),
            polar(&center, radii.outer, half_angle),
            polar(&center, radii.addendum, angle),
            polar(&center, radii.inner, next_angle),
        ],
    })
}

/// Runs [`generate_tooth_path`] for every tooth, in index order.
pub fn tooth_profiles(
    center: Point2<Real>,
    total_teeth: i64,
    radii: &ToothRadii,
) -> Result<Vec<ToothProfile>, ValidationError> {
    if total_teeth <= 0 {
        return Err(ValidationError::InvalidToothCount(total_teeth));
    }
    let count = total_teeth as usize;

    #[cfg(not(feature = "parallel"))]
    let iter = 0..count;
    #[cfg(feature = "parallel")]
    let iter = (0..count).into_par_iter();

    iter.map(|index| generate_tooth_path(center, index, total_teeth, radii))
        .collect()
}

/// Closed gear outline: every tooth's points in order, with the first point
/// repeated at the end.
pub fn gear_outline(
    center: Point2<Real>,
    total_teeth: i64,
    radii: &ToothRadii,
) -> Result<Vec<Point2<Real>>, ValidationError> {
    let profiles = tooth_profiles(center, total_teeth, radii)?;
    Ok(close_outline(&profiles))
}

pub(crate) fn close_outline(profiles: &[ToothProfile]) -> Vec<Point2<Real>> {
    let mut outline: Vec<Point2<Real>> =
        Vec::with_capacity(profiles.len() * POINTS_PER_TOOTH + 1);
    for profile in profiles {
        outline.extend_from_slice(&profile.points);
    }
    if let Some(first) = outline.first().copied() {
        outline.push(first);
    }
    outline
}
