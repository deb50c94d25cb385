//! `geo` views of a [`GearDrawing`].

use super::{GearDrawing, ReferenceCircle};
use crate::float_types::{Real, TAU};
use geo::{BoundingRect, Coord, Geometry, GeometryCollection, LineString, MultiLineString, Rect};

/// Segments used for reference circles by [`GearDrawing::to_geometry`].
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 64;

impl ReferenceCircle {
    /// Closed ring of `segments` chords approximating the circle.
    pub fn to_line_string(&self, segments: usize) -> LineString<Real> {
        let segments = segments.max(3);
        let mut coords: Vec<Coord<Real>> = (0..segments)
            .map(|i| {
                let theta = TAU * i as Real / segments as Real;
                Coord {
                    x: self.center.x + self.radius * theta.cos(),
                    y: self.center.y + self.radius * theta.sin(),
                }
            })
            .collect();
        coords.push(coords[0]);
        LineString::new(coords)
    }
}

impl GearDrawing {
    /// The closed tooth outline as a ring.
    ///
    /// The straight-segment teeth cross themselves (the tip point sits at the
    /// tooth's start angle), so this is a `LineString`, not a `Polygon`.
    pub fn outline_line_string(&self) -> LineString<Real> {
        self.outline().into_iter().map(|p| Coord { x: p.x, y: p.y }).collect()
    }

    /// One open five-point `LineString` per tooth.
    pub fn teeth_multi_line_string(&self) -> MultiLineString<Real> {
        MultiLineString::new(
            self.teeth()
                .iter()
                .map(|tooth| tooth.points.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
                .collect(),
        )
    }

    /// Reference circles (one `LineString` each, in [`circles`](Self::circles)
    /// order) followed by the outline ring.
    pub fn to_geometry_with_segments(&self, circle_segments: usize) -> GeometryCollection<Real> {
        let mut geometry: Vec<Geometry<Real>> = self
            .circles()
            .iter()
            .map(|circle| Geometry::LineString(circle.to_line_string(circle_segments)))
            .collect();
        geometry.push(Geometry::LineString(self.outline_line_string()));
        GeometryCollection(geometry)
    }

    pub fn to_geometry(&self) -> GeometryCollection<Real> {
        self.to_geometry_with_segments(DEFAULT_CIRCLE_SEGMENTS)
    }

    /// Axis-aligned bounds of everything drawn.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.to_geometry().bounding_rect()
    }
}

#[cfg(test)]
mod tests {
    use crate::gear::{GearInput, POINTS_PER_TOOTH, compute_gear_parameters};
    use crate::render::{GearDrawing, RenderScale};
    use geo::Geometry;

    fn drawing() -> GearDrawing {
        let params = compute_gear_parameters(&GearInput::new(24, 48.0, 20.0)).unwrap();
        GearDrawing::centered(&params, RenderScale::default(), 600.0).unwrap()
    }

    #[test]
    fn geometry_holds_circles_then_outline() {
        let gc = drawing().to_geometry_with_segments(32);
        assert_eq!(gc.0.len(), 5);
        assert!(gc.0[..4].iter().all(|g| matches!(g, Geometry::LineString(ls) if ls.0.len() == 33)));
        assert!(matches!(&gc.0[4], Geometry::LineString(ls) if ls.is_closed()));
        assert!(!gc.0.iter().any(|g| matches!(g, Geometry::Polygon(_))));
    }

    #[test]
    fn outline_ring_is_the_teeth_in_order() {
        let d = drawing();
        let ring = d.outline_line_string();
        assert_eq!(ring.0.len(), 24 * POINTS_PER_TOOTH + 1);
        assert!(ring.is_closed());

        for (i, tooth) in d.teeth().iter().enumerate() {
            for (j, p) in tooth.points.iter().enumerate() {
                let c = ring.0[i * POINTS_PER_TOOTH + j];
                assert_eq!((c.x, c.y), (p.x, p.y), "tooth {i} point {j}");
            }
        }
    }

    #[test]
    fn one_open_line_string_per_tooth() {
        let d = drawing();
        let teeth = d.teeth_multi_line_string();
        assert_eq!(teeth.0.len(), 24);
        for line in &teeth.0 {
            assert_eq!(line.0.len(), POINTS_PER_TOOTH);
            assert!(!line.is_closed());
        }
    }

    #[test]
    fn bounds_reach_the_addendum_circle() {
        let d = drawing();
        let rect = d.bounding_rect().unwrap();
        // addendum circle: (24 + 2) * 5 = 130 around (300, 300)
        assert!((rect.max().x - 430.0).abs() < 1e-6);
        assert!((rect.min().x - 170.0).abs() < 0.5);
    }
}
