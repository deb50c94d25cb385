use super::IoError;
use crate::render::GearDrawing;
use dxf::entities::{Circle, Entity, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use dxf::{Drawing, LwPolylineVertex, Point};

impl GearDrawing {
    #[doc = " Export the drawing as DXF."]
    #[doc = ""]
    #[doc = " Each reference circle becomes a `CIRCLE` on a layer named after it"]
    #[doc = " (`dedendum`, `base`, `pitch`, `addendum`) and each tooth an open"]
    #[doc = " `LWPOLYLINE` on the `teeth` layer."]
    #[doc = ""]
    #[doc = " ## Returns"]
    #[doc = " The ASCII DXF bytes, or the writer's error."]
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        let mut drawing = Drawing::new();
        // LWPOLYLINE needs R14 or later
        drawing.header.version = AcadVersion::R2000;

        for circle in self.circles() {
            let entity_circle = Circle::new(
                Point::new(circle.center.x as f64, circle.center.y as f64, 0.0),
                circle.radius as f64,
            );
            let mut entity = Entity::new(EntityType::Circle(entity_circle));
            entity.common.layer = circle.kind.name().to_string();
            drawing.add_entity(entity);
        }

        for tooth in self.teeth() {
            let mut polyline = LwPolyline::default();
            polyline.vertices = tooth
                .points
                .iter()
                .map(|p| LwPolylineVertex { x: p.x as f64, y: p.y as f64, ..Default::default() })
                .collect();
            let mut entity = Entity::new(EntityType::LwPolyline(polyline));
            entity.common.layer = "teeth".to_string();
            drawing.add_entity(entity);
        }

        let mut buffer = Vec::new();
        drawing.save(&mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use crate::gear::{GearInput, compute_gear_parameters};
    use crate::render::{GearDrawing, RenderScale};
    use dxf::Drawing;
    use dxf::entities::EntityType;
    use std::io::Cursor;

    #[test]
    fn round_trips_through_the_dxf_reader() {
        let params = compute_gear_parameters(&GearInput::new(10, 40.0, 20.0)).unwrap();
        let drawing = GearDrawing::centered(&params, RenderScale::default(), 600.0).unwrap();
        let bytes = drawing.to_dxf().unwrap();

        let loaded = Drawing::load(&mut Cursor::new(bytes)).unwrap();
        let (mut circles, mut polylines) = (0, 0);
        for entity in loaded.entities() {
            match &entity.specific {
                EntityType::Circle(c) => {
                    circles += 1;
                    if entity.common.layer == "pitch" {
                        assert!((c.radius - 100.0).abs() < 1e-6);
                    }
                }
                EntityType::LwPolyline(p) => {
                    polylines += 1;
                    assert_eq!(p.vertices.len(), 5);
                }
                _ => {}
            }
        }
        assert_eq!(circles, 4);
        assert_eq!(polylines, 10);
    }
}
