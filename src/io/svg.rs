//! SVG export of gear drawings, using the [`svg`](https://crates.io/crates/svg) crate.

use super::IoError;
use crate::float_types::Real;
use crate::gear::ToothProfile;
use crate::render::{CircleKind, GearDrawing, ReferenceCircle};
use ::svg::Document;
use ::svg::node::element::path::Data;
use ::svg::node::element::{Circle, Path};
use std::path::Path as FsPath;

/// Anything that can be rendered to an SVG document string.
pub trait ToSVG {
    fn to_svg(&self) -> String;
}

/// Canvas and stroke settings for [`GearDrawing::to_svg_with_style`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Width and height of the square canvas.
    pub canvas_size: Real,
    pub stroke_width: Real,
    pub dedendum_color: String,
    pub base_color: String,
    pub pitch_color: String,
    pub addendum_color: String,
    pub tooth_color: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            canvas_size: 600.0,
            stroke_width: 4.0,
            dedendum_color: "#9E9E9E".to_string(),
            base_color: "#2196F3".to_string(),
            pitch_color: "#f44336".to_string(),
            addendum_color: "#4CAF50".to_string(),
            tooth_color: "#FFC107".to_string(),
        }
    }
}

impl SvgStyle {
    fn color(&self, kind: CircleKind) -> &str {
        match kind {
            CircleKind::Dedendum => &self.dedendum_color,
            CircleKind::Base => &self.base_color,
            CircleKind::Pitch => &self.pitch_color,
            CircleKind::Addendum => &self.addendum_color,
        }
    }

    fn validate(&self) -> Result<(), IoError> {
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(IoError::MalformedInput(format!(
                "canvas size must be positive, got {}",
                self.canvas_size
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(IoError::MalformedInput(format!(
                "stroke width must not be negative, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }
}

fn circle_element(circle: &ReferenceCircle, style: &SvgStyle) -> Circle {
    Circle::new()
        .set("class", circle.kind.name())
        .set("cx", circle.center.x as f64)
        .set("cy", circle.center.y as f64)
        .set("r", circle.radius as f64)
        .set("stroke", style.color(circle.kind))
        .set("stroke-width", style.stroke_width as f64)
        .set("fill", "none")
}

fn tooth_element(tooth: &ToothProfile, style: &SvgStyle) -> Path {
    let [first, rest @ ..] = &tooth.points;
    let data = rest.iter().fold(
        Data::new().move_to((first.x as f32, first.y as f32)),
        |data, p| data.line_to((p.x as f32, p.y as f32)),
    );
    Path::new()
        .set("class", "tooth")
        .set("d", data)
        .set("stroke", style.tooth_color.as_str())
        .set("stroke-width", style.stroke_width as f64)
        .set("fill", "none")
}

fn document(drawing: &GearDrawing, style: &SvgStyle) -> Document {
    let size = style.canvas_size as f64;
    let mut doc = Document::new()
        .set("width", size)
        .set("height", size)
        .set("viewBox", format!("0 0 {size} {size}"));

    for circle in drawing.circles() {
        doc = doc.add(circle_element(circle, style));
    }
    for tooth in drawing.teeth() {
        doc = doc.add(tooth_element(tooth, style));
    }
    doc
}

impl GearDrawing {
    /// Renders the reference circles and one open `<path>` per tooth.
    ///
    /// The drawing is written as-is; build it with
    /// [`GearDrawing::centered`] using the same canvas size to keep it in view.
    pub fn to_svg_with_style(&self, style: &SvgStyle) -> Result<String, IoError> {
        style.validate()?;
        Ok(document(self, style).to_string())
    }

    /// Writes [`ToSVG::to_svg`] output to `path`.
    pub fn write_svg<P: AsRef<FsPath>>(&self, path: P) -> Result<(), IoError> {
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }
}

impl ToSVG for GearDrawing {
    fn to_svg(&self) -> String {
        document(self, &SvgStyle::default()).to_string()
    }
}
