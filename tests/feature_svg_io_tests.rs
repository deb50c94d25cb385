#![cfg(feature = "svg-io")]

mod support;

use spurgear::{
    io::svg::{SvgStyle, ToSVG},
    render::{GearDrawing, RenderScale},
};

#[test]
fn svg_document_contains_circles_and_teeth() {
    let params = support::reference_gear();
    let drawing = GearDrawing::centered(&params, RenderScale::default(), 600.0).unwrap();
    let svg = drawing.to_svg();

    assert!(svg.contains("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 600 600""#));
    assert_eq!(svg.matches("<circle").count(), 4);
    assert_eq!(svg.matches("<path").count(), 24);
    // pitch circle radius 24 mm at ×5
    assert!(svg.contains(r#"r="120""#));
}

#[test]
fn custom_style_is_applied() {
    let params = support::reference_gear();
    let drawing = GearDrawing::centered(&params, RenderScale::default(), 800.0).unwrap();
    let style = SvgStyle {
        canvas_size: 800.0,
        tooth_color: "black".to_string(),
        stroke_width: 1.5,
        ..SvgStyle::default()
    };
    let svg = drawing.to_svg_with_style(&style).unwrap();
    assert!(svg.contains(r#"width="800""#));
    assert!(svg.contains(r#"stroke="black""#));
    assert!(svg.contains(r#"stroke-width="1.5""#));
}

#[test]
fn writes_to_disk() {
    let params = support::reference_gear();
    let drawing = GearDrawing::centered(&params, RenderScale::default(), 600.0).unwrap();
    let path = std::env::temp_dir().join(format!("spurgear_{}.svg", std::process::id()));
    drawing.write_svg(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(written, drawing.to_svg());
}
