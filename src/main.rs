// main.rs
//
// Minimal example of each stage of spurgear: validate, compute, scale, draw, export.
// Files land in `out/`.

use spurgear::gear::{GearInput, compute_gear_parameters};
use spurgear::render::{GearDrawing, RenderScale};
use std::fs;

fn main() {
    // Ensure the output folder exists
    let _ = fs::create_dir_all("out");

    // Strings as a form would hand them over
    let input = match GearInput::from_fields("24", "48", "20") {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let params = match compute_gear_parameters(&input) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    print!("{}", params.to_report_text());
    let _ = fs::write("out/gear.txt", params.to_report_text());

    // A blank field is reported, not defaulted
    if let Err(err) = GearInput::from_fields("", "48", "20").and_then(|i| compute_gear_parameters(&i)) {
        println!("blank teeth field: {err}");
    }

    let drawing = match GearDrawing::centered(&params, RenderScale::default(), 600.0) {
        Ok(drawing) => drawing,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    println!("outline: {} points", drawing.outline().len());

    #[cfg(feature = "svg-io")]
    {
        if let Err(err) = drawing.write_svg("out/gear.svg") {
            eprintln!("svg export failed: {err}");
        }

        let legacy = GearDrawing::centered(&params, RenderScale::legacy(), 600.0);
        if let Ok(legacy) = legacy {
            let _ = legacy.write_svg("out/gear_legacy_scale.svg");
        }
    }

    #[cfg(feature = "dxf-io")]
    {
        match drawing.to_dxf() {
            Ok(bytes) => {
                let _ = fs::write("out/gear.dxf", bytes);
            }
            Err(err) => eprintln!("dxf export failed: {err}"),
        }
    }

    println!("wrote out/");
}
