//! A small **spur gear** parameter engine.
//!
//! Given a tooth count, pitch diameter and pressure angle,
//! [`compute_gear_parameters`](gear::compute_gear_parameters) derives the standard
//! metrics (module, base diameter, addendum, dedendum, circular pitch, tooth
//! thickness, clearance), and [`generate_tooth_path`](gear::generate_tooth_path)
//! traces each tooth as five straight-segment points around the dedendum, pitch
//! and addendum circles. Tooth outlines are a visual approximation, not
//! involute profiles.
//!
//! ```
//! use spurgear::gear::{GearInput, compute_gear_parameters};
//! use spurgear::render::{GearDrawing, RenderScale};
//!
//! let params = compute_gear_parameters(&GearInput::new(24, 48.0, 20.0)).unwrap();
//! let drawing = GearDrawing::centered(&params, RenderScale::default(), 600.0).unwrap();
//! assert_eq!(drawing.teeth().len(), 24);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export drawings as SVG
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): export drawings as `.dxf`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to generate tooth profiles

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod gear;
pub mod io;
pub mod render;
pub mod report;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ValidationError;
pub use gear::{GearInput, GearParameters, compute_gear_parameters, generate_tooth_path};
