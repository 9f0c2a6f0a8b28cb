#![no_std]

//! Color pipeline for Colorduino LED matrices
//!
//! Architecture layers:
//! - `math8` - 8-bit fixed-point scaling helpers (shift instead of divide)
//! - `color` - Pixel type, gamma lookup and the hue wheel converter
//!
//! Everything here is pure: no state, no allocation, no floating point.

pub mod color;
pub mod math8;

pub use color::{
    ColorConverter, GAMMA8, GammaStage, GammaTable, HUE_STEPS, Hsv, Pixel, pixel_bytes,
    wheel,
};
