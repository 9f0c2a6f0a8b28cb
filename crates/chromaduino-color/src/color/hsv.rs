//! Hue wheel to RGB conversion
//!
//! The wheel has 1536 steps: six sextants of 256 steps each. Within a
//! sextant one channel is pinned at 255, one at 0 and the third ramps
//! linearly, so the wheel runs red → yellow → green → cyan → blue →
//! magenta → red with no discontinuity at the seams.
//!
//! Saturation and value use the `+ 1` trick from [`crate::math8`], so the
//! whole pipeline is shifts, multiplies and one table lookup per channel.

use super::{GammaTable, Pixel};
use crate::math8::{desaturate8, scale8};

/// Number of distinct hues on the wheel
pub const HUE_STEPS: i32 = 6 * 256;

/// A color on the 1536-step wheel
///
/// `hue` may be any integer; it is reduced modulo [`HUE_STEPS`] on
/// conversion, so negative and oversized hues wrap around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub hue: i32,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    pub const fn new(hue: i32, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    /// Hue reduced into `0..HUE_STEPS`
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn wheel_position(self) -> u16 {
        self.hue.rem_euclid(HUE_STEPS) as u16
    }
}

/// Where the gamma curve enters the pipeline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GammaStage {
    /// Correct every output channel after value scaling
    #[default]
    Channel,
    /// Correct `val` once and scale the channels by the corrected value
    Value,
}

/// Fully saturated, full brightness color at a wheel position
///
/// Positions past the last sextant give black.
#[allow(clippy::cast_possible_truncation)]
pub fn wheel(position: u16) -> Pixel {
    let lo = (position & 0xFF) as u8;
    let (r, g, b) = match position >> 8 {
        0 => (255, lo, 0),
        1 => (255 - lo, 255, 0),
        2 => (0, 255, lo),
        3 => (0, 255 - lo, 255),
        4 => (lo, 0, 255),
        5 => (255, 0, 255 - lo),
        _ => (0, 0, 0),
    };
    Pixel { r, g, b }
}

/// HSV to gamma-corrected RGB converter
///
/// Holds its own gamma table so differently calibrated chains can coexist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorConverter {
    gamma: GammaTable,
    stage: GammaStage,
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new(GammaTable::DEFAULT)
    }
}

impl ColorConverter {
    pub const fn new(gamma: GammaTable) -> Self {
        Self {
            gamma,
            stage: GammaStage::Channel,
        }
    }

    /// Select where gamma correction is applied
    #[must_use]
    pub const fn with_stage(mut self, stage: GammaStage) -> Self {
        self.stage = stage;
        self
    }

    pub const fn stage(&self) -> GammaStage {
        self.stage
    }

    pub const fn gamma(&self) -> &GammaTable {
        &self.gamma
    }

    /// Convert a wheel color to the pixel sent to the matrix
    pub fn convert(&self, color: Hsv) -> Pixel {
        let base = wheel(color.wheel_position());
        let r = desaturate8(base.r, color.sat);
        let g = desaturate8(base.g, color.sat);
        let b = desaturate8(base.b, color.sat);

        match self.stage {
            GammaStage::Channel => Pixel {
                r: self.gamma.apply(scale8(r, color.val)),
                g: self.gamma.apply(scale8(g, color.val)),
                b: self.gamma.apply(scale8(b, color.val)),
            },
            GammaStage::Value => {
                let val = self.gamma.apply(color.val);
                Pixel {
                    r: scale8(r, val),
                    g: scale8(g, val),
                    b: scale8(b, val),
                }
            }
        }
    }

    /// Shorthand for [`Self::convert`] with loose components
    pub fn hsv(&self, hue: i32, sat: u8, val: u8) -> Pixel {
        self.convert(Hsv::new(hue, sat, val))
    }
}
