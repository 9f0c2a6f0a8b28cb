mod gamma;
mod hsv;

use smart_leds::RGB8;

pub use gamma::{GAMMA8, GammaTable};
pub use hsv::{ColorConverter, GammaStage, HUE_STEPS, Hsv, wheel};

/// One matrix pixel, sent on the wire as R, G, B.
pub type Pixel = RGB8;

/// Wire order of a pixel
#[inline]
pub const fn pixel_bytes(pixel: Pixel) -> [u8; 3] {
    [pixel.r, pixel.g, pixel.b]
}
