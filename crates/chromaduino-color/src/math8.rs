/// Scale an 8-bit value by `(scale + 1) / 256`
///
/// The `+ 1` makes the factor range 1..=256 so the result is a plain shift:
/// `scale = 255` returns `value` unchanged and `scale = 0` always returns 0.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * (u16::from(scale) + 1)) >> 8) as u8
}

/// Pull a channel toward full intensity as `sat` drops
///
/// `sat = 255` keeps the channel, `sat = 0` returns 255 (white).
#[inline]
pub fn desaturate8(value: u8, sat: u8) -> u8 {
    255 - scale8(255 - value, sat)
}
