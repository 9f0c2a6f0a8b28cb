//! Gamma lookup table
//!
//! LED brightness is not perceived linearly. The table maps a linear 8-bit
//! intensity to the PWM level the matrix drivers need, approximating a
//! 2.8 power curve.

/// Default gamma curve (≈ 2.8)
#[rustfmt::skip]
pub const GAMMA8: [u8; 256] = [
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   1,   1,   1,   1,   1,   1,   1,   1,
      1,   1,   1,   1,   1,   1,   1,   1,   2,   2,   2,   2,   2,   2,   2,   2,
      2,   3,   3,   3,   3,   3,   3,   3,   4,   4,   4,   4,   4,   5,   5,   5,
      5,   6,   6,   6,   6,   7,   7,   7,   7,   8,   8,   8,   9,   9,   9,  10,
     10,  10,  11,  11,  11,  12,  12,  13,  13,  13,  14,  14,  15,  15,  16,  16,
     17,  17,  18,  18,  19,  19,  20,  20,  21,  21,  22,  22,  23,  24,  24,  25,
     25,  26,  27,  27,  28,  29,  29,  30,  31,  32,  32,  33,  34,  35,  35,  36,
     37,  38,  39,  39,  40,  41,  42,  43,  44,  45,  46,  47,  48,  49,  50,  50,
     51,  52,  54,  55,  56,  57,  58,  59,  60,  61,  62,  63,  64,  66,  67,  68,
     69,  70,  72,  73,  74,  75,  77,  78,  79,  81,  82,  83,  85,  86,  87,  89,
     90,  92,  93,  95,  96,  98,  99, 101, 102, 104, 105, 107, 109, 110, 112, 114,
    115, 117, 119, 120, 122, 124, 126, 127, 129, 131, 133, 135, 137, 138, 140, 142,
    144, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 167, 169, 171, 173, 175,
    177, 180, 182, 184, 186, 189, 191, 193, 196, 198, 200, 203, 205, 208, 210, 213,
    215, 218, 220, 223, 225, 228, 231, 233, 236, 239, 241, 244, 247, 249, 252, 255,
];

/// Nondecreasing 256-entry brightness lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GammaTable {
    table: [u8; 256],
}

impl GammaTable {
    /// The default display curve
    pub const DEFAULT: Self = Self { table: GAMMA8 };

    /// Identity mapping (no correction)
    pub const LINEAR: Self = Self {
        table: linear_table(),
    };

    /// Wrap a custom table
    ///
    /// Returns `None` if any entry is smaller than the one before it.
    pub const fn new(table: [u8; 256]) -> Option<Self> {
        let mut i = 1;
        while i < table.len() {
            if table[i] < table[i - 1] {
                return None;
            }
            i += 1;
        }
        Some(Self { table })
    }

    /// Look up the corrected level
    #[inline]
    pub const fn apply(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    pub const fn as_array(&self) -> &[u8; 256] {
        &self.table
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn linear_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = i as u8;
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_nondecreasing() {
        assert!(GammaTable::new(GAMMA8).is_some());
        for pair in GAMMA8.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn default_table_spans_full_range() {
        assert_eq!(GammaTable::DEFAULT.apply(0), 0);
        assert_eq!(GammaTable::DEFAULT.apply(255), 255);
        assert_eq!(GammaTable::DEFAULT.apply(128), 37);
    }

    #[test]
    fn linear_table_is_identity() {
        for value in 0..=255u8 {
            assert_eq!(GammaTable::LINEAR.apply(value), value);
        }
    }

    #[test]
    fn decreasing_table_is_rejected() {
        let mut table = GAMMA8;
        table[100] = 0;
        assert_eq!(GammaTable::new(table), None);
    }
}
