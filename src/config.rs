use crate::domain::chain::Orientation;

/// Bus addresses of the reference three-board chain, in wiring order
pub const REFERENCE_ADDRESSES: [u8; 3] = [0x70, 0x71, 0x72];

/// Time the slave firmware needs after each transaction
pub const SETTLE_DELAY_MS: u32 = 1;

/// Colorduino matrix geometry
pub const MATRIX_WIDTH: usize = 8;
pub const MATRIX_HEIGHT: usize = 8;
pub const MATRIX_PIXELS: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Address does not fit in 7 bits
    InvalidAddress(u8),
    /// Two chain positions share an address
    DuplicateAddress(u8),
}

/// Chain topology, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig<const N: usize> {
    pub addresses: [u8; N],
    pub orientation: Orientation,
    pub settle_delay_ms: u32,
}

impl<const N: usize> ChainConfig<N> {
    pub const fn new(addresses: [u8; N], orientation: Orientation) -> Self {
        Self {
            addresses,
            orientation,
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }

    #[must_use]
    pub const fn with_settle_delay_ms(mut self, settle_delay_ms: u32) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }
}

impl ChainConfig<3> {
    pub const fn reference(orientation: Orientation) -> Self {
        Self::new(REFERENCE_ADDRESSES, orientation)
    }
}

/// Defaults of the browser control surface
#[derive(Debug, Clone, Copy)]
pub struct ControlConfig {
    pub hostname: &'static str,
    pub default_sat: u8,
    pub default_val: u8,
}

pub const CONTROL: ControlConfig = ControlConfig {
    hostname: "chromaduino-plasma",
    default_sat: 255,
    default_val: 160,
};
