//! I²C driver for chained Colorduino slave boards
//!
//! Each board runs firmware that double buffers its 8x8 matrix. The master
//! selects the off-screen buffer, streams pixel triples into it and flips
//! buffers to show the frame. Writes are never acknowledged beyond the bus
//! level and every transaction must be followed by a short settle delay
//! before the board accepts the next one.

use chromaduino_color::{Pixel, pixel_bytes};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::{
    config::{ChainConfig, ConfigError},
    domain::{
        chain::AddressResolver,
        ports::{MatrixBus, block_len},
    },
};

/// Slave firmware command bytes
pub mod command {
    /// Following data goes to the write buffer
    pub const WRITE_BUFFER: u8 = 0x00;
    /// Swap write and display buffers
    pub const FLIP: u8 = 0x01;
    /// Take the pending triple as color balance
    pub const BALANCE: u8 = 0x02;
    /// Fast command mode
    pub const FAST: u8 = 0x11;
}

/// Byte count the slave reports when a whole pixel is pending
const PENDING_PIXEL: u8 = 3;

/// Blocking Colorduino chain driver
///
/// Owns the bus and a delay source. Bus errors are swallowed: the slave
/// firmware gives no way to recover from a lost write, so the driver moves
/// on as if it succeeded.
pub struct ColorduinoBus<I2C, D, const N: usize> {
    i2c: I2C,
    delay: D,
    resolver: AddressResolver<N>,
    settle_delay_ms: u32,
}

impl<I2C, D, const N: usize> ColorduinoBus<I2C, D, N>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver for the chain described by `config`
    ///
    /// # Arguments
    /// * `i2c` - Blocking I²C bus the chain hangs off
    /// * `delay` - Delay source used for the settle time
    /// * `config` - Address table, orientation and settle delay
    pub fn new(i2c: I2C, delay: D, config: &ChainConfig<N>) -> Result<Self, ConfigError> {
        let resolver = AddressResolver::from_config(config)?;
        Ok(Self::with_resolver(i2c, delay, resolver, config.settle_delay_ms))
    }

    pub fn with_resolver(
        i2c: I2C,
        delay: D,
        resolver: AddressResolver<N>,
        settle_delay_ms: u32,
    ) -> Self {
        Self {
            i2c,
            delay,
            resolver,
            settle_delay_ms,
        }
    }

    pub fn resolver(&self) -> &AddressResolver<N> {
        &self.resolver
    }

    /// Give the bus and delay back
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn settle(&mut self) {
        self.delay.delay_ms(self.settle_delay_ms);
    }

    fn transmit(&mut self, matrix: usize, bytes: &[u8]) {
        let address = self.resolver.resolve(matrix);
        if let Err(_e) = self.i2c.write(address, bytes) {
            #[cfg(feature = "log")]
            log::warn!(
                "colorduino: write of {} bytes to {:#04x} failed: {:?}",
                bytes.len(),
                address,
                embedded_hal::i2c::Error::kind(&_e)
            );
        }
        self.settle();
    }

    fn send_command(&mut self, matrix: usize, command: u8) {
        self.transmit(matrix, &[command]);
    }
}

impl<I2C, D, const N: usize> MatrixBus for ColorduinoBus<I2C, D, N>
where
    I2C: I2c,
    D: DelayNs,
{
    fn matrix_count(&self) -> usize {
        N
    }

    fn select_write_buffer(&mut self, matrix: usize) {
        self.send_command(matrix, command::WRITE_BUFFER);
    }

    fn select_fast_command(&mut self, matrix: usize) {
        self.send_command(matrix, command::FAST);
    }

    fn write_pixel(&mut self, matrix: usize, pixel: Pixel) {
        self.transmit(matrix, &pixel_bytes(pixel));
    }

    fn write_block(&mut self, matrix: usize, bytes: &[u8]) -> usize {
        let len = block_len(bytes.len());
        if len > 0 {
            self.transmit(matrix, &bytes[..len]);
        }
        len
    }

    fn flip_buffers(&mut self, matrix: usize) {
        self.send_command(matrix, command::FLIP);
    }

    fn query_and_reset_balance(&mut self, matrix: usize) -> bool {
        let address = self.resolver.resolve(matrix);
        let mut count = [0u8; 1];
        if self.i2c.read(address, &mut count).is_err() {
            count[0] = 0;
        }

        // The reset must follow the read: the count describes the board
        // before it consumes the pending triple.
        self.send_command(matrix, command::BALANCE);

        #[cfg(feature = "log")]
        log::debug!(
            "colorduino: balance on {:#04x}, {} bytes pending",
            address,
            count[0]
        );
        count[0] == PENDING_PIXEL
    }
}
