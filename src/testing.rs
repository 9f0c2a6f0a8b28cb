//! Recording doubles for the bus port and the embedded-hal traits

use chromaduino_color::Pixel;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use heapless::Vec;

use crate::domain::ports::{MAX_BLOCK_BYTES, MatrixBus, block_len};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BusOp {
    Select(usize),
    Fast(usize),
    Pixel(usize, Pixel),
    Block(usize, Vec<u8, MAX_BLOCK_BYTES>),
    Flip(usize),
    Balance(usize),
}

/// Bus port that only records what it is asked to do
pub(crate) struct RecordingBus {
    pub(crate) matrices: usize,
    pub(crate) ops: Vec<BusOp, 256>,
    pub(crate) balance_ok: bool,
}

impl RecordingBus {
    pub(crate) fn new(matrices: usize) -> Self {
        Self {
            matrices,
            ops: Vec::new(),
            balance_ok: true,
        }
    }

    fn record(&mut self, op: BusOp) {
        self.ops.push(op).expect("recording bus full");
    }
}

impl MatrixBus for RecordingBus {
    fn matrix_count(&self) -> usize {
        self.matrices
    }

    fn select_write_buffer(&mut self, matrix: usize) {
        self.record(BusOp::Select(matrix));
    }

    fn select_fast_command(&mut self, matrix: usize) {
        self.record(BusOp::Fast(matrix));
    }

    fn write_pixel(&mut self, matrix: usize, pixel: Pixel) {
        self.record(BusOp::Pixel(matrix, pixel));
    }

    fn write_block(&mut self, matrix: usize, bytes: &[u8]) -> usize {
        let len = block_len(bytes.len());
        if len > 0 {
            let block = Vec::from_slice(&bytes[..len]).expect("block fits");
            self.record(BusOp::Block(matrix, block));
        }
        len
    }

    fn flip_buffers(&mut self, matrix: usize) {
        self.record(BusOp::Flip(matrix));
    }

    fn query_and_reset_balance(&mut self, matrix: usize) -> bool {
        self.record(BusOp::Balance(matrix));
        self.balance_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transfer {
    Write(u8, Vec<u8, 32>),
    Read(u8),
}

/// I²C bus that records transfers and answers reads with a canned byte
pub(crate) struct RecordingI2c {
    pub(crate) transfers: Vec<Transfer, 128>,
    /// Byte returned by reads, `None` makes reads fail
    pub(crate) reply: Option<u8>,
    pub(crate) fail_writes: bool,
}

impl RecordingI2c {
    pub(crate) fn new() -> Self {
        Self {
            transfers: Vec::new(),
            reply: None,
            fail_writes: false,
        }
    }

    pub(crate) fn writes(&self) -> impl Iterator<Item = (u8, &[u8])> {
        self.transfers.iter().filter_map(|t| match t {
            Transfer::Write(address, bytes) => Some((*address, bytes.as_slice())),
            Transfer::Read(_) => None,
        })
    }
}

impl ErrorType for RecordingI2c {
    type Error = ErrorKind;
}

impl I2c for RecordingI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    let bytes = Vec::from_slice(bytes).expect("write fits");
                    self.transfers
                        .push(Transfer::Write(address, bytes))
                        .expect("recording i2c full");
                    if self.fail_writes {
                        return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
                    }
                }
                Operation::Read(buffer) => {
                    self.transfers
                        .push(Transfer::Read(address))
                        .expect("recording i2c full");
                    let byte = self
                        .reply
                        .ok_or(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))?;
                    buffer.fill(byte);
                }
            }
        }
        Ok(())
    }
}

/// Delay that only adds up the requested time
#[derive(Default)]
pub(crate) struct CountingDelay {
    pub(crate) ns: u64,
}

impl CountingDelay {
    pub(crate) fn millis(&self) -> u64 {
        self.ns / 1_000_000
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns += u64::from(ns);
    }
}
