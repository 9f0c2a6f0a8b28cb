//! Host side doubles shared by the integration tests.

use embedded_hal::{
    delay::DelayNs,
    i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation},
};

/// One I²C transaction as seen on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    Write(u8, Vec<u8>),
    Read(u8),
    /// Settle delay in milliseconds
    Delay(u32),
}

/// Recorded bus traffic, delays included
#[derive(Debug, Default)]
pub struct Wire {
    pub transfers: Vec<Transfer>,
}

impl Wire {
    /// Written payloads addressed to `address`
    pub fn writes_to(&self, address: u8) -> Vec<&[u8]> {
        self.transfers
            .iter()
            .filter_map(|transfer| match transfer {
                Transfer::Write(a, bytes) if *a == address => Some(bytes.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> usize {
        self.transfers
            .iter()
            .filter(|transfer| matches!(transfer, Transfer::Delay(_)))
            .count()
    }
}

/// I²C double that answers balance queries with a fixed count
pub struct MockI2c<'a> {
    wire: &'a std::cell::RefCell<Wire>,
    /// Byte returned by reads, `None` makes reads fail
    pub reply: Option<u8>,
    /// Addresses whose writes are not acknowledged
    pub absent: Vec<u8>,
}

impl<'a> MockI2c<'a> {
    pub fn new(wire: &'a std::cell::RefCell<Wire>) -> Self {
        Self {
            wire,
            reply: Some(3),
            absent: Vec::new(),
        }
    }
}

impl ErrorType for MockI2c<'_> {
    type Error = ErrorKind;
}

impl I2c for MockI2c<'_> {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut wire = self.wire.borrow_mut();
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    wire.transfers.push(Transfer::Write(address, bytes.to_vec()));
                    if self.absent.contains(&address) {
                        return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
                    }
                }
                Operation::Read(buffer) => {
                    wire.transfers.push(Transfer::Read(address));
                    let reply = self
                        .reply
                        .ok_or(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))?;
                    buffer.fill(reply);
                }
            }
        }
        Ok(())
    }
}

/// Delay double that logs into the same wire as the bus
pub struct MockDelay<'a> {
    wire: &'a std::cell::RefCell<Wire>,
}

impl<'a> MockDelay<'a> {
    pub fn new(wire: &'a std::cell::RefCell<Wire>) -> Self {
        Self { wire }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.wire
            .borrow_mut()
            .transfers
            .push(Transfer::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wire.borrow_mut().transfers.push(Transfer::Delay(ms));
    }
}
