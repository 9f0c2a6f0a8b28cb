//! Chain addressing
//!
//! Boards are numbered logically from the viewer's point of view. Depending
//! on how the chain is mounted, logical position 0 is either the first or
//! the last board on the wire.

use crate::config::{ChainConfig, ConfigError};

/// How the chain is mounted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Logical order is the reverse of wiring order
    #[default]
    Standard,
    /// Logical order follows wiring order
    Rotated,
}

/// Maps logical matrix indices to bus addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressResolver<const N: usize> {
    addresses: [u8; N],
    orientation: Orientation,
}

impl<const N: usize> AddressResolver<N> {
    /// Build a resolver over a validated address table
    ///
    /// Every address must fit in 7 bits and appear once, which makes the
    /// mapping a bijection for both orientations.
    pub fn new(addresses: [u8; N], orientation: Orientation) -> Result<Self, ConfigError> {
        for (i, &address) in addresses.iter().enumerate() {
            if address > 0x7F {
                return Err(ConfigError::InvalidAddress(address));
            }
            if addresses[..i].contains(&address) {
                return Err(ConfigError::DuplicateAddress(address));
            }
        }
        Ok(Self {
            addresses,
            orientation,
        })
    }

    pub fn from_config(config: &ChainConfig<N>) -> Result<Self, ConfigError> {
        Self::new(config.addresses, config.orientation)
    }

    /// Number of boards in the chain
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Position in the address table for a logical index
    ///
    /// # Panics
    /// If `matrix >= N`. Callers own bounds checking.
    pub fn slot(&self, matrix: usize) -> usize {
        assert!(matrix < N, "matrix {matrix} outside chain of {N}");
        match self.orientation {
            Orientation::Rotated => matrix,
            Orientation::Standard => N - matrix - 1,
        }
    }

    /// Bus address of a logical matrix
    ///
    /// # Panics
    /// If `matrix >= N`.
    pub fn resolve(&self, matrix: usize) -> u8 {
        self.addresses[self.slot(matrix)]
    }
}
