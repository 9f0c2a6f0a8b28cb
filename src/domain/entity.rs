use serde::{Deserialize, Serialize};

use crate::config::CONTROL;

/// What drives the hue of the displayed color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    /// Last explicit saturation/value pair
    #[default]
    Manual,
    /// External hue cycling effect
    Effect,
}

/// Represents the remotely controlled color state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    pub sat: u8,
    pub val: u8,
    pub mode: ControlMode,
}

impl ControlState {
    pub const fn new(sat: u8, val: u8) -> Self {
        Self {
            sat,
            val,
            mode: ControlMode::Manual,
        }
    }

    pub const fn effect_enabled(&self) -> bool {
        matches!(self.mode, ControlMode::Effect)
    }

    /// Levels packed as `val | sat << 8`
    pub const fn packed(&self) -> u32 {
        (self.val as u32) | ((self.sat as u32) << 8)
    }

    /// Inverse of [`Self::packed`], mode is reset to manual
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_packed(packed: u32) -> Self {
        Self::new((packed >> 8) as u8, packed as u8)
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(CONTROL.default_sat, CONTROL.default_val)
    }
}
