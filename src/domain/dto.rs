use crate::domain::entity::{ControlMode, ControlState};

/// Represents a user intent to change the control state.
///
/// Independent of the source of the request (WebSocket, HTTP, button).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlIntent {
    /// Set saturation to this value
    pub sat: Option<u8>,
    /// Set value (brightness) to this value
    pub val: Option<u8>,
    /// Switch between manual levels and the effect
    pub mode: Option<ControlMode>,
}

impl ControlIntent {
    /// Create a new empty intent (no changes)
    pub const fn new() -> Self {
        Self {
            sat: None,
            val: None,
            mode: None,
        }
    }

    #[must_use]
    pub const fn with_levels(mut self, sat: u8, val: u8) -> Self {
        self.sat = Some(sat);
        self.val = Some(val);
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ControlMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.sat.is_none() && self.val.is_none() && self.mode.is_none()
    }

    /// State after applying this intent to `state`
    pub fn apply_to(&self, state: ControlState) -> ControlState {
        ControlState {
            sat: self.sat.unwrap_or(state.sat),
            val: self.val.unwrap_or(state.val),
            mode: self.mode.unwrap_or(state.mode),
        }
    }
}

impl From<ControlState> for ControlIntent {
    fn from(state: ControlState) -> Self {
        ControlIntent {
            sat: Some(state.sat),
            val: Some(state.val),
            mode: Some(state.mode),
        }
    }
}
