use crate::domain::{dto::ControlIntent, entity::ControlState};

/// Reader interface for the control state
pub trait ControlStateReader {
    fn control_state(&self) -> ControlState;
}

/// Applier interface for control intents
pub trait ControlStateChanger {
    /// Apply an intent and return the resulting state
    fn apply_control_intent(&mut self, intent: ControlIntent) -> ControlState;
}

/// Port interface for the control usecases
pub trait ControlUsecasesPort: ControlStateReader + ControlStateChanger {}

impl<T: ControlStateReader + ControlStateChanger> ControlUsecasesPort for T {}
