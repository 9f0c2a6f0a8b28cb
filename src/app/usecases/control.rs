use crate::domain::{
    dto::ControlIntent,
    entity::ControlState,
    ports::{ControlStateChanger, ControlStateReader},
};

pub struct ControlUsecases {
    state: ControlState,
}

impl ControlUsecases {
    pub const fn new(state: ControlState) -> Self {
        Self { state }
    }
}

impl Default for ControlUsecases {
    fn default() -> Self {
        Self::new(ControlState::default())
    }
}

impl ControlStateReader for ControlUsecases {
    fn control_state(&self) -> ControlState {
        self.state
    }
}

impl ControlStateChanger for ControlUsecases {
    fn apply_control_intent(&mut self, intent: ControlIntent) -> ControlState {
        let next = intent.apply_to(self.state);
        #[cfg(feature = "log")]
        if next.mode != self.state.mode {
            log::info!("control: mode {:?} -> {:?}", self.state.mode, next.mode);
        }
        self.state = next;
        next
    }
}
