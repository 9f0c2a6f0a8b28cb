use chromaduino_control_page::{HomePage, PageError};

use crate::{
    config::ControlConfig,
    controllers::command::{CommandError, parse_command},
    domain::{entity::ControlState, ports::ControlUsecasesPort},
};

/// Glues the command parser, the control use cases and the served page
pub struct ControlController<P: ControlUsecasesPort> {
    usecases: P,
    page: HomePage,
}

impl<P: ControlUsecasesPort> ControlController<P> {
    /// Render the page for the current state of `usecases`
    pub fn new(usecases: P, config: &ControlConfig) -> Result<Self, PageError> {
        let state = usecases.control_state();
        let page = HomePage::render(state.sat, state.val, config.hostname)?;
        Ok(Self { usecases, page })
    }

    /// Handle one text message from a client
    ///
    /// On a parse failure the state and the page are left untouched.
    pub fn handle_text(&mut self, text: &str) -> Result<ControlState, CommandError> {
        let command = parse_command(text).inspect_err(|_e| {
            #[cfg(feature = "log")]
            log::warn!("control: rejected message {:?}: {:?}", text, _e);
        })?;
        let state = self.usecases.apply_control_intent(command.into());
        self.page.patch(state.sat, state.val);
        Ok(state)
    }

    pub fn state(&self) -> ControlState {
        self.usecases.control_state()
    }

    /// Page body for `GET /`
    pub fn page(&self) -> &[u8] {
        self.page.as_bytes()
    }

    pub fn usecases(&self) -> &P {
        &self.usecases
    }
}
