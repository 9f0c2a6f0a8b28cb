//! Text command surface of the controller
//!
//! Transport agnostic: whatever carries the browser messages (a WebSocket
//! server on the target) hands the text frames to [`ControlController`] and
//! serves [`ControlController::page`] for HTTP `GET /`.

mod command;
mod control;
mod status;

pub use command::{CommandError, ControlCommand, parse_command};
pub use control::ControlController;
pub use status::{STATUS_CAPACITY, status_json};
