mod control;
mod frame;

pub use control::ControlUsecases;
pub use frame::{FrameUsecases, PixelPosition};
