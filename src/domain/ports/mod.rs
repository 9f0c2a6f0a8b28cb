pub mod control;
pub mod matrix;

pub use control::*;
pub use matrix::*;
