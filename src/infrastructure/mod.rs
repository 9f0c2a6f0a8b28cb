//! Infrastructure layer - Port implementations
//!
//! Concrete implementations of the domain ports on top of `embedded-hal`
//! and `smart-leds`.

pub mod adapters;
pub mod drivers;
