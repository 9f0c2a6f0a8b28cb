#![no_std]

//! Colorduino matrix chain controller
//!
//! Layers:
//! - `domain` - chain addressing, control state and the bus port
//! - `infrastructure` - I²C driver for the Colorduino slave firmware
//! - `app` - frame and control use cases built on the ports
//! - `controllers` - text command surface and status report

pub mod app;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod testing;
