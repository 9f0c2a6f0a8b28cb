mod colorduino;

pub use colorduino::{ColorduinoBus, command};
