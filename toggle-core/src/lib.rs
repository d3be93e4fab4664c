#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controller;
pub mod driver;
pub mod line;
pub mod switch;
pub mod traits;

pub use config::{Config, Polarity};
pub use controller::ToggleController;
pub use driver::OutputDriver;
pub use line::{Capabilities, LedLine, LineError, gpio_line, port_and_pin, resolve_status_led};
pub use switch::{Edge, ToggleEvent, ToggleSwitch};
pub use traits::{Button, Led};
