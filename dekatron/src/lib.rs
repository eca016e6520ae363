//! Driver for the OG-4 decade counting tube.
//!
//! The tube keeps its count as a glow on one of ten cathodes. Two guide electrodes move
//! the glow one cathode per four-phase pulse sequence, and only cathode 0 is wired back
//! through a sense resistor (K0). Everything here is written against `embedded-hal` 1.0,
//! so the same code runs on the board and against a simulated tube on the host.

#![no_std]

#[macro_use]
mod fmt;

pub mod consts;
pub mod dekatron_error;
pub mod driver;
pub mod spinner;
pub mod status_led;

pub use dekatron_error::DekatronError;
pub use driver::{Dekatron, Direction};
pub use spinner::{Spinner, StartupReport};
pub use status_led::StatusLed;
