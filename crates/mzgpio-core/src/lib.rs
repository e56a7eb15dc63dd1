//! mzgpio-core - pin mapping and peripheral pin select decode for the PIC32MZ
//!
//! This crate holds everything that can be known about the chip without
//! touching hardware: the three pin naming schemes and their cross maps,
//! the closed set of pin modes, and the Peripheral Pin Select (PPS) decode
//! tables that translate raw selector register values back into named
//! functions. Live queries go through [`PortController`], which is generic
//! over a [`RegisterBus`] so tests can substitute a scripted bus for the
//! real memory-mapped one.
//!
//! # Example
//!
//! ```ignore
//! use mzgpio_core::{Pin, PortController};
//!
//! let mut gpio = PortController::new(bus);
//! let pin = Pin::from_name("j8")?;
//! println!("{} is in mode {}", pin, gpio.mode(pin)?);
//! ```

pub mod error;
pub mod mode;
pub mod pin;
pub mod pps;
pub mod query;

pub use error::{BusError, Error, Result};
pub use mode::{Mode, Pull};
pub use pin::{Pin, Port};
pub use query::{PortController, RegisterBank, RegisterBus};
