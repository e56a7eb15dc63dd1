//! Error types for pin resolution, mode selection, and register access

use crate::mode::Mode;
use crate::pin::Pin;
use crate::query::RegisterBank;
use thiserror::Error;

/// Errors produced by name resolution and pin queries
#[derive(Debug, Error)]
pub enum Error {
    /// The name matched no entry in its naming scheme
    #[error("wrong pin name: {0} (valid names are ra9-rk2, p0-p27, j3-j40)")]
    UnknownPinName(String),

    /// The name is syntactically valid but denotes a pin this chip does not
    /// route to the header (Broadcom p1)
    #[error("pin name {0} is not supported on PIC32")]
    UnsupportedPinName(String),

    /// The mode name matched no mode table entry
    #[error("invalid mode: {0}")]
    UnknownMode(String),

    /// The pin's multiplexer group cannot produce the requested function
    #[error("pin {pin} has no mapping for mode {mode}")]
    ModeNotSupported { pin: Pin, mode: Mode },

    /// Register window access failed
    #[error(transparent)]
    Bus(#[from] BusError),
}

/// Errors raised by [`crate::RegisterBus`] implementations.
///
/// Mapping failures are fatal to the invoking command: register access
/// errors on this hardware never indicate a transient condition.
#[derive(Debug, Error)]
pub enum BusError {
    /// A register window could not be mapped into the process
    #[error("cannot map {bank} registers at {address:#010x}: {source}")]
    Map {
        bank: RegisterBank,
        address: u64,
        #[source]
        source: std::io::Error,
    },

    /// Offset falls outside the bank's register window
    #[error("offset {offset:#x} is outside the {bank} register window")]
    OutOfWindow { bank: RegisterBank, offset: u32 },
}

/// Result type for mzgpio-core operations
pub type Result<T> = std::result::Result<T, Error>;
