//! mzgpio-mmio - Linux /dev/mem register access for mzgpio
//!
//! The PIC32MZ running Linux exposes its special function registers through
//! physical memory. [`PhysMap`] wraps the mmap of one register window;
//! [`MmioBus`] implements the core crate's `RegisterBus` over a lazily
//! mapped window per register bank.
//!
//! Accessing `/dev/mem` requires root. A mapping failure is fatal to the
//! invoking command: it means the device or the privileges are absent, not
//! a transient condition.

mod bus;
mod physmap;

pub use bus::MmioBus;
pub use physmap::PhysMap;
