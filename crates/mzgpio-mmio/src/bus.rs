//! Lazily mapped register bus over /dev/mem.

use log::{debug, trace};
use mzgpio_core::{BusError, RegisterBank, RegisterBus, Result};

use crate::physmap::PhysMap;

/// Register bus backed by one physical mapping per bank.
///
/// Each bank's window is mapped on first access and held for the process
/// lifetime. Methods take `&mut self`, so the lazy initialization needs no
/// locking; wrap the bus in a once-guard before sharing it across threads.
#[derive(Default)]
pub struct MmioBus {
    pps: Option<PhysMap>,
    ports: Option<PhysMap>,
    spi: Option<PhysMap>,
    i2c: Option<PhysMap>,
}

impl MmioBus {
    /// Create a bus with no windows mapped yet.
    pub fn new() -> Self {
        MmioBus::default()
    }

    fn window(&mut self, bank: RegisterBank) -> std::result::Result<&PhysMap, BusError> {
        let slot = match bank {
            RegisterBank::Pps => &mut self.pps,
            RegisterBank::Ports => &mut self.ports,
            RegisterBank::Spi => &mut self.spi,
            RegisterBank::I2c => &mut self.i2c,
        };
        match slot {
            Some(map) => Ok(map),
            None => {
                let map = PhysMap::new(bank.base(), bank.window_len()).map_err(|source| {
                    BusError::Map {
                        bank,
                        address: bank.base(),
                        source,
                    }
                })?;
                debug!(
                    "mapped {bank} registers at {:#010x} (size {:#x})",
                    bank.base(),
                    bank.window_len()
                );
                Ok(slot.insert(map))
            }
        }
    }

    fn checked(bank: RegisterBank, offset: u32) -> std::result::Result<usize, BusError> {
        if offset as usize + 4 > bank.window_len() {
            return Err(BusError::OutOfWindow { bank, offset });
        }
        Ok(offset as usize)
    }
}

impl RegisterBus for MmioBus {
    fn read(&mut self, bank: RegisterBank, offset: u32) -> Result<u32> {
        let offset = Self::checked(bank, offset)?;
        let value = self.window(bank)?.read32(offset);
        trace!(
            "{bank} [{:#010x}] -> {value:#010x}",
            bank.base() + offset as u64
        );
        Ok(value)
    }

    fn write(&mut self, bank: RegisterBank, offset: u32, value: u32) -> Result<()> {
        let offset = Self::checked(bank, offset)?;
        self.window(bank)?.write32(offset, value);
        trace!(
            "{bank} [{:#010x}] <- {value:#010x}",
            bank.base() + offset as u64
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_checked_against_the_window() {
        let mut bus = MmioBus::new();
        // Fails before any mapping is attempted
        assert!(matches!(
            bus.read(RegisterBank::Ports, 0x1000),
            Err(mzgpio_core::Error::Bus(BusError::OutOfWindow { .. }))
        ));
    }

    #[test]
    #[ignore] // Requires root and /dev/mem access
    fn read_a_port_register() {
        let mut bus = MmioBus::new();
        bus.read(RegisterBank::Ports, 0x20).unwrap();
    }
}
