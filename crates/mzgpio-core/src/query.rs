//! Live pin queries over an injected register bus.
//!
//! [`PortController`] owns a [`RegisterBus`] and implements every operation
//! that needs hardware state: reading a pin's current mode, driving it,
//! and decoding its Peripheral Pin Select assignment. The bus is a trait so
//! tests can script register content without `/dev/mem`.

use core::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::mode::{Mode, Pull};
use crate::pin::Pin;
use crate::pps;

/// The physical register windows of the chip this tool touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterBank {
    /// Peripheral pin select (RPxR selector registers)
    Pps,
    /// Per-port I/O registers (ANSEL/TRIS/PORT/LAT/CNPU/CNPD)
    Ports,
    /// SPI control registers (SPIxCON)
    Spi,
    /// I2C control registers (I2CxCON)
    I2c,
}

impl RegisterBank {
    /// Physical base address of the window.
    pub const fn base(self) -> u64 {
        match self {
            RegisterBank::Pps => 0x1f80_0000,
            RegisterBank::Ports => 0x1f86_0000,
            RegisterBank::Spi => 0x1f82_1000,
            RegisterBank::I2c => 0x1f82_0000,
        }
    }

    /// Window length in bytes.
    pub const fn window_len(self) -> usize {
        match self {
            // The selector registers sit at 0x1400..0x16ff above the SFR base
            RegisterBank::Pps => 0x2000,
            RegisterBank::Ports => 0x1000,
            RegisterBank::Spi => 0x1000,
            RegisterBank::I2c => 0x1000,
        }
    }

    /// Short name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            RegisterBank::Pps => "PPS",
            RegisterBank::Ports => "port",
            RegisterBank::Spi => "SPI",
            RegisterBank::I2c => "I2C",
        }
    }
}

impl fmt::Display for RegisterBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw 32-bit register access, one call per register.
///
/// Implementations may establish each bank's mapping lazily on first
/// access; methods take `&mut self`, so single ownership makes that
/// initialization race-free. Shared multi-threaded use needs an external
/// once-guard around the owner.
pub trait RegisterBus {
    /// Read a 32-bit register at `offset` within `bank`.
    fn read(&mut self, bank: RegisterBank, offset: u32) -> Result<u32>;

    /// Write a 32-bit register at `offset` within `bank`.
    fn write(&mut self, bank: RegisterBank, offset: u32, value: u32) -> Result<()>;
}

// Per-port register block layout. Every register has write-only CLR, SET,
// and INV views at +4, +8, and +12.
const ANSEL: u32 = 0x00;
const TRIS: u32 = 0x10;
const PORT: u32 = 0x20;
const LAT: u32 = 0x30;
const CNPU: u32 = 0x50;
const CNPD: u32 = 0x60;
const CLR: u32 = 0x04;
const SET: u32 = 0x08;
const INV: u32 = 0x0c;

/// ON bit of the SPIxCON and I2CxCON control registers.
const PERIPHERAL_ON: u32 = 0x0000_8000;

/// Query engine for pin state, generic over the register bus.
pub struct PortController<B> {
    bus: B,
}

impl<B: RegisterBus> PortController<B> {
    /// Wrap a register bus.
    pub fn new(bus: B) -> Self {
        PortController { bus }
    }

    /// Take the bus back out.
    pub fn into_bus(self) -> B {
        self.bus
    }

    fn port_bit(&mut self, pin: Pin, reg: u32) -> Result<bool> {
        let value = self
            .bus
            .read(RegisterBank::Ports, pin.port().window_offset() + reg)?;
        Ok(value & pin.mask() != 0)
    }

    fn port_write(&mut self, pin: Pin, reg: u32) -> Result<()> {
        self.bus
            .write(RegisterBank::Ports, pin.port().window_offset() + reg, pin.mask())
    }

    /// Current output-side PPS assignment of a pin.
    ///
    /// Pins without a selector register are unrouted and return `None`
    /// without touching the bus.
    pub fn output_mapping(&mut self, pin: Pin) -> Result<Option<Mode>> {
        let Some((group, reg)) = pps::output_select(pin) else {
            return Ok(None);
        };
        let value = self.bus.read(RegisterBank::Pps, reg)?;
        debug!("{pin}: selector [{reg:#06x}] -> {value:#010x}");
        Ok(group.decode(value))
    }

    /// Current input-side PPS assignment of a pin.
    ///
    /// Input routing is not decoded; every pin reads as no connect. The
    /// input selector registers exist in hardware, but no decode tables
    /// for them are modeled here.
    pub fn input_mapping(&mut self, _pin: Pin) -> Result<Option<Mode>> {
        Ok(None)
    }

    /// SPI clock function carried by a pin, if its SPI instance is enabled.
    ///
    /// Pins not on the fixed SPI clock list return `None` with no register
    /// access.
    pub fn spi_function(&mut self, pin: Pin) -> Result<Option<Mode>> {
        self.peripheral_function(RegisterBank::Spi, pin, pps::spi_clock(pin))
    }

    /// I2C clock or data function carried by a pin, if its I2C instance is
    /// enabled.
    pub fn i2c_function(&mut self, pin: Pin) -> Result<Option<Mode>> {
        self.peripheral_function(RegisterBank::I2c, pin, pps::i2c_pin(pin))
    }

    // SPI and I2C enablement are encoded identically: a fixed pin/instance
    // pair gated by the control register ON bit. One path serves both banks.
    fn peripheral_function(
        &mut self,
        bank: RegisterBank,
        pin: Pin,
        record: Option<(u32, Mode)>,
    ) -> Result<Option<Mode>> {
        let Some((control, mode)) = record else {
            return Ok(None);
        };
        let value = self.bus.read(bank, control)?;
        debug!("{pin}: {bank} control [{control:#06x}] -> {value:#010x}");
        Ok((value & PERIPHERAL_ON != 0).then_some(mode))
    }

    /// Current mode of a pin, as shown in the `readall` report.
    ///
    /// Analog wins over everything, then a live peripheral assignment,
    /// then the direction bit.
    pub fn mode(&mut self, pin: Pin) -> Result<Mode> {
        if self.port_bit(pin, ANSEL)? {
            return Ok(Mode::Analog);
        }
        if let Some(mode) = self.output_mapping(pin)? {
            return Ok(mode);
        }
        if let Some(mode) = self.spi_function(pin)? {
            return Ok(mode);
        }
        if let Some(mode) = self.i2c_function(pin)? {
            return Ok(mode);
        }
        Ok(if self.port_bit(pin, TRIS)? {
            Mode::Input
        } else {
            Mode::Output
        })
    }

    /// Set a pin's direction or route a peripheral output to it.
    ///
    /// Peripheral input modes are rejected: input routing is not
    /// implemented (see [`Self::input_mapping`]).
    pub fn set_mode(&mut self, pin: Pin, mode: Mode) -> Result<()> {
        match mode {
            Mode::Output => {
                self.port_write(pin, ANSEL + CLR)?;
                self.port_write(pin, TRIS + CLR)
            }
            Mode::Input => {
                self.port_write(pin, ANSEL + CLR)?;
                self.port_write(pin, TRIS + SET)
            }
            Mode::Analog => {
                self.port_write(pin, ANSEL + SET)?;
                self.port_write(pin, TRIS + SET)
            }
            mode if mode.is_peripheral_output() => {
                let not_supported = || Error::ModeNotSupported { pin, mode };
                let (group, reg) = pps::output_select(pin).ok_or_else(not_supported)?;
                let nibble = group
                    .table()
                    .iter()
                    .position(|&entry| entry == Some(mode))
                    .ok_or_else(not_supported)?;
                // Peripheral outputs need the analog function off
                self.port_write(pin, ANSEL + CLR)?;
                self.bus.write(RegisterBank::Pps, reg, nibble as u32)
            }
            mode => Err(Error::ModeNotSupported { pin, mode }),
        }
    }

    /// Current pull resistor setting of a pin.
    pub fn pull(&mut self, pin: Pin) -> Result<Pull> {
        if self.port_bit(pin, CNPU)? {
            Ok(Pull::Up)
        } else if self.port_bit(pin, CNPD)? {
            Ok(Pull::Down)
        } else {
            Ok(Pull::Off)
        }
    }

    /// Set the pull resistors of a pin.
    pub fn set_pull(&mut self, pin: Pin, pull: Pull) -> Result<()> {
        match pull {
            Pull::Off => {
                self.port_write(pin, CNPU + CLR)?;
                self.port_write(pin, CNPD + CLR)
            }
            Pull::Up => {
                self.port_write(pin, CNPD + CLR)?;
                self.port_write(pin, CNPU + SET)
            }
            Pull::Down => {
                self.port_write(pin, CNPU + CLR)?;
                self.port_write(pin, CNPD + SET)
            }
        }
    }

    /// Read the input value of a pin.
    pub fn read(&mut self, pin: Pin) -> Result<bool> {
        self.port_bit(pin, PORT)
    }

    /// Drive the output latch of a pin.
    pub fn write(&mut self, pin: Pin, level: bool) -> Result<()> {
        self.port_write(pin, LAT + if level { SET } else { CLR })
    }

    /// Invert the output latch of a pin.
    pub fn toggle(&mut self, pin: Pin) -> Result<()> {
        self.port_write(pin, LAT + INV)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::{phys_to_pin, Port};
    use std::collections::HashMap;

    /// Scripted register bus: preloaded content, recorded traffic.
    #[derive(Default)]
    struct FakeBus {
        regs: HashMap<(RegisterBank, u32), u32>,
        reads: Vec<(RegisterBank, u32)>,
        writes: Vec<(RegisterBank, u32, u32)>,
    }

    impl FakeBus {
        fn with(regs: &[(RegisterBank, u32, u32)]) -> Self {
            let mut bus = FakeBus::default();
            for &(bank, offset, value) in regs {
                bus.regs.insert((bank, offset), value);
            }
            bus
        }
    }

    impl RegisterBus for FakeBus {
        fn read(&mut self, bank: RegisterBank, offset: u32) -> Result<u32> {
            self.reads.push((bank, offset));
            Ok(self.regs.get(&(bank, offset)).copied().unwrap_or(0))
        }

        fn write(&mut self, bank: RegisterBank, offset: u32, value: u32) -> Result<()> {
            self.writes.push((bank, offset, value));
            // Port registers sit at 16-byte strides with write-only CLR,
            // SET, and INV views at +4/+8/+12; fold those into the base
            // register so readback behaves like hardware.
            if bank == RegisterBank::Ports {
                let entry = self.regs.entry((bank, offset & !0xf)).or_insert(0);
                match offset & 0xf {
                    0x4 => *entry &= !value,
                    0x8 => *entry |= value,
                    0xc => *entry ^= value,
                    _ => *entry = value,
                }
            } else {
                self.regs.insert((bank, offset), value);
            }
            Ok(())
        }
    }

    const RPD2R: u32 = 0x15c8;
    const SPI1CON: u32 = 0x0000;
    const I2C1CON: u32 = 0x0000;

    #[test]
    fn output_mapping_decodes_the_selector_nibble() {
        let bus = FakeBus::with(&[(RegisterBank::Pps, RPD2R, 1)]);
        let mut gpio = PortController::new(bus);
        let pin = Pin::new(Port::D, 2);
        assert_eq!(gpio.output_mapping(pin).unwrap(), Some(Mode::U3Tx));
    }

    #[test]
    fn unrouted_pin_has_no_output_mapping_and_no_bus_traffic() {
        let mut gpio = PortController::new(FakeBus::default());
        // RA9 has no RPxR selector
        let pin = Pin::new(Port::A, 9);
        assert_eq!(gpio.output_mapping(pin).unwrap(), None);
        assert!(gpio.into_bus().reads.is_empty());
    }

    #[test]
    fn spi_function_reads_the_on_bit() {
        let bus = FakeBus::with(&[(RegisterBank::Spi, SPI1CON, PERIPHERAL_ON)]);
        let mut gpio = PortController::new(bus);
        let sck1 = Pin::new(Port::D, 1);
        assert_eq!(gpio.spi_function(sck1).unwrap(), Some(Mode::Sck1));

        let mut gpio = PortController::new(FakeBus::default());
        assert_eq!(gpio.spi_function(sck1).unwrap(), None);
    }

    #[test]
    fn non_spi_pin_skips_the_register_read() {
        let mut gpio = PortController::new(FakeBus::default());
        let pin = Pin::new(Port::C, 3);
        assert_eq!(gpio.spi_function(pin).unwrap(), None);
        assert!(gpio.into_bus().reads.is_empty());
    }

    #[test]
    fn i2c_clock_and_data_share_the_enable_bit() {
        let bus = FakeBus::with(&[(RegisterBank::I2c, I2C1CON, PERIPHERAL_ON)]);
        let mut gpio = PortController::new(bus);
        let scl1 = Pin::new(Port::A, 14);
        let sda1 = Pin::new(Port::A, 15);
        assert_eq!(gpio.i2c_function(scl1).unwrap(), Some(Mode::Scl1));
        assert_eq!(gpio.i2c_function(sda1).unwrap(), Some(Mode::Sda1));
    }

    #[test]
    fn input_mapping_is_always_no_connect() {
        let mut gpio = PortController::new(FakeBus::default());
        for phys in 1..=40u8 {
            if let Some(pin) = phys_to_pin(phys) {
                assert_eq!(gpio.input_mapping(pin).unwrap(), None);
            }
        }
        assert!(gpio.into_bus().reads.is_empty());
    }

    #[test]
    fn analog_wins_over_direction_and_mapping() {
        let pin = Pin::new(Port::B, 2);
        let ansel = Port::B.window_offset() + ANSEL;
        let tris = Port::B.window_offset() + TRIS;
        let bus = FakeBus::with(&[
            (RegisterBank::Ports, ansel, pin.mask()),
            (RegisterBank::Ports, tris, pin.mask()),
        ]);
        let mut gpio = PortController::new(bus);
        assert_eq!(gpio.mode(pin).unwrap(), Mode::Analog);
    }

    #[test]
    fn mode_falls_back_to_the_direction_bit() {
        let pin = Pin::new(Port::A, 9);
        let tris = Port::A.window_offset() + TRIS;

        let bus = FakeBus::with(&[(RegisterBank::Ports, tris, pin.mask())]);
        assert_eq!(PortController::new(bus).mode(pin).unwrap(), Mode::Input);

        let bus = FakeBus::default();
        assert_eq!(PortController::new(bus).mode(pin).unwrap(), Mode::Output);
    }

    #[test]
    fn mode_reports_a_live_peripheral_assignment() {
        let pin = Pin::new(Port::D, 2);
        let bus = FakeBus::with(&[(RegisterBank::Pps, RPD2R, 5)]);
        assert_eq!(PortController::new(bus).mode(pin).unwrap(), Mode::Sdo1);
    }

    #[test]
    fn set_mode_output_clears_analog_and_direction() {
        let pin = Pin::new(Port::C, 3);
        let mut gpio = PortController::new(FakeBus::default());
        gpio.set_mode(pin, Mode::Output).unwrap();
        let base = Port::C.window_offset();
        assert_eq!(
            gpio.into_bus().writes,
            vec![
                (RegisterBank::Ports, base + ANSEL + CLR, pin.mask()),
                (RegisterBank::Ports, base + TRIS + CLR, pin.mask()),
            ]
        );
    }

    #[test]
    fn set_mode_writes_the_nibble_that_decodes_back() {
        let pin = Pin::new(Port::D, 2);
        let mut gpio = PortController::new(FakeBus::default());
        gpio.set_mode(pin, Mode::U3Tx).unwrap();
        assert_eq!(gpio.output_mapping(pin).unwrap(), Some(Mode::U3Tx));
        let bus = gpio.into_bus();
        assert!(bus.writes.contains(&(RegisterBank::Pps, RPD2R, 1)));
    }

    #[test]
    fn set_mode_rejects_a_function_the_group_lacks() {
        // RD2 is group 1, which has no U1TX entry
        let pin = Pin::new(Port::D, 2);
        let mut gpio = PortController::new(FakeBus::default());
        assert!(matches!(
            gpio.set_mode(pin, Mode::U1Tx),
            Err(Error::ModeNotSupported { .. })
        ));
    }

    #[test]
    fn set_mode_rejects_peripheral_inputs() {
        let pin = Pin::new(Port::D, 2);
        let mut gpio = PortController::new(FakeBus::default());
        assert!(matches!(
            gpio.set_mode(pin, Mode::U1Rx),
            Err(Error::ModeNotSupported { .. })
        ));
    }

    #[test]
    fn pull_setters_touch_the_expected_registers() {
        let pin = Pin::new(Port::K, 1);
        let base = Port::K.window_offset();
        let mut gpio = PortController::new(FakeBus::default());
        gpio.set_pull(pin, Pull::Up).unwrap();
        assert_eq!(
            gpio.into_bus().writes,
            vec![
                (RegisterBank::Ports, base + CNPD + CLR, pin.mask()),
                (RegisterBank::Ports, base + CNPU + SET, pin.mask()),
            ]
        );

        let mut gpio = PortController::new(FakeBus::default());
        gpio.set_pull(pin, Pull::Off).unwrap();
        assert_eq!(
            gpio.into_bus().writes,
            vec![
                (RegisterBank::Ports, base + CNPU + CLR, pin.mask()),
                (RegisterBank::Ports, base + CNPD + CLR, pin.mask()),
            ]
        );
    }

    #[test]
    fn pull_reads_back_what_was_set() {
        let pin = Pin::new(Port::K, 1);
        let mut gpio = PortController::new(FakeBus::default());
        gpio.set_pull(pin, Pull::Down).unwrap();
        assert_eq!(gpio.pull(pin).unwrap(), Pull::Down);
        gpio.set_pull(pin, Pull::Off).unwrap();
        assert_eq!(gpio.pull(pin).unwrap(), Pull::Off);
    }

    #[test]
    fn write_and_toggle_use_the_latch_views() {
        let pin = Pin::new(Port::H, 12);
        let base = Port::H.window_offset();
        let mut gpio = PortController::new(FakeBus::default());
        gpio.write(pin, true).unwrap();
        gpio.write(pin, false).unwrap();
        gpio.toggle(pin).unwrap();
        assert_eq!(
            gpio.into_bus().writes,
            vec![
                (RegisterBank::Ports, base + LAT + SET, pin.mask()),
                (RegisterBank::Ports, base + LAT + CLR, pin.mask()),
                (RegisterBank::Ports, base + LAT + INV, pin.mask()),
            ]
        );
    }

    #[test]
    fn latch_views_fold_into_the_latch_register() {
        let pin = Pin::new(Port::H, 12);
        let lat = Port::H.window_offset() + LAT;
        let mut gpio = PortController::new(FakeBus::default());
        gpio.write(pin, true).unwrap();
        gpio.toggle(pin).unwrap();
        gpio.toggle(pin).unwrap();
        let bus = gpio.into_bus();
        assert_eq!(
            bus.regs.get(&(RegisterBank::Ports, lat)).copied(),
            Some(pin.mask())
        );
    }

    #[test]
    fn read_samples_the_port_register() {
        let pin = Pin::new(Port::B, 15);
        let port = Port::B.window_offset() + PORT;
        let bus = FakeBus::with(&[(RegisterBank::Ports, port, pin.mask())]);
        let mut gpio = PortController::new(bus);
        assert!(gpio.read(pin).unwrap());
        assert!(!gpio.read(Pin::new(Port::B, 0)).unwrap());
    }
}
