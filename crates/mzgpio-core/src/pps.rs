//! Peripheral Pin Select decode tables.
//!
//! Output-capable pins are split by the hardware into four multiplexer
//! groups; each group shares one 4-bit decode table mapping the pin's RPxR
//! selector nibble to a named function. Nibble 0 and datasheet-reserved
//! values decode to `None` ("no connect") — the two are indistinguishable
//! at this layer, mirroring the hardware.
//!
//! SPI and I2C clock/data pins are encoded differently: fixed pin/peripheral
//! pairs gated by the ON bit of the instance's control register, not a
//! selectable multiplexer field. Their records live here too so capability
//! queries and the live decoders consult the same data.
//!
//! All tables are datasheet constants; nothing here touches registers.

use crate::mode::Mode;
use crate::pin::{Pin, Port};

/// Output-capable PPS multiplexer groups. A remappable pin belongs to
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputGroup {
    Group1,
    Group2,
    Group3,
    Group4,
}

const GROUP1: [Option<Mode>; 16] = [
    None,                 // 0: no connect
    Some(Mode::U3Tx),     // 1
    Some(Mode::U4Rts),    // 2
    None,                 // 3: reserved
    None,                 // 4: reserved
    Some(Mode::Sdo1),     // 5
    Some(Mode::Sdo2),     // 6
    Some(Mode::Sdo3),     // 7
    None,                 // 8: reserved
    Some(Mode::Sdo5),     // 9
    Some(Mode::Ss6O),     // 10
    Some(Mode::Oc3),      // 11
    Some(Mode::Oc6),      // 12
    Some(Mode::Refclko4), // 13
    Some(Mode::C2Out),    // 14
    Some(Mode::C1Tx),     // 15
];

const GROUP2: [Option<Mode>; 16] = [
    None,                 // 0: no connect
    Some(Mode::U1Tx),     // 1
    Some(Mode::U2Rts),    // 2
    Some(Mode::U5Tx),     // 3
    Some(Mode::U6Rts),    // 4
    Some(Mode::Sdo1),     // 5
    Some(Mode::Sdo2),     // 6
    Some(Mode::Sdo3),     // 7
    Some(Mode::Sdo4),     // 8
    Some(Mode::Sdo5),     // 9
    None,                 // 10: reserved
    Some(Mode::Oc4),      // 11
    Some(Mode::Oc7),      // 12
    None,                 // 13: reserved
    None,                 // 14: reserved
    Some(Mode::Refclko1), // 15
];

const GROUP3: [Option<Mode>; 16] = [
    None,                 // 0: no connect
    Some(Mode::U3Rts),    // 1
    Some(Mode::U4Tx),     // 2
    None,                 // 3: reserved
    Some(Mode::U6Tx),     // 4
    Some(Mode::Ss1O),     // 5
    None,                 // 6: reserved
    Some(Mode::Ss3O),     // 7
    Some(Mode::Ss4O),     // 8
    Some(Mode::Ss5O),     // 9
    Some(Mode::Sdo6),     // 10
    Some(Mode::Oc5),      // 11
    Some(Mode::Oc8),      // 12
    None,                 // 13: reserved
    Some(Mode::C1Out),    // 14
    Some(Mode::Refclko3), // 15
];

const GROUP4: [Option<Mode>; 16] = [
    None,              // 0: no connect
    Some(Mode::U1Rts), // 1
    Some(Mode::U2Tx),  // 2
    Some(Mode::U5Rts), // 3
    Some(Mode::U6Tx),  // 4
    None,              // 5: reserved
    Some(Mode::Ss2O),  // 6
    None,              // 7: reserved
    Some(Mode::Sdo4),  // 8
    None,              // 9: reserved
    Some(Mode::Sdo6),  // 10
    Some(Mode::Oc2),   // 11
    Some(Mode::Oc1),   // 12
    Some(Mode::Oc9),   // 13
    None,              // 14: reserved
    Some(Mode::C2Tx),  // 15
];

impl OutputGroup {
    /// The group's full 16-entry decode table.
    pub fn table(self) -> &'static [Option<Mode>; 16] {
        match self {
            OutputGroup::Group1 => &GROUP1,
            OutputGroup::Group2 => &GROUP2,
            OutputGroup::Group3 => &GROUP3,
            OutputGroup::Group4 => &GROUP4,
        }
    }

    /// Decode a selector register value. Total over the 4-bit domain;
    /// reserved values and 0 yield `None`.
    pub fn decode(self, value: u32) -> Option<Mode> {
        self.table()[(value & 0x0f) as usize]
    }
}

/// RPxR selector register offset (within the PPS window) and decode group
/// for every output-remappable pin on this package.
const OUTPUT_SELECT: [(Pin, OutputGroup, u32); 45] = [
    (Pin::new(Port::D, 2), OutputGroup::Group1, 0x15c8),  // RPD2R
    (Pin::new(Port::G, 8), OutputGroup::Group1, 0x16a0),  // RPG8R
    (Pin::new(Port::F, 4), OutputGroup::Group1, 0x1650),  // RPF4R
    (Pin::new(Port::F, 1), OutputGroup::Group1, 0x1644),  // RPF1R
    (Pin::new(Port::B, 9), OutputGroup::Group1, 0x1564),  // RPB9R
    (Pin::new(Port::B, 10), OutputGroup::Group1, 0x1568), // RPB10R
    (Pin::new(Port::B, 5), OutputGroup::Group1, 0x1554),  // RPB5R
    (Pin::new(Port::C, 1), OutputGroup::Group1, 0x1584),  // RPC1R
    (Pin::new(Port::D, 14), OutputGroup::Group1, 0x15f8), // RPD14R
    (Pin::new(Port::G, 1), OutputGroup::Group1, 0x1684),  // RPG1R
    (Pin::new(Port::A, 14), OutputGroup::Group1, 0x1538), // RPA14R
    (Pin::new(Port::D, 6), OutputGroup::Group1, 0x15d8),  // RPD6R
    (Pin::new(Port::D, 3), OutputGroup::Group2, 0x15cc),  // RPD3R
    (Pin::new(Port::G, 7), OutputGroup::Group2, 0x169c),  // RPG7R
    (Pin::new(Port::F, 5), OutputGroup::Group2, 0x1654),  // RPF5R
    (Pin::new(Port::D, 11), OutputGroup::Group2, 0x15ec), // RPD11R
    (Pin::new(Port::F, 0), OutputGroup::Group2, 0x1640),  // RPF0R
    (Pin::new(Port::B, 1), OutputGroup::Group2, 0x1544),  // RPB1R
    (Pin::new(Port::E, 5), OutputGroup::Group2, 0x1614),  // RPE5R
    (Pin::new(Port::B, 3), OutputGroup::Group2, 0x154c),  // RPB3R
    (Pin::new(Port::C, 4), OutputGroup::Group2, 0x1590),  // RPC4R
    (Pin::new(Port::G, 0), OutputGroup::Group2, 0x1680),  // RPG0R
    (Pin::new(Port::A, 15), OutputGroup::Group2, 0x153c), // RPA15R
    (Pin::new(Port::D, 7), OutputGroup::Group2, 0x15dc),  // RPD7R
    (Pin::new(Port::D, 9), OutputGroup::Group3, 0x15e4),  // RPD9R
    (Pin::new(Port::B, 8), OutputGroup::Group3, 0x1560),  // RPB8R
    (Pin::new(Port::B, 15), OutputGroup::Group3, 0x157c), // RPB15R
    (Pin::new(Port::D, 4), OutputGroup::Group3, 0x15d0),  // RPD4R
    (Pin::new(Port::B, 0), OutputGroup::Group3, 0x1540),  // RPB0R
    (Pin::new(Port::E, 3), OutputGroup::Group3, 0x160c),  // RPE3R
    (Pin::new(Port::B, 7), OutputGroup::Group3, 0x155c),  // RPB7R
    (Pin::new(Port::F, 12), OutputGroup::Group3, 0x1670), // RPF12R
    (Pin::new(Port::D, 12), OutputGroup::Group3, 0x15f0), // RPD12R
    (Pin::new(Port::F, 8), OutputGroup::Group3, 0x1660),  // RPF8R
    (Pin::new(Port::C, 3), OutputGroup::Group3, 0x158c),  // RPC3R
    (Pin::new(Port::E, 9), OutputGroup::Group3, 0x1624),  // RPE9R
    (Pin::new(Port::G, 9), OutputGroup::Group4, 0x16a4),  // RPG9R
    (Pin::new(Port::D, 0), OutputGroup::Group4, 0x15c0),  // RPD0R
    (Pin::new(Port::B, 6), OutputGroup::Group4, 0x1558),  // RPB6R
    (Pin::new(Port::D, 5), OutputGroup::Group4, 0x15d4),  // RPD5R
    (Pin::new(Port::B, 2), OutputGroup::Group4, 0x1548),  // RPB2R
    (Pin::new(Port::F, 3), OutputGroup::Group4, 0x164c),  // RPF3R
    (Pin::new(Port::C, 2), OutputGroup::Group4, 0x1588),  // RPC2R
    (Pin::new(Port::E, 8), OutputGroup::Group4, 0x1620),  // RPE8R
    (Pin::new(Port::F, 2), OutputGroup::Group4, 0x1648),  // RPF2R
];

/// Fixed SPI clock pins: control register offset (within the SPI window)
/// and the clock function each carries when the peripheral is enabled.
const SPI_CLOCK: [(Pin, u32, Mode); 6] = [
    (Pin::new(Port::D, 1), 0x0000, Mode::Sck1),  // SPI1CON
    (Pin::new(Port::G, 6), 0x0200, Mode::Sck2),  // SPI2CON
    (Pin::new(Port::B, 14), 0x0400, Mode::Sck3), // SPI3CON
    (Pin::new(Port::D, 10), 0x0600, Mode::Sck4), // SPI4CON
    (Pin::new(Port::F, 13), 0x0800, Mode::Sck5), // SPI5CON
    (Pin::new(Port::D, 15), 0x0a00, Mode::Sck6), // SPI6CON
];

/// Fixed I2C pins: each instance contributes a clock and a data pin, both
/// gated by the same control register ON bit.
const I2C_PINS: [(Pin, u32, Mode); 10] = [
    (Pin::new(Port::A, 14), 0x0000, Mode::Scl1), // I2C1CON
    (Pin::new(Port::A, 2), 0x0200, Mode::Scl2),  // I2C2CON
    (Pin::new(Port::F, 8), 0x0400, Mode::Scl3),  // I2C3CON
    (Pin::new(Port::G, 8), 0x0600, Mode::Scl4),  // I2C4CON
    (Pin::new(Port::F, 5), 0x0800, Mode::Scl5),  // I2C5CON
    (Pin::new(Port::A, 15), 0x0000, Mode::Sda1), // I2C1CON
    (Pin::new(Port::A, 3), 0x0200, Mode::Sda2),  // I2C2CON
    (Pin::new(Port::F, 2), 0x0400, Mode::Sda3),  // I2C3CON
    (Pin::new(Port::G, 7), 0x0600, Mode::Sda4),  // I2C4CON
    (Pin::new(Port::F, 4), 0x0800, Mode::Sda5),  // I2C5CON
];

/// Decode group and RPxR offset of an output-remappable pin.
pub fn output_select(pin: Pin) -> Option<(OutputGroup, u32)> {
    OUTPUT_SELECT
        .iter()
        .find(|&&(p, _, _)| p == pin)
        .map(|&(_, group, reg)| (group, reg))
}

/// Control register offset and clock function of a fixed SPI clock pin.
pub fn spi_clock(pin: Pin) -> Option<(u32, Mode)> {
    SPI_CLOCK
        .iter()
        .find(|&&(p, _, _)| p == pin)
        .map(|&(_, reg, mode)| (reg, mode))
}

/// Control register offset and function of a fixed I2C clock or data pin.
pub fn i2c_pin(pin: Pin) -> Option<(u32, Mode)> {
    I2C_PINS
        .iter()
        .find(|&&(p, _, _)| p == pin)
        .map(|&(_, reg, mode)| (reg, mode))
}

/// Whether the hardware can route `mode` to `pin` at all.
///
/// Pure table membership over the same tables the live decoders read
/// through, so it stays consistent with
/// [`PortController::output_mapping`](crate::PortController::output_mapping)
/// and the SPI/I2C checks by construction. Performs no register access;
/// the `pins` and `modes` reports run unprivileged.
pub fn has_mapping(pin: Pin, mode: Mode) -> bool {
    if let Some((group, _)) = output_select(pin) {
        if group.table().contains(&Some(mode)) {
            return true;
        }
    }
    spi_clock(pin).is_some_and(|(_, m)| m == mode) || i2c_pin(pin).is_some_and(|(_, m)| m == mode)
}
