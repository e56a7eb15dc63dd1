//! Pin modes and pull resistor settings.
//!
//! [`Mode`] is the closed, chip-defined set of functions a pin can carry:
//! plain digital I/O, analog input, and every named peripheral signal the
//! PIC32MZ can route through Peripheral Pin Select. The enum order matters:
//! everything after [`Mode::Analog`] up to [`Mode::C1Rx`] is an
//! output-capable peripheral signal, everything from [`Mode::C1Rx`] on is
//! input-capable. Reports iterate these two ranges separately.

use core::fmt;

/// A function a pin can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Plain digital output
    Output,
    /// Plain digital input
    Input,
    /// Analog input
    Analog,

    // Peripheral outputs
    C1Out,
    C1Tx,
    C2Out,
    C2Tx,
    Oc1,
    Oc2,
    Oc3,
    Oc4,
    Oc5,
    Oc6,
    Oc7,
    Oc8,
    Oc9,
    Refclko1,
    Refclko3,
    Refclko4,
    Sdo1,
    Sdo2,
    Sdo3,
    Sdo4,
    Sdo5,
    Sdo6,
    Ss1O,
    Ss2O,
    Ss3O,
    Ss4O,
    Ss5O,
    Ss6O,
    U1Rts,
    U1Tx,
    U2Rts,
    U2Tx,
    U3Rts,
    U3Tx,
    U4Rts,
    U4Tx,
    U5Rts,
    U5Tx,
    U6Rts,
    U6Tx,

    // Peripheral inputs
    C1Rx,
    C2Rx,
    Ic1,
    Ic2,
    Ic3,
    Ic4,
    Ic5,
    Ic6,
    Ic7,
    Ic8,
    Ic9,
    Int1,
    Int2,
    Int3,
    Int4,
    Ocfa,
    Refclki1,
    Refclki3,
    Refclki4,
    Sdi1,
    Sdi2,
    Sdi3,
    Sdi4,
    Sdi5,
    Sdi6,
    Ss1I,
    Ss2I,
    Ss3I,
    Ss4I,
    Ss5I,
    Ss6I,
    T2Ck,
    T3Ck,
    T4Ck,
    T5Ck,
    T6Ck,
    T7Ck,
    T8Ck,
    T9Ck,
    U1Cts,
    U1Rx,
    U2Cts,
    U2Rx,
    U3Cts,
    U3Rx,
    U4Cts,
    U4Rx,
    U5Cts,
    U5Rx,
    U6Cts,
    U6Rx,
    Sck1,
    Sck2,
    Sck3,
    Sck4,
    Sck5,
    Sck6,
    Scl1,
    Scl2,
    Scl3,
    Scl4,
    Scl5,
    Scl6,
    Sda1,
    Sda2,
    Sda3,
    Sda4,
    Sda5,
    Sda6,
}

impl Mode {
    /// Every mode, in enum order.
    pub const ALL: [Mode; 112] = [
        Mode::Output,
        Mode::Input,
        Mode::Analog,
        Mode::C1Out,
        Mode::C1Tx,
        Mode::C2Out,
        Mode::C2Tx,
        Mode::Oc1,
        Mode::Oc2,
        Mode::Oc3,
        Mode::Oc4,
        Mode::Oc5,
        Mode::Oc6,
        Mode::Oc7,
        Mode::Oc8,
        Mode::Oc9,
        Mode::Refclko1,
        Mode::Refclko3,
        Mode::Refclko4,
        Mode::Sdo1,
        Mode::Sdo2,
        Mode::Sdo3,
        Mode::Sdo4,
        Mode::Sdo5,
        Mode::Sdo6,
        Mode::Ss1O,
        Mode::Ss2O,
        Mode::Ss3O,
        Mode::Ss4O,
        Mode::Ss5O,
        Mode::Ss6O,
        Mode::U1Rts,
        Mode::U1Tx,
        Mode::U2Rts,
        Mode::U2Tx,
        Mode::U3Rts,
        Mode::U3Tx,
        Mode::U4Rts,
        Mode::U4Tx,
        Mode::U5Rts,
        Mode::U5Tx,
        Mode::U6Rts,
        Mode::U6Tx,
        Mode::C1Rx,
        Mode::C2Rx,
        Mode::Ic1,
        Mode::Ic2,
        Mode::Ic3,
        Mode::Ic4,
        Mode::Ic5,
        Mode::Ic6,
        Mode::Ic7,
        Mode::Ic8,
        Mode::Ic9,
        Mode::Int1,
        Mode::Int2,
        Mode::Int3,
        Mode::Int4,
        Mode::Ocfa,
        Mode::Refclki1,
        Mode::Refclki3,
        Mode::Refclki4,
        Mode::Sdi1,
        Mode::Sdi2,
        Mode::Sdi3,
        Mode::Sdi4,
        Mode::Sdi5,
        Mode::Sdi6,
        Mode::Ss1I,
        Mode::Ss2I,
        Mode::Ss3I,
        Mode::Ss4I,
        Mode::Ss5I,
        Mode::Ss6I,
        Mode::T2Ck,
        Mode::T3Ck,
        Mode::T4Ck,
        Mode::T5Ck,
        Mode::T6Ck,
        Mode::T7Ck,
        Mode::T8Ck,
        Mode::T9Ck,
        Mode::U1Cts,
        Mode::U1Rx,
        Mode::U2Cts,
        Mode::U2Rx,
        Mode::U3Cts,
        Mode::U3Rx,
        Mode::U4Cts,
        Mode::U4Rx,
        Mode::U5Cts,
        Mode::U5Rx,
        Mode::U6Cts,
        Mode::U6Rx,
        Mode::Sck1,
        Mode::Sck2,
        Mode::Sck3,
        Mode::Sck4,
        Mode::Sck5,
        Mode::Sck6,
        Mode::Scl1,
        Mode::Scl2,
        Mode::Scl3,
        Mode::Scl4,
        Mode::Scl5,
        Mode::Scl6,
        Mode::Sda1,
        Mode::Sda2,
        Mode::Sda3,
        Mode::Sda4,
        Mode::Sda5,
        Mode::Sda6,
    ];

    /// Datasheet name, as printed in reports.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Output => "Out",
            Mode::Input => "In",
            Mode::Analog => "Analog",
            Mode::C1Out => "C1OUT",
            Mode::C1Tx => "C1TX",
            Mode::C2Out => "C2OUT",
            Mode::C2Tx => "C2TX",
            Mode::Oc1 => "OC1",
            Mode::Oc2 => "OC2",
            Mode::Oc3 => "OC3",
            Mode::Oc4 => "OC4",
            Mode::Oc5 => "OC5",
            Mode::Oc6 => "OC6",
            Mode::Oc7 => "OC7",
            Mode::Oc8 => "OC8",
            Mode::Oc9 => "OC9",
            Mode::Refclko1 => "REFCLKO1",
            Mode::Refclko3 => "REFCLKO3",
            Mode::Refclko4 => "REFCLKO4",
            Mode::Sdo1 => "SDO1",
            Mode::Sdo2 => "SDO2",
            Mode::Sdo3 => "SDO3",
            Mode::Sdo4 => "SDO4",
            Mode::Sdo5 => "SDO5",
            Mode::Sdo6 => "SDO6",
            Mode::Ss1O => "SS1O",
            Mode::Ss2O => "SS2O",
            Mode::Ss3O => "SS3O",
            Mode::Ss4O => "SS4O",
            Mode::Ss5O => "SS5O",
            Mode::Ss6O => "SS6O",
            Mode::U1Rts => "U1RTS",
            Mode::U1Tx => "U1TX",
            Mode::U2Rts => "U2RTS",
            Mode::U2Tx => "U2TX",
            Mode::U3Rts => "U3RTS",
            Mode::U3Tx => "U3TX",
            Mode::U4Rts => "U4RTS",
            Mode::U4Tx => "U4TX",
            Mode::U5Rts => "U5RTS",
            Mode::U5Tx => "U5TX",
            Mode::U6Rts => "U6RTS",
            Mode::U6Tx => "U6TX",
            Mode::C1Rx => "C1RX",
            Mode::C2Rx => "C2RX",
            Mode::Ic1 => "IC1",
            Mode::Ic2 => "IC2",
            Mode::Ic3 => "IC3",
            Mode::Ic4 => "IC4",
            Mode::Ic5 => "IC5",
            Mode::Ic6 => "IC6",
            Mode::Ic7 => "IC7",
            Mode::Ic8 => "IC8",
            Mode::Ic9 => "IC9",
            Mode::Int1 => "INT1",
            Mode::Int2 => "INT2",
            Mode::Int3 => "INT3",
            Mode::Int4 => "INT4",
            Mode::Ocfa => "OCFA",
            Mode::Refclki1 => "REFCLKI1",
            Mode::Refclki3 => "REFCLKI3",
            Mode::Refclki4 => "REFCLKI4",
            Mode::Sdi1 => "SDI1",
            Mode::Sdi2 => "SDI2",
            Mode::Sdi3 => "SDI3",
            Mode::Sdi4 => "SDI4",
            Mode::Sdi5 => "SDI5",
            Mode::Sdi6 => "SDI6",
            Mode::Ss1I => "SS1I",
            Mode::Ss2I => "SS2I",
            Mode::Ss3I => "SS3I",
            Mode::Ss4I => "SS4I",
            Mode::Ss5I => "SS5I",
            Mode::Ss6I => "SS6I",
            Mode::T2Ck => "T2CK",
            Mode::T3Ck => "T3CK",
            Mode::T4Ck => "T4CK",
            Mode::T5Ck => "T5CK",
            Mode::T6Ck => "T6CK",
            Mode::T7Ck => "T7CK",
            Mode::T8Ck => "T8CK",
            Mode::T9Ck => "T9CK",
            Mode::U1Cts => "U1CTS",
            Mode::U1Rx => "U1RX",
            Mode::U2Cts => "U2CTS",
            Mode::U2Rx => "U2RX",
            Mode::U3Cts => "U3CTS",
            Mode::U3Rx => "U3RX",
            Mode::U4Cts => "U4CTS",
            Mode::U4Rx => "U4RX",
            Mode::U5Cts => "U5CTS",
            Mode::U5Rx => "U5RX",
            Mode::U6Cts => "U6CTS",
            Mode::U6Rx => "U6RX",
            Mode::Sck1 => "SCK1",
            Mode::Sck2 => "SCK2",
            Mode::Sck3 => "SCK3",
            Mode::Sck4 => "SCK4",
            Mode::Sck5 => "SCK5",
            Mode::Sck6 => "SCK6",
            Mode::Scl1 => "SCL1",
            Mode::Scl2 => "SCL2",
            Mode::Scl3 => "SCL3",
            Mode::Scl4 => "SCL4",
            Mode::Scl5 => "SCL5",
            Mode::Scl6 => "SCL6",
            Mode::Sda1 => "SDA1",
            Mode::Sda2 => "SDA2",
            Mode::Sda3 => "SDA3",
            Mode::Sda4 => "SDA4",
            Mode::Sda5 => "SDA5",
            Mode::Sda6 => "SDA6",
        }
    }

    /// Case-insensitive lookup by datasheet name.
    pub fn from_name(name: &str) -> Option<Mode> {
        Mode::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// Peripheral signals a pin can drive (first report line of `pins`).
    pub fn peripheral_outputs() -> &'static [Mode] {
        &Mode::ALL[3..43]
    }

    /// Peripheral signals a pin can listen to (second report line of `pins`).
    pub fn peripheral_inputs() -> &'static [Mode] {
        &Mode::ALL[43..]
    }

    /// True for peripheral signals in the output range.
    pub fn is_peripheral_output(self) -> bool {
        self > Mode::Analog && self < Mode::C1Rx
    }

    /// True for peripheral signals in the input range.
    pub fn is_peripheral_input(self) -> bool {
        self >= Mode::C1Rx
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pull up/down resistor settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    /// No pull up/down
    Off,
    /// Pull up
    Up,
    /// Pull down
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trip() {
        for &mode in Mode::ALL.iter() {
            assert_eq!(Mode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Mode::from_name("u3tx"), Some(Mode::U3Tx));
        assert_eq!(Mode::from_name("U3TX"), Some(Mode::U3Tx));
        assert_eq!(Mode::from_name("analog"), Some(Mode::Analog));
        assert_eq!(Mode::from_name("bogus"), None);
    }

    #[test]
    fn partitions_cover_the_enum() {
        assert_eq!(Mode::peripheral_outputs().len(), 40);
        assert_eq!(Mode::peripheral_inputs().len(), 69);
        assert!(Mode::peripheral_outputs()
            .iter()
            .all(|m| m.is_peripheral_output()));
        assert!(Mode::peripheral_inputs()
            .iter()
            .all(|m| m.is_peripheral_input()));
        assert!(!Mode::Output.is_peripheral_output());
        assert!(!Mode::Analog.is_peripheral_input());
    }
}
