//! Pin identity: ports, descriptors, and the three naming schemes.
//!
//! Every usable pin can be named three ways: by its chip-native label
//! (`RA9`), by its position on the 40-pin extension header (`j15`), or by
//! the Broadcom-style index inherited from the Raspberry Pi pinout (`p22`).
//! The tables below are board data from the datasheet and schematic; the
//! cross-scheme consistency they promise is checked by the tests at the
//! bottom of this file.

use core::fmt;

use crate::error::{Error, Result};

/// A GPIO port of the PIC32MZ. Port I does not exist on this family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    J,
    K,
}

impl Port {
    /// Offset of this port's register block within the ports window.
    pub const fn window_offset(self) -> u32 {
        match self {
            Port::A => 0x000,
            Port::B => 0x100,
            Port::C => 0x200,
            Port::D => 0x300,
            Port::E => 0x400,
            Port::F => 0x500,
            Port::G => 0x600,
            Port::H => 0x700,
            Port::J => 0x800,
            Port::K => 0x900,
        }
    }

    /// Port letter as it appears in native pin names.
    pub const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
            Port::E => 'E',
            Port::F => 'F',
            Port::G => 'G',
            Port::H => 'H',
            Port::J => 'J',
            Port::K => 'K',
        }
    }
}

/// One physical chip pin: a port and a bit within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pin {
    port: Port,
    bit: u8,
}

impl Pin {
    /// Build a descriptor. Bits run 0..=15 within a port.
    pub const fn new(port: Port, bit: u8) -> Pin {
        assert!(bit < 16);
        Pin { port, bit }
    }

    /// The port this pin belongs to.
    pub const fn port(self) -> Port {
        self.port
    }

    /// Bit number within the port.
    pub const fn bit(self) -> u8 {
        self.bit
    }

    /// Single-bit mask within the port registers.
    pub const fn mask(self) -> u32 {
        1 << self.bit
    }

    /// Canonical integer code, usable as a lookup key.
    ///
    /// Combines the port's register offset with the bit mask; distinct
    /// (port, bit) pairs never collide.
    pub const fn code(self) -> u32 {
        (self.port.window_offset() << 16) | self.mask()
    }

    /// Resolve a pin name in any of the three schemes.
    ///
    /// Names are case-insensitive and classified by their leading character:
    /// `r` for chip-native names, `j` for physical header positions, `p` for
    /// Broadcom-style indices. Broadcom `p1` is reserved on this chip and
    /// fails with its own diagnostic.
    pub fn from_name(name: &str) -> Result<Pin> {
        let unknown = || Error::UnknownPinName(name.to_string());

        match name.as_bytes().first() {
            Some(b'r') | Some(b'R') => NATIVE
                .iter()
                .find(|(native, _)| native.eq_ignore_ascii_case(name))
                .map(|&(_, pin)| pin)
                .ok_or_else(unknown),
            Some(b'j') | Some(b'J') => digit_suffix(name)
                .and_then(phys_to_pin)
                .ok_or_else(unknown),
            Some(b'p') | Some(b'P') => {
                let index = digit_suffix(name).ok_or_else(unknown)?;
                if index == 1 {
                    return Err(Error::UnsupportedPinName(name.to_string()));
                }
                bcm_to_phys(index)
                    .and_then(phys_to_pin)
                    .ok_or_else(unknown)
            }
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}{}", self.port.letter(), self.bit)
    }
}

const fn pin(port: Port, bit: u8) -> Option<Pin> {
    Some(Pin::new(port, bit))
}

// Numeric suffix of a header or Broadcom name. Bare digits only; parse()
// alone would admit a sign, so "j+8" must not resolve.
fn digit_suffix(name: &str) -> Option<u8> {
    let digits = &name[1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Native label of each position on the extension header, power and ground
/// pins included. Index 0 is unused.
const PHYS_NAME: [&str; 41] = [
    "??", // 0
    "+3V3", "+5V", // 1, 2
    "RF2", "+5V", // 3, 4
    "RF8", "Gnd", // 5, 6
    "RE4", "RC3", // 7, 8
    "Gnd", "RE8", // 9, 10
    "RE7", "RH3", // 11, 12
    "RB8", "Gnd", // 13, 14
    "RA9", "RB4", // 15, 16
    "+3V3", "RH4", // 17, 18
    "RG8", "Gnd", // 19, 20
    "RD7", "RH6", // 21, 22
    "RG6", "RD0", // 23, 24
    "Gnd", "RD14", // 25, 26
    "RB2", "---", // 27, 28
    "RK1", "Gnd", // 29, 30
    "RK2", "RJ2", // 31, 32
    "RG9", "Gnd", // 33, 34
    "RB0", "RB15", // 35, 36
    "RH7", "RH12", // 37, 38
    "Gnd", "RD15", // 39, 40
];

/// Broadcom index for each header position. Power, ground, and the
/// unconnected j28 have no Broadcom name.
const PHYS_TO_BCM: [Option<u8>; 41] = [
    None, // 0
    None,
    None, // j1,  j2
    Some(2),
    None, // j3,  j4
    Some(3),
    None, // j5,  j6
    Some(4),
    Some(14), // j7,  j8
    None,
    Some(15), // j9,  j10
    Some(17),
    Some(18), // j11, j12
    Some(27),
    None, // j13, j14
    Some(22),
    Some(23), // j15, j16
    None,
    Some(24), // j17, j18
    Some(10),
    None, // j19, j20
    Some(9),
    Some(25), // j21, j22
    Some(11),
    Some(8), // j23, j24
    None,
    Some(7), // j25, j26
    Some(0),
    None, // j27, j28 = p1 not connected
    Some(5),
    None, // j29, j30
    Some(6),
    Some(12), // j31, j32
    Some(13),
    None, // j33, j34
    Some(19),
    Some(16), // j35, j36
    Some(26),
    Some(20), // j37, j38
    None,
    Some(21), // j39, j40
];

/// Header position for each Broadcom index. p1 and p28..p31 do not exist
/// on this board.
const BCM_TO_PHYS: [Option<u8>; 32] = [
    Some(27), // p0
    None,     // p1
    Some(3),  // p2
    Some(5),  // p3
    Some(7),  // p4
    Some(29), // p5
    Some(31), // p6
    Some(26), // p7
    Some(24), // p8
    Some(21), // p9
    Some(19), // p10
    Some(23), // p11
    Some(32), // p12
    Some(33), // p13
    Some(8),  // p14
    Some(10), // p15
    Some(36), // p16
    Some(11), // p17
    Some(12), // p18
    Some(35), // p19
    Some(38), // p20
    Some(40), // p21
    Some(15), // p22
    Some(16), // p23
    Some(18), // p24
    Some(22), // p25
    Some(37), // p26
    Some(13), // p27
    None,     // p28
    None,     // p29
    None,     // p30
    None,     // p31
];

/// Pin descriptor for each GPIO-capable header position.
const PHYS_PIN: [Option<Pin>; 41] = [
    None, // 0
    None,
    None, // j1,  j2
    pin(Port::F, 2),
    None, // j3,  j4
    pin(Port::F, 8),
    None, // j5,  j6
    pin(Port::E, 4),
    pin(Port::C, 3), // j7,  j8
    None,
    pin(Port::E, 8), // j9,  j10
    pin(Port::E, 7),
    pin(Port::H, 3), // j11, j12
    pin(Port::B, 8),
    None, // j13, j14
    pin(Port::A, 9),
    pin(Port::B, 4), // j15, j16
    None,
    pin(Port::H, 4), // j17, j18
    pin(Port::G, 8),
    None, // j19, j20
    pin(Port::D, 7),
    pin(Port::H, 6), // j21, j22
    pin(Port::G, 6),
    pin(Port::D, 0), // j23, j24
    None,
    pin(Port::D, 14), // j25, j26
    pin(Port::B, 2),
    None, // j27, j28
    pin(Port::K, 1),
    None, // j29, j30
    pin(Port::K, 2),
    pin(Port::J, 2), // j31, j32
    pin(Port::G, 9),
    None, // j33, j34
    pin(Port::B, 0),
    pin(Port::B, 15), // j35, j36
    pin(Port::H, 7),
    pin(Port::H, 12), // j37, j38
    None,
    pin(Port::D, 15), // j39, j40
];

/// Chip-native names of the header's GPIO pins.
const NATIVE: [(&str, Pin); 27] = [
    ("RA9", Pin::new(Port::A, 9)),
    ("RB0", Pin::new(Port::B, 0)),
    ("RB2", Pin::new(Port::B, 2)),
    ("RB4", Pin::new(Port::B, 4)),
    ("RB8", Pin::new(Port::B, 8)),
    ("RB15", Pin::new(Port::B, 15)),
    ("RC3", Pin::new(Port::C, 3)),
    ("RD0", Pin::new(Port::D, 0)),
    ("RD7", Pin::new(Port::D, 7)),
    ("RD14", Pin::new(Port::D, 14)),
    ("RD15", Pin::new(Port::D, 15)),
    ("RE4", Pin::new(Port::E, 4)),
    ("RE7", Pin::new(Port::E, 7)),
    ("RE8", Pin::new(Port::E, 8)),
    ("RF2", Pin::new(Port::F, 2)),
    ("RF8", Pin::new(Port::F, 8)),
    ("RG6", Pin::new(Port::G, 6)),
    ("RG8", Pin::new(Port::G, 8)),
    ("RG9", Pin::new(Port::G, 9)),
    ("RH3", Pin::new(Port::H, 3)),
    ("RH4", Pin::new(Port::H, 4)),
    ("RH6", Pin::new(Port::H, 6)),
    ("RH7", Pin::new(Port::H, 7)),
    ("RH12", Pin::new(Port::H, 12)),
    ("RJ2", Pin::new(Port::J, 2)),
    ("RK1", Pin::new(Port::K, 1)),
    ("RK2", Pin::new(Port::K, 2)),
];

/// Native label of a header position, `"??"` when out of range.
pub fn phys_name(phys: u8) -> &'static str {
    if (1..=40).contains(&phys) {
        PHYS_NAME[phys as usize]
    } else {
        PHYS_NAME[0]
    }
}

/// Broadcom index of a header position, if it has one.
pub fn phys_to_bcm(phys: u8) -> Option<u8> {
    if (1..=40).contains(&phys) {
        PHYS_TO_BCM[phys as usize]
    } else {
        None
    }
}

/// Header position of a Broadcom index, if it has one.
pub fn bcm_to_phys(bcm: u8) -> Option<u8> {
    if bcm < 32 {
        BCM_TO_PHYS[bcm as usize]
    } else {
        None
    }
}

/// Pin descriptor of a header position. Power, ground, and unwired slots
/// have none.
pub fn phys_to_pin(phys: u8) -> Option<Pin> {
    if (1..=40).contains(&phys) {
        PHYS_PIN[phys as usize]
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        let expect = Pin::new(Port::A, 9);
        for name in ["ra9", "RA9", "Ra9", "rA9"] {
            assert_eq!(Pin::from_name(name).unwrap(), expect);
        }
    }

    #[test]
    fn three_schemes_agree_on_j8() {
        let by_phys = Pin::from_name("j8").unwrap();
        let by_native = Pin::from_name("RC3").unwrap();
        let bcm = phys_to_bcm(8).unwrap();
        let by_bcm = Pin::from_name(&format!("p{bcm}")).unwrap();
        assert_eq!(by_phys, Pin::new(Port::C, 3));
        assert_eq!(by_phys, by_native);
        assert_eq!(by_phys, by_bcm);
    }

    #[test]
    fn cross_scheme_consistency_for_all_header_slots() {
        for phys in 1..=40u8 {
            let Some(pin) = phys_to_pin(phys) else {
                // Power, ground, or unwired: must have no Broadcom index
                // either, except j28 which is the reserved p1 slot.
                continue;
            };
            assert_eq!(Pin::from_name(&format!("j{phys}")).unwrap(), pin);
            assert_eq!(Pin::from_name(phys_name(phys)).unwrap(), pin);
            let bcm = phys_to_bcm(phys).expect("GPIO slot without Broadcom index");
            assert_eq!(Pin::from_name(&format!("p{bcm}")).unwrap(), pin);
            assert_eq!(bcm_to_phys(bcm), Some(phys));
        }
    }

    #[test]
    fn p1_gets_a_dedicated_diagnostic() {
        for name in ["p1", "P1"] {
            match Pin::from_name(name) {
                Err(Error::UnsupportedPinName(n)) => assert_eq!(n, name),
                other => panic!("expected UnsupportedPinName, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["", "x3", "ra99", "j2", "j41", "j0", "p28", "p99", "rq1"] {
            assert!(
                matches!(Pin::from_name(name), Err(Error::UnknownPinName(_))),
                "{name} should not resolve"
            );
        }
    }

    #[test]
    fn signed_number_suffixes_are_rejected() {
        for name in ["j+8", "p+22", "j-8", "p-0", "j", "p"] {
            assert!(
                matches!(Pin::from_name(name), Err(Error::UnknownPinName(_))),
                "{name} should not resolve"
            );
        }
    }

    #[test]
    fn index_lookups_are_bounds_checked() {
        assert_eq!(phys_to_bcm(0), None);
        assert_eq!(phys_to_bcm(41), None);
        assert_eq!(bcm_to_phys(32), None);
        assert_eq!(phys_to_pin(0), None);
        assert_eq!(phys_to_pin(41), None);
        assert_eq!(phys_name(0), "??");
    }

    #[test]
    fn bcm_and_phys_maps_are_mutual_inverses() {
        for bcm in 0..32u8 {
            if let Some(phys) = bcm_to_phys(bcm) {
                assert_eq!(phys_to_bcm(phys), Some(bcm));
            }
        }
        for phys in 1..=40u8 {
            if let Some(bcm) = phys_to_bcm(phys) {
                assert_eq!(bcm_to_phys(bcm), Some(phys));
            }
        }
    }

    #[test]
    fn pin_codes_are_injective() {
        let mut codes: Vec<u32> = PHYS_PIN.iter().flatten().map(|p| p.code()).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(codes.len(), before);
    }
}
