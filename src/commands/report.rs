//! Tabular reports: readall, modes, pins.

use mzgpio_core::pin::{bcm_to_phys, phys_name, phys_to_bcm, phys_to_pin};
use mzgpio_core::{pps, Mode, PortController, RegisterBus};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// `mzgpio readall` - status of every pin on the extension connector.
pub fn run_readall<B: RegisterBus>(gpio: &mut PortController<B>) -> CommandResult {
    println!(" +-----+------+--------+---+------------+---+--------+------+-----+");
    println!(" | BCM | Name | Mode   | V |  Physical  | V | Mode   | Name | BCM |");
    println!(" +-----+------+--------+---+-----++-----+---+--------+------+-----+");

    for phys in (1..=40u8).step_by(2) {
        // Left side of the connector
        match (phys_to_bcm(phys), phys_to_pin(phys)) {
            (Some(bcm), Some(pin)) => {
                let mode = gpio.mode(pin)?;
                print!(" | p{bcm:<2}");
                print!(" | {:<4}", phys_name(phys));
                print!(" | {:<6}", mode.name());
                if mode == Mode::Analog {
                    print!(" | -");
                } else {
                    print!(" | {}", u8::from(gpio.read(pin)?));
                }
            }
            _ => print!(" |     | {:<4} |        |  ", phys_name(phys)),
        }

        // Pin numbers
        print!(" | j{phys:<2} || j{:<2}", phys + 1);

        // Right side, mirrored
        match (phys_to_bcm(phys + 1), phys_to_pin(phys + 1)) {
            (Some(bcm), Some(pin)) => {
                let mode = gpio.mode(pin)?;
                if mode == Mode::Analog {
                    print!(" | -");
                } else {
                    print!(" | {}", u8::from(gpio.read(pin)?));
                }
                print!(" | {:<6}", mode.name());
                print!(" | {:<4}", phys_name(phys + 1));
                print!(" | p{bcm:<2}");
            }
            _ => print!(" |   |        | {:<4} |    ", phys_name(phys + 1)),
        }
        println!(" |");
    }

    println!(" +-----+------+--------+---+-----++-----+---+--------+------+-----+");
    println!(" | BCM | Name | Mode   | V |  Physical  | V | Mode   | Name | BCM |");
    println!(" +-----+------+--------+---+------------+---+--------+------+-----+");
    Ok(())
}

/// `mzgpio modes` - for every peripheral mode, the pins that can carry it.
pub fn run_modes() {
    println!(" Mode     Available Pins");

    for &mode in Mode::peripheral_outputs()
        .iter()
        .chain(Mode::peripheral_inputs())
    {
        print!(" {:<8}", mode.name());

        for phys in 1..=40u8 {
            let Some(bcm) = phys_to_bcm(phys) else {
                continue;
            };
            let Some(pin) = phys_to_pin(phys) else {
                continue;
            };
            if pps::has_mapping(pin, mode) {
                print!(" p{bcm}");
            }
        }
        println!();
    }
}

/// `mzgpio pins` - for every pin, the peripheral modes it can carry.
///
/// The second line of each entry would list input modes; input routing is
/// not decoded, so only modes reachable through the output groups and the
/// fixed SPI/I2C pairings appear.
pub fn run_pins() {
    println!(" Pin Phys Name Available Modes");

    for bcm in 0..32u8 {
        let Some(phys) = bcm_to_phys(bcm) else {
            continue;
        };
        let Some(pin) = phys_to_pin(phys) else {
            continue;
        };

        // First line: output modes
        let mut printed = false;
        for &mode in Mode::peripheral_outputs() {
            if pps::has_mapping(pin, mode) {
                if !printed {
                    printed = true;
                    print!(" p{bcm:<2} j{phys:<2}  {:<4}", phys_name(phys));
                }
                print!(" {}", mode.name());
            }
        }
        if printed {
            // Second line: input modes
            print!("\n              ");
            for &mode in Mode::peripheral_inputs() {
                if pps::has_mapping(pin, mode) {
                    print!(" {}", mode.name());
                }
            }
            println!();
        }
    }
}
