//! CLI argument parsing

use clap::{Parser, Subcommand};

const AFTER_HELP: &str = "\
Pins:
    ra9...rk2      PIC32 pin names
    p0...p27       Broadcom pin names
    j3...j40       Physical pins on the 40-pin header
Modes:
    in, input      Input
    out, output    Output
    analog         Analog input
    up             Pull-up resistor (input only)
    down           Pull-down resistor (input only)
    tri, off       No pull-up/down resistor
    U3TX, OC1...   Peripheral output functions (see `mzgpio pins`)";

#[derive(Parser)]
#[command(name = "mzgpio")]
#[command(author, version, about = "GPIO control for PIC32MZ", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Debug verbosity (-d, -dd); the GPIO_DEBUG environment variable is
    /// honored when no flag is given
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set pin direction, pull resistors, or a peripheral output function
    Mode {
        /// Pin name in any scheme
        pin: String,
        /// Mode or pull setting
        mode: String,
    },

    /// Read the input value of a pin
    Read {
        /// Pin name in any scheme
        pin: String,
    },

    /// Write the output value of a pin
    Write {
        /// Pin name in any scheme
        pin: String,
        /// 0/1, on/off, or up/down
        value: String,
    },

    /// Toggle the output value of a pin
    Toggle {
        /// Pin name in any scheme
        pin: String,
    },

    /// Toggle a pin forever at 500 ms intervals
    Blink {
        /// Pin name in any scheme
        pin: String,
    },

    /// Show the state of all pins on the extension connector
    Readall,

    /// For every peripheral mode, show the capable pins
    Modes,

    /// For every pin, show the available peripheral modes
    Pins,
}
