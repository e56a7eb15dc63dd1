//! mzgpio - GPIO control for PIC32MZ boards running Linux
//!
//! Inspired by the gpio utility from wiringPi. Pins can be named by their
//! PIC32 name (`ra9`), their Broadcom-style index (`p22`), or their
//! position on the 40-pin extension header (`j15`); the three schemes are
//! reconciled by `mzgpio-core`. Register access goes through `/dev/mem`,
//! so everything except the pure table reports (`pins`, `modes`) needs
//! root.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use mzgpio_core::PortController;
use mzgpio_mmio::MmioBus;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let debug = if cli.debug > 0 {
        cli.debug
    } else {
        std::env::var("GPIO_DEBUG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };
    let default_filter = match debug {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    log::debug!("debug level {debug}");

    // Pure table reports, no hardware access needed
    match cli.command {
        Commands::Pins => {
            commands::report::run_pins();
            return Ok(());
        }
        Commands::Modes => {
            commands::report::run_modes();
            return Ok(());
        }
        _ => {}
    }

    if unsafe { libc::geteuid() } != 0 {
        eprintln!("mzgpio: must be root to access /dev/mem");
        std::process::exit(1);
    }

    let mut gpio = PortController::new(MmioBus::new());

    match cli.command {
        Commands::Mode { pin, mode } => commands::control::run_mode(&mut gpio, &pin, &mode),
        Commands::Read { pin } => commands::control::run_read(&mut gpio, &pin),
        Commands::Write { pin, value } => commands::control::run_write(&mut gpio, &pin, &value),
        Commands::Toggle { pin } => commands::control::run_toggle(&mut gpio, &pin),
        Commands::Blink { pin } => commands::control::run_blink(&mut gpio, &pin),
        Commands::Readall => commands::report::run_readall(&mut gpio),
        Commands::Pins | Commands::Modes => unreachable!(),
    }
}
