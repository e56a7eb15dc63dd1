//! Single-pin commands: mode, read, write, toggle, blink.

use std::thread;
use std::time::Duration;

use mzgpio_core::{Error, Mode, Pin, PortController, Pull, RegisterBus};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// `mzgpio mode <pin> <mode>`
///
/// The mode argument also accepts pull settings (`up`, `down`, `tri`/`off`),
/// wiringPi heritage.
pub fn run_mode<B: RegisterBus>(gpio: &mut PortController<B>, pin: &str, mode: &str) -> CommandResult {
    let pin = Pin::from_name(pin)?;

    match mode.to_ascii_lowercase().as_str() {
        "in" | "input" => gpio.set_mode(pin, Mode::Input)?,
        "out" | "output" => gpio.set_mode(pin, Mode::Output)?,
        "up" => gpio.set_pull(pin, Pull::Up)?,
        "down" => gpio.set_pull(pin, Pull::Down)?,
        "tri" | "off" => gpio.set_pull(pin, Pull::Off)?,
        other => {
            let mode = Mode::from_name(other).ok_or_else(|| Error::UnknownMode(other.into()))?;
            gpio.set_mode(pin, mode)?;
        }
    }
    Ok(())
}

/// `mzgpio read <pin>`
pub fn run_read<B: RegisterBus>(gpio: &mut PortController<B>, pin: &str) -> CommandResult {
    let pin = Pin::from_name(pin)?;
    let value = gpio.read(pin)?;
    println!("{}", u8::from(value));
    Ok(())
}

/// `mzgpio write <pin> <value>`
pub fn run_write<B: RegisterBus>(gpio: &mut PortController<B>, pin: &str, value: &str) -> CommandResult {
    let pin = Pin::from_name(pin)?;

    let level = match value.to_ascii_lowercase().as_str() {
        "up" | "on" => true,
        "down" | "off" => false,
        other => other.parse::<i64>().unwrap_or(0) != 0,
    };

    gpio.write(pin, level)?;
    Ok(())
}

/// `mzgpio toggle <pin>`
pub fn run_toggle<B: RegisterBus>(gpio: &mut PortController<B>, pin: &str) -> CommandResult {
    let pin = Pin::from_name(pin)?;
    gpio.toggle(pin)?;
    Ok(())
}

/// `mzgpio blink <pin>`
pub fn run_blink<B: RegisterBus>(gpio: &mut PortController<B>, pin: &str) -> CommandResult {
    let pin = Pin::from_name(pin)?;
    gpio.set_mode(pin, Mode::Output)?;
    loop {
        gpio.toggle(pin)?;
        thread::sleep(Duration::from_millis(500));
    }
}
