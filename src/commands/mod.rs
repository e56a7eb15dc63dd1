//! CLI command implementations
//!
//! `control` holds the single-pin commands (mode/read/write/toggle/blink);
//! `report` holds the tabular reports (readall/modes/pins). The reports in
//! `run_pins` and `run_modes` are pure table walks and never touch
//! hardware, so they work without root.

pub mod control;
pub mod report;
