//! NOZOTECH 65x64 machine emulator.
//!
//! Wires the 65x64 CPU core to the default RAM+ROM memory and a console
//! host, and drives execution step by step until the program stops itself
//! with WDM 0xFF. The machine has no display or sound; its only host
//! surface is the WDM console bridge and the optional execution trace.

mod config;
mod console;
mod machine;

pub use config::MachineConfig;
pub use console::Console;
pub use machine::Machine;
