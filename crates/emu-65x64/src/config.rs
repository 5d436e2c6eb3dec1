//! Machine configuration.

/// Configuration for constructing a [`Machine`](crate::Machine).
///
/// The address space is `[0, mem_mask]`; RAM fills `[0, ram_size)` and the
/// ROM image sits at `ram_size`. The default is a small 64 KiB machine:
/// 56 KiB RAM with an 8 KiB ROM on top, which puts the masked reset vector
/// (`0x3FFF_FFF8 & 0xFFFF = 0xFFF8`) in the last qword of the ROM image.
pub struct MachineConfig {
    /// Address mask applied to every byte access.
    pub mem_mask: u64,
    /// Size of the writable region.
    pub ram_size: usize,
    /// ROM image, mapped from `ram_size` upward.
    pub rom: Vec<u8>,
    /// Print a trace line per step.
    pub trace: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            mem_mask: 0xFFFF,
            ram_size: 0xE000,
            rom: Vec::new(),
            trace: false,
        }
    }
}
