//! The 65x64 machine: CPU + memory + host, stepped as a unit.

use nozotech_65x64::{Cpu65x64, Host, Memory};

use crate::config::MachineConfig;
use crate::console::Console;

/// A complete 65x64 machine.
///
/// Owns the CPU, the RAM+ROM memory and the host that services WDM. The
/// host type is generic so tests can capture program output instead of
/// writing it to the terminal.
pub struct Machine<H: Host = Console> {
    cpu: Cpu65x64,
    memory: Memory,
    host: H,
    trace: bool,
}

impl Machine<Console> {
    /// Build a machine wired to the process console.
    #[must_use]
    pub fn new(config: MachineConfig) -> Self {
        Self::with_host(config, Console)
    }
}

impl<H: Host> Machine<H> {
    /// Build a machine around a caller-supplied host.
    pub fn with_host(config: MachineConfig, host: H) -> Self {
        let memory = Memory::new(config.mem_mask, config.ram_size, config.rom);
        Self {
            cpu: Cpu65x64::new(),
            memory,
            host,
            trace: config.trace,
        }
    }

    /// Reset the CPU; PC comes from the reset vector in ROM.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.memory, self.trace);
    }

    /// Execute one instruction (or one stalled WAI/STP iteration).
    pub fn step(&mut self) {
        self.cpu.step(&mut self.memory, &mut self.host);
    }

    /// Step until the program stops itself or the budget runs out.
    /// Returns the number of steps executed.
    pub fn run(&mut self, max_steps: u64) -> u64 {
        let mut steps = 0;
        while steps < max_steps && !self.cpu.is_stopped() {
            self.step();
            steps += 1;
        }
        steps
    }

    /// True once the program has executed WDM 0xFF.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.cpu.is_stopped()
    }

    /// Approximate cycles executed.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    /// The CPU, for inspection between steps.
    pub fn cpu(&self) -> &Cpu65x64 {
        &self.cpu
    }

    /// Mutable CPU access (forcing PC, signalling interrupts).
    pub fn cpu_mut(&mut self) -> &mut Cpu65x64 {
        &mut self.cpu
    }

    /// The memory, for inspection.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable memory access (loading programs into RAM).
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// The host, for inspection (captured output in tests).
    pub fn host(&self) -> &H {
        &self.host
    }
}
