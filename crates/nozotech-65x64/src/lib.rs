//! NOZOTECH 65x64 CPU core.
//!
//! The 65x64 is a 64-bit widening of the WDC 65C816: the register file grows
//! to 64 bits (qword) and the address space becomes a flat 64-bit space,
//! while the 6502/65C816 compatibility machinery survives intact: the M and
//! X narrow-mode status bits, the emulation bit `e`, BCD decimal mode, the
//! page-one stack, and the software interrupt vectors.
//!
//! Execution is instruction-level: `step()` fetches one opcode, runs its
//! addressing mode (which consumes operand bytes and yields a 64-bit
//! effective address), then runs the operation. The full architectural state
//! is inspectable between steps, and an approximate cycle counter accumulates
//! as a side effect.
//!
//! Memory is reached through the [`Bus`] trait. The default RAM+ROM
//! implementation is [`Memory`]; a host may substitute its own bus (and
//! override any of the composite little-endian accessors) without the core
//! noticing. Host-visible I/O happens solely through the WDM escape opcode,
//! serviced by the [`Host`] trait.

mod addressing;
mod arith;
mod branches;
mod bus;
mod cpu;
mod flags;
mod host;
mod loadstore;
mod logic;
mod memory;
mod registers;
mod shifts;
mod stack;
mod system;
mod trace;
mod transfer;

pub use bus::Bus;
pub use cpu::{
    BRK_VECTOR_EMULATION, BRK_VECTOR_NATIVE, COP_VECTOR_EMULATION, COP_VECTOR_NATIVE, Cpu65x64,
    RESET_VECTOR,
};
pub use flags::{C, D, I, M, N, Status, V, X, Z};
pub use host::{Host, NullHost};
pub use memory::Memory;
pub use registers::Registers;
