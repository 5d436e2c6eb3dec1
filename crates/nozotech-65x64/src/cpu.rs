//! 65x64 CPU state, reset, and the opcode dispatcher.

use crate::bus::Bus;
use crate::flags::{C, N, Status, V, Z};
use crate::host::Host;
use crate::registers::Registers;

/// The reset vector: PC is loaded as a qword from here.
pub const RESET_VECTOR: u64 = 0x3FFF_FFF8;

/// BRK vector in emulation mode (word).
pub const BRK_VECTOR_EMULATION: u64 = 0xFFFE;

/// BRK vector in native mode (word).
pub const BRK_VECTOR_NATIVE: u64 = 0xFFE6;

/// COP vector in emulation mode (word).
pub const COP_VECTOR_EMULATION: u64 = 0xFFF4;

/// COP vector in native mode (word).
pub const COP_VECTOR_NATIVE: u64 = 0xFFE4;

/// The NOZOTECH 65x64 CPU.
///
/// One `step()` call executes one whole instruction (or one iteration of a
/// stalled WAI/STP). The CPU owns no memory: every access goes through the
/// [`Bus`] passed into `step`, and WDM host services go through the
/// [`Host`].
#[derive(Debug)]
pub struct Cpu65x64 {
    /// Register file.
    pub regs: Registers,

    /// Set once WDM 0xFF executes; the host's cue to stop stepping.
    stopped: bool,

    /// Set by the host when an external interrupt is pending. WAI/STP
    /// consume it and fall through.
    interrupted: bool,

    /// Approximate cycle counter. Monotonic; never authoritative.
    cycles: u64,

    /// Print a trace line per step.
    trace: bool,
}

impl Default for Cpu65x64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu65x64 {
    /// Create a CPU with a zeroed register file.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            stopped: false,
            interrupted: false,
            cycles: 0,
            trace: false,
        }
    }

    /// Apply the reset state and load PC from the reset vector.
    ///
    /// Accumulators, index registers and the bank registers keep their
    /// prior values so state survives a reset for debugging. The emulation
    /// bit is likewise untouched.
    pub fn reset(&mut self, bus: &mut impl Bus, trace: bool) {
        crate::registers::set_low_word(&mut self.regs.sp, 0x0100);
        crate::registers::set_low_byte(&mut self.regs.tp, 0);
        self.regs.ring = 0;
        self.regs.p = Status(0x34);
        self.regs.pc = bus.read_qword(RESET_VECTOR);
        self.stopped = false;
        self.interrupted = false;
        self.trace = trace;
    }

    /// Force the program counter.
    pub fn set_pc(&mut self, address: u64) {
        self.regs.pc = address;
    }

    /// Approximate cycles executed so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// True once a WDM 0xFF has executed.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Signal a pending external interrupt; wakes a stalled WAI/STP.
    pub fn signal_interrupt(&mut self) {
        self.interrupted = true;
    }

    pub(crate) fn add_cycles(&mut self, count: u64) {
        self.cycles += count;
    }

    pub(crate) fn set_stopped(&mut self) {
        self.stopped = true;
    }

    pub(crate) fn take_interrupt(&mut self) -> bool {
        let pending = self.interrupted;
        self.interrupted = false;
        pending
    }

    /// Fetch the opcode byte at PC and advance PC past it.
    ///
    /// The fetch itself charges no cycles; unassigned opcodes therefore
    /// leave the cycle counter untouched.
    fn fetch_opcode(&mut self, bus: &mut impl Bus) -> u8 {
        let opcode = bus.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        opcode
    }

    /// Execute one instruction.
    ///
    /// Fetch, decode, run the addressing mode, run the operation.
    /// Unassigned opcodes are consumed and ignored.
    pub fn step(&mut self, bus: &mut impl Bus, host: &mut impl Host) {
        let pc = self.regs.pc;
        let opcode = self.fetch_opcode(bus);

        let ea = match opcode {
            // ================================================================
            // System and flags
            // ================================================================

            // BRK #nn
            0x00 => {
                let ea = self.addr_immediate_byte();
                self.op_brk(bus);
                ea
            }

            // COP #nn
            0x02 => {
                let ea = self.addr_immediate_byte();
                self.op_cop(bus);
                ea
            }

            // CLC
            0x18 => {
                self.op_clc();
                0
            }

            // SEC
            0x38 => {
                self.op_sec();
                0
            }

            // CLI
            0x58 => {
                self.op_cli();
                0
            }

            // SEI
            0x78 => {
                self.op_sei();
                0
            }

            // CLV
            0xB8 => {
                self.op_clv();
                0
            }

            // CLD
            0xD8 => {
                self.op_cld();
                0
            }

            // SED
            0xF8 => {
                self.op_sed();
                0
            }

            // REP #nn
            0xC2 => {
                let ea = self.addr_immediate_byte();
                self.op_rep(bus, ea);
                ea
            }

            // SEP #nn
            0xE2 => {
                let ea = self.addr_immediate_byte();
                self.op_sep(bus, ea);
                ea
            }

            // WDM #nn - host escape
            0x42 => {
                let ea = self.addr_immediate_byte();
                self.op_wdm(bus, host, ea);
                ea
            }

            // WAI
            0xCB => {
                self.op_wai();
                0
            }

            // STP
            0xDB => {
                self.op_wai();
                0
            }

            // NOP
            0xEA => {
                self.op_nop();
                0
            }

            // XBA
            0xEB => {
                self.op_xba();
                0
            }

            // XCE
            0xFB => {
                self.op_xce();
                0
            }

            // ================================================================
            // ORA
            // ================================================================

            // ORA (d,X)
            0x01 => {
                let ea = self.addr_direct_indexed_indirect_x(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ORA d,S
            0x03 => {
                let ea = self.addr_stack_relative(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ORA d
            0x05 => {
                let ea = self.addr_direct(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ORA #
            0x09 => {
                let ea = self.addr_immediate_m();
                self.op_ora(bus, ea);
                ea
            }

            // ORA a
            0x0D => {
                let ea = self.addr_absolute(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ORA (d),Y
            0x11 => {
                let ea = self.addr_direct_indirect_indexed_y(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ORA (d)
            0x12 => {
                let ea = self.addr_direct_indirect(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ORA (d,S),Y
            0x13 => {
                let ea = self.addr_stack_relative_indirect_y(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ORA d,X
            0x15 => {
                let ea = self.addr_direct_x(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ORA a,Y
            0x19 => {
                let ea = self.addr_absolute_y(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ORA a,X
            0x1D => {
                let ea = self.addr_absolute_x(bus);
                self.op_ora(bus, ea);
                ea
            }

            // ================================================================
            // AND
            // ================================================================

            // AND (d,X)
            0x21 => {
                let ea = self.addr_direct_indexed_indirect_x(bus);
                self.op_and(bus, ea);
                ea
            }

            // AND d,S
            0x23 => {
                let ea = self.addr_stack_relative(bus);
                self.op_and(bus, ea);
                ea
            }

            // AND d
            0x25 => {
                let ea = self.addr_direct(bus);
                self.op_and(bus, ea);
                ea
            }

            // AND #
            0x29 => {
                let ea = self.addr_immediate_m();
                self.op_and(bus, ea);
                ea
            }

            // AND a
            0x2D => {
                let ea = self.addr_absolute(bus);
                self.op_and(bus, ea);
                ea
            }

            // AND (d),Y
            0x31 => {
                let ea = self.addr_direct_indirect_indexed_y(bus);
                self.op_and(bus, ea);
                ea
            }

            // AND (d)
            0x32 => {
                let ea = self.addr_direct_indirect(bus);
                self.op_and(bus, ea);
                ea
            }

            // AND (d,S),Y
            0x33 => {
                let ea = self.addr_stack_relative_indirect_y(bus);
                self.op_and(bus, ea);
                ea
            }

            // AND d,X
            0x35 => {
                let ea = self.addr_direct_x(bus);
                self.op_and(bus, ea);
                ea
            }

            // AND a,Y
            0x39 => {
                let ea = self.addr_absolute_y(bus);
                self.op_and(bus, ea);
                ea
            }

            // AND a,X
            0x3D => {
                let ea = self.addr_absolute_x(bus);
                self.op_and(bus, ea);
                ea
            }

            // ================================================================
            // EOR
            // ================================================================

            // EOR (d,X)
            0x41 => {
                let ea = self.addr_direct_indexed_indirect_x(bus);
                self.op_eor(bus, ea);
                ea
            }

            // EOR d,S
            0x43 => {
                let ea = self.addr_stack_relative(bus);
                self.op_eor(bus, ea);
                ea
            }

            // EOR d
            0x45 => {
                let ea = self.addr_direct(bus);
                self.op_eor(bus, ea);
                ea
            }

            // EOR #
            0x49 => {
                let ea = self.addr_immediate_m();
                self.op_eor(bus, ea);
                ea
            }

            // EOR a
            0x4D => {
                let ea = self.addr_absolute(bus);
                self.op_eor(bus, ea);
                ea
            }

            // EOR (d),Y
            0x51 => {
                let ea = self.addr_direct_indirect_indexed_y(bus);
                self.op_eor(bus, ea);
                ea
            }

            // EOR (d)
            0x52 => {
                let ea = self.addr_direct_indirect(bus);
                self.op_eor(bus, ea);
                ea
            }

            // EOR (d,S),Y
            0x53 => {
                let ea = self.addr_stack_relative_indirect_y(bus);
                self.op_eor(bus, ea);
                ea
            }

            // EOR d,X
            0x55 => {
                let ea = self.addr_direct_x(bus);
                self.op_eor(bus, ea);
                ea
            }

            // EOR a,Y
            0x59 => {
                let ea = self.addr_absolute_y(bus);
                self.op_eor(bus, ea);
                ea
            }

            // EOR a,X
            0x5D => {
                let ea = self.addr_absolute_x(bus);
                self.op_eor(bus, ea);
                ea
            }

            // ================================================================
            // ADC
            // ================================================================

            // ADC (d,X)
            0x61 => {
                let ea = self.addr_direct_indexed_indirect_x(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ADC d,S
            0x63 => {
                let ea = self.addr_stack_relative(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ADC d
            0x65 => {
                let ea = self.addr_direct(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ADC #
            0x69 => {
                let ea = self.addr_immediate_m();
                self.op_adc(bus, ea);
                ea
            }

            // ADC a
            0x6D => {
                let ea = self.addr_absolute(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ADC (d),Y
            0x71 => {
                let ea = self.addr_direct_indirect_indexed_y(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ADC (d)
            0x72 => {
                let ea = self.addr_direct_indirect(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ADC (d,S),Y
            0x73 => {
                let ea = self.addr_stack_relative_indirect_y(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ADC d,X
            0x75 => {
                let ea = self.addr_direct_x(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ADC a,Y
            0x79 => {
                let ea = self.addr_absolute_y(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ADC a,X
            0x7D => {
                let ea = self.addr_absolute_x(bus);
                self.op_adc(bus, ea);
                ea
            }

            // ================================================================
            // SBC
            // ================================================================

            // SBC (d,X)
            0xE1 => {
                let ea = self.addr_direct_indexed_indirect_x(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // SBC d,S
            0xE3 => {
                let ea = self.addr_stack_relative(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // SBC d
            0xE5 => {
                let ea = self.addr_direct(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // SBC #
            0xE9 => {
                let ea = self.addr_immediate_m();
                self.op_sbc(bus, ea);
                ea
            }

            // SBC a
            0xED => {
                let ea = self.addr_absolute(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // SBC (d),Y
            0xF1 => {
                let ea = self.addr_direct_indirect_indexed_y(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // SBC (d)
            0xF2 => {
                let ea = self.addr_direct_indirect(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // SBC (d,S),Y
            0xF3 => {
                let ea = self.addr_stack_relative_indirect_y(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // SBC d,X
            0xF5 => {
                let ea = self.addr_direct_x(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // SBC a,Y
            0xF9 => {
                let ea = self.addr_absolute_y(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // SBC a,X
            0xFD => {
                let ea = self.addr_absolute_x(bus);
                self.op_sbc(bus, ea);
                ea
            }

            // ================================================================
            // CMP / CPX / CPY
            // ================================================================

            // CMP (d,X)
            0xC1 => {
                let ea = self.addr_direct_indexed_indirect_x(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CMP d,S
            0xC3 => {
                let ea = self.addr_stack_relative(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CMP d
            0xC5 => {
                let ea = self.addr_direct(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CMP #
            0xC9 => {
                let ea = self.addr_immediate_m();
                self.op_cmp(bus, ea);
                ea
            }

            // CMP a
            0xCD => {
                let ea = self.addr_absolute(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CMP (d),Y
            0xD1 => {
                let ea = self.addr_direct_indirect_indexed_y(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CMP (d)
            0xD2 => {
                let ea = self.addr_direct_indirect(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CMP (d,S),Y
            0xD3 => {
                let ea = self.addr_stack_relative_indirect_y(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CMP d,X
            0xD5 => {
                let ea = self.addr_direct_x(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CMP a,Y
            0xD9 => {
                let ea = self.addr_absolute_y(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CMP a,X
            0xDD => {
                let ea = self.addr_absolute_x(bus);
                self.op_cmp(bus, ea);
                ea
            }

            // CPY #
            0xC0 => {
                let ea = self.addr_immediate_x();
                self.op_cpy(bus, ea);
                ea
            }

            // CPY d
            0xC4 => {
                let ea = self.addr_direct(bus);
                self.op_cpy(bus, ea);
                ea
            }

            // CPY a
            0xCC => {
                let ea = self.addr_absolute(bus);
                self.op_cpy(bus, ea);
                ea
            }

            // CPX #
            0xE0 => {
                let ea = self.addr_immediate_x();
                self.op_cpx(bus, ea);
                ea
            }

            // CPX d
            0xE4 => {
                let ea = self.addr_direct(bus);
                self.op_cpx(bus, ea);
                ea
            }

            // CPX a
            0xEC => {
                let ea = self.addr_absolute(bus);
                self.op_cpx(bus, ea);
                ea
            }

            // ================================================================
            // Shifts and rotates
            // ================================================================

            // ASL d
            0x06 => {
                let ea = self.addr_direct(bus);
                self.op_asl(bus, ea);
                ea
            }

            // ASL A
            0x0A => {
                self.op_asl_a();
                0
            }

            // ASL a
            0x0E => {
                let ea = self.addr_absolute(bus);
                self.op_asl(bus, ea);
                ea
            }

            // ASL d,X
            0x16 => {
                let ea = self.addr_direct_x(bus);
                self.op_asl(bus, ea);
                ea
            }

            // ASL a,X
            0x1E => {
                let ea = self.addr_absolute_x(bus);
                self.op_asl(bus, ea);
                ea
            }

            // ROL d
            0x26 => {
                let ea = self.addr_direct(bus);
                self.op_rol(bus, ea);
                ea
            }

            // ROL A
            0x2A => {
                self.op_rol_a();
                0
            }

            // ROL a
            0x2E => {
                let ea = self.addr_absolute(bus);
                self.op_rol(bus, ea);
                ea
            }

            // ROL d,X
            0x36 => {
                let ea = self.addr_direct_x(bus);
                self.op_rol(bus, ea);
                ea
            }

            // ROL a,X
            0x3E => {
                let ea = self.addr_absolute_x(bus);
                self.op_rol(bus, ea);
                ea
            }

            // LSR d
            0x46 => {
                let ea = self.addr_direct(bus);
                self.op_lsr(bus, ea);
                ea
            }

            // LSR A
            0x4A => {
                self.op_lsr_a();
                0
            }

            // LSR a
            0x4E => {
                let ea = self.addr_absolute(bus);
                self.op_lsr(bus, ea);
                ea
            }

            // LSR d,X
            0x56 => {
                let ea = self.addr_direct_x(bus);
                self.op_lsr(bus, ea);
                ea
            }

            // LSR a,X
            0x5E => {
                let ea = self.addr_absolute_x(bus);
                self.op_lsr(bus, ea);
                ea
            }

            // ROR d
            0x66 => {
                let ea = self.addr_direct(bus);
                self.op_ror(bus, ea);
                ea
            }

            // ROR A
            0x6A => {
                self.op_ror_a();
                0
            }

            // ROR a
            0x6E => {
                let ea = self.addr_absolute(bus);
                self.op_ror(bus, ea);
                ea
            }

            // ROR d,X
            0x76 => {
                let ea = self.addr_direct_x(bus);
                self.op_ror(bus, ea);
                ea
            }

            // ROR a,X
            0x7E => {
                let ea = self.addr_absolute_x(bus);
                self.op_ror(bus, ea);
                ea
            }

            // ================================================================
            // BIT
            // ================================================================

            // BIT d
            0x24 => {
                let ea = self.addr_direct(bus);
                self.op_bit(bus, ea);
                ea
            }

            // BIT a
            0x2C => {
                let ea = self.addr_absolute(bus);
                self.op_bit(bus, ea);
                ea
            }

            // BIT d,X
            0x34 => {
                let ea = self.addr_direct_x(bus);
                self.op_bit(bus, ea);
                ea
            }

            // BIT a,X
            0x3C => {
                let ea = self.addr_absolute_x(bus);
                self.op_bit(bus, ea);
                ea
            }

            // BIT # - immediate form only sets Z
            0x89 => {
                let ea = self.addr_immediate_m();
                self.op_bit_immediate(bus, ea);
                ea
            }

            // ================================================================
            // INC / DEC
            // ================================================================

            // INC A
            0x1A => {
                self.op_inc_a();
                0
            }

            // DEC A
            0x3A => {
                self.op_dec_a();
                0
            }

            // INC d
            0xE6 => {
                let ea = self.addr_direct(bus);
                self.op_inc(bus, ea);
                ea
            }

            // INC a
            0xEE => {
                let ea = self.addr_absolute(bus);
                self.op_inc(bus, ea);
                ea
            }

            // INC d,X
            0xF6 => {
                let ea = self.addr_direct_x(bus);
                self.op_inc(bus, ea);
                ea
            }

            // INC a,X
            0xFE => {
                let ea = self.addr_absolute_x(bus);
                self.op_inc(bus, ea);
                ea
            }

            // DEC d
            0xC6 => {
                let ea = self.addr_direct(bus);
                self.op_dec(bus, ea);
                ea
            }

            // DEC a
            0xCE => {
                let ea = self.addr_absolute(bus);
                self.op_dec(bus, ea);
                ea
            }

            // DEC d,X
            0xD6 => {
                let ea = self.addr_direct_x(bus);
                self.op_dec(bus, ea);
                ea
            }

            // DEC a,X
            0xDE => {
                let ea = self.addr_absolute_x(bus);
                self.op_dec(bus, ea);
                ea
            }

            // INX
            0xE8 => {
                self.op_inx();
                0
            }

            // DEX
            0xCA => {
                self.op_dex();
                0
            }

            // INY
            0xC8 => {
                self.op_iny();
                0
            }

            // DEY
            0x88 => {
                self.op_dey();
                0
            }

            // ================================================================
            // Branches
            // ================================================================

            // BPL r
            0x10 => {
                let ea = self.addr_relative(bus);
                let taken = !self.regs.p.is_set(N);
                self.op_branch(ea, taken);
                ea
            }

            // BMI r
            0x30 => {
                let ea = self.addr_relative(bus);
                let taken = self.regs.p.is_set(N);
                self.op_branch(ea, taken);
                ea
            }

            // BVC r
            0x50 => {
                let ea = self.addr_relative(bus);
                let taken = !self.regs.p.is_set(V);
                self.op_branch(ea, taken);
                ea
            }

            // BVS r
            0x70 => {
                let ea = self.addr_relative(bus);
                let taken = self.regs.p.is_set(V);
                self.op_branch(ea, taken);
                ea
            }

            // BRA r
            0x80 => {
                let ea = self.addr_relative(bus);
                self.op_branch(ea, true);
                ea
            }

            // BRL rl
            0x82 => {
                let ea = self.addr_long_relative(bus);
                self.op_branch(ea, true);
                ea
            }

            // BCC r
            0x90 => {
                let ea = self.addr_relative(bus);
                let taken = !self.regs.p.is_set(C);
                self.op_branch(ea, taken);
                ea
            }

            // BCS r
            0xB0 => {
                let ea = self.addr_relative(bus);
                let taken = self.regs.p.is_set(C);
                self.op_branch(ea, taken);
                ea
            }

            // BNE r
            0xD0 => {
                let ea = self.addr_relative(bus);
                let taken = !self.regs.p.is_set(Z);
                self.op_branch(ea, taken);
                ea
            }

            // BEQ r
            0xF0 => {
                let ea = self.addr_relative(bus);
                let taken = self.regs.p.is_set(Z);
                self.op_branch(ea, taken);
                ea
            }

            // ================================================================
            // Jumps, calls, returns
            // ================================================================

            // JSR a
            0x20 => {
                let ea = self.addr_absolute(bus);
                self.op_jsr(bus, ea);
                ea
            }

            // JSL a
            0x22 => {
                let ea = self.addr_absolute(bus);
                self.op_jsl(bus, ea);
                ea
            }

            // RTI
            0x40 => {
                self.op_rti(bus);
                0
            }

            // JMP a
            0x4C => {
                let ea = self.addr_absolute(bus);
                self.op_jmp(ea);
                ea
            }

            // RTS
            0x60 => {
                self.op_rts(bus);
                0
            }

            // RTL
            0x6B => {
                self.op_rtl(bus);
                0
            }

            // JMP (a)
            0x6C => {
                let ea = self.addr_absolute_indirect(bus);
                self.op_jmp(ea);
                ea
            }

            // JMP (a,X)
            0x7C => {
                let ea = self.addr_absolute_indexed_indirect_x(bus);
                self.op_jmp(ea);
                ea
            }

            // ================================================================
            // Load / store
            // ================================================================

            // LDA (d,X)
            0xA1 => {
                let ea = self.addr_direct_indexed_indirect_x(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDA d,S
            0xA3 => {
                let ea = self.addr_stack_relative(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDA d
            0xA5 => {
                let ea = self.addr_direct(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDA #
            0xA9 => {
                let ea = self.addr_immediate_m();
                self.op_lda(bus, ea);
                ea
            }

            // LDA a
            0xAD => {
                let ea = self.addr_absolute(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDA (d),Y
            0xB1 => {
                let ea = self.addr_direct_indirect_indexed_y(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDA (d)
            0xB2 => {
                let ea = self.addr_direct_indirect(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDA (d,S),Y
            0xB3 => {
                let ea = self.addr_stack_relative_indirect_y(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDA d,X
            0xB5 => {
                let ea = self.addr_direct_x(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDA a,Y
            0xB9 => {
                let ea = self.addr_absolute_y(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDA a,X
            0xBD => {
                let ea = self.addr_absolute_x(bus);
                self.op_lda(bus, ea);
                ea
            }

            // LDX #
            0xA2 => {
                let ea = self.addr_immediate_x();
                self.op_ldx(bus, ea);
                ea
            }

            // LDX d
            0xA6 => {
                let ea = self.addr_direct(bus);
                self.op_ldx(bus, ea);
                ea
            }

            // LDX a
            0xAE => {
                let ea = self.addr_absolute(bus);
                self.op_ldx(bus, ea);
                ea
            }

            // LDX d,Y
            0xB6 => {
                let ea = self.addr_direct_y(bus);
                self.op_ldx(bus, ea);
                ea
            }

            // LDX a,Y
            0xBE => {
                let ea = self.addr_absolute_y(bus);
                self.op_ldx(bus, ea);
                ea
            }

            // LDY #
            0xA0 => {
                let ea = self.addr_immediate_x();
                self.op_ldy(bus, ea);
                ea
            }

            // LDY d
            0xA4 => {
                let ea = self.addr_direct(bus);
                self.op_ldy(bus, ea);
                ea
            }

            // LDY a
            0xAC => {
                let ea = self.addr_absolute(bus);
                self.op_ldy(bus, ea);
                ea
            }

            // LDY d,X
            0xB4 => {
                let ea = self.addr_direct_x(bus);
                self.op_ldy(bus, ea);
                ea
            }

            // LDY a,X
            0xBC => {
                let ea = self.addr_absolute_x(bus);
                self.op_ldy(bus, ea);
                ea
            }

            // STA (d,X)
            0x81 => {
                let ea = self.addr_direct_indexed_indirect_x(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STA d,S
            0x83 => {
                let ea = self.addr_stack_relative(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STA d
            0x85 => {
                let ea = self.addr_direct(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STA a
            0x8D => {
                let ea = self.addr_absolute(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STA (d),Y
            0x91 => {
                let ea = self.addr_direct_indirect_indexed_y(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STA (d)
            0x92 => {
                let ea = self.addr_direct_indirect(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STA (d,S),Y
            0x93 => {
                let ea = self.addr_stack_relative_indirect_y(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STA d,X
            0x95 => {
                let ea = self.addr_direct_x(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STA a,Y
            0x99 => {
                let ea = self.addr_absolute_y(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STA a,X
            0x9D => {
                let ea = self.addr_absolute_x(bus);
                self.op_sta(bus, ea);
                ea
            }

            // STX d
            0x86 => {
                let ea = self.addr_direct(bus);
                self.op_stx(bus, ea);
                ea
            }

            // STX a
            0x8E => {
                let ea = self.addr_absolute(bus);
                self.op_stx(bus, ea);
                ea
            }

            // STX d,Y
            0x96 => {
                let ea = self.addr_direct_y(bus);
                self.op_stx(bus, ea);
                ea
            }

            // STY d
            0x84 => {
                let ea = self.addr_direct(bus);
                self.op_sty(bus, ea);
                ea
            }

            // STY a
            0x8C => {
                let ea = self.addr_absolute(bus);
                self.op_sty(bus, ea);
                ea
            }

            // STY d,X
            0x94 => {
                let ea = self.addr_direct_x(bus);
                self.op_sty(bus, ea);
                ea
            }

            // STZ d
            0x64 => {
                let ea = self.addr_direct(bus);
                self.op_stz(bus, ea);
                ea
            }

            // STZ d,X
            0x74 => {
                let ea = self.addr_direct_x(bus);
                self.op_stz(bus, ea);
                ea
            }

            // STZ a
            0x9C => {
                let ea = self.addr_absolute(bus);
                self.op_stz(bus, ea);
                ea
            }

            // STZ a,X
            0x9E => {
                let ea = self.addr_absolute_x(bus);
                self.op_stz(bus, ea);
                ea
            }

            // ================================================================
            // Stack
            // ================================================================

            // PHP
            0x08 => {
                self.op_php(bus);
                0
            }

            // PHD
            0x0B => {
                self.op_phd(bus);
                0
            }

            // PLP
            0x28 => {
                self.op_plp(bus);
                0
            }

            // PLD
            0x2B => {
                self.op_pld(bus);
                0
            }

            // PHA
            0x48 => {
                self.op_pha(bus);
                0
            }

            // PHK
            0x4B => {
                self.op_phk(bus);
                0
            }

            // PHY
            0x5A => {
                self.op_phy(bus);
                0
            }

            // PER rl
            0x62 => {
                let ea = self.addr_long_relative(bus);
                self.op_per(bus, ea);
                ea
            }

            // PLA
            0x68 => {
                self.op_pla(bus);
                0
            }

            // PLY
            0x7A => {
                self.op_ply(bus);
                0
            }

            // PHB
            0x8B => {
                self.op_phb(bus);
                0
            }

            // PLB
            0xAB => {
                self.op_plb(bus);
                0
            }

            // PEI d
            0xD4 => {
                let ea = self.addr_direct(bus);
                self.op_pei(bus, ea);
                ea
            }

            // PHX
            0xDA => {
                self.op_phx(bus);
                0
            }

            // PEA #
            0xF4 => {
                let ea = self.addr_immediate_word();
                self.op_pea(bus, ea);
                ea
            }

            // PLX
            0xFA => {
                self.op_plx(bus);
                0
            }

            // ================================================================
            // Transfers and block moves
            // ================================================================

            // TCS
            0x1B => {
                self.op_tcs();
                0
            }

            // TSC
            0x3B => {
                self.op_tsc();
                0
            }

            // MVP #
            0x44 => {
                let ea = self.addr_immediate_word();
                self.op_mvp(bus, ea);
                ea
            }

            // MVN #
            0x54 => {
                let ea = self.addr_immediate_word();
                self.op_mvn(bus, ea);
                ea
            }

            // TCD
            0x5B => {
                self.op_tcd();
                0
            }

            // TDC
            0x7B => {
                self.op_tdc();
                0
            }

            // TXA
            0x8A => {
                self.op_txa();
                0
            }

            // TYA
            0x98 => {
                self.op_tya();
                0
            }

            // TXS
            0x9A => {
                self.op_txs();
                0
            }

            // TXY
            0x9B => {
                self.op_txy();
                0
            }

            // TAY
            0xA8 => {
                self.op_tay();
                0
            }

            // TAX
            0xAA => {
                self.op_tax();
                0
            }

            // TSX
            0xBA => {
                self.op_tsx();
                0
            }

            // TYX
            0xBB => {
                self.op_tyx();
                0
            }

            // Unassigned opcodes: TSB/TRB, the long and indirect-long
            // addressing column, JML and JSR (a,X) are not wired up. The
            // opcode byte is consumed, nothing else happens and no cycles
            // are charged beyond the fetch.
            _ => 0,
        };

        if self.trace {
            self.print_trace(bus, pc, opcode, ea);
        }
    }
}
