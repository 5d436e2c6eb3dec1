//! Flag operations, status-byte twiddling, software interrupts and the
//! host escapes.

use crate::bus::Bus;
use crate::cpu::{
    BRK_VECTOR_EMULATION, BRK_VECTOR_NATIVE, COP_VECTOR_EMULATION, COP_VECTOR_NATIVE, Cpu65x64,
};
use crate::flags::{C, D, I, M, V, X};
use crate::host::Host;
use crate::registers::set_low_byte;

impl Cpu65x64 {
    /// CLC.
    pub(crate) fn op_clc(&mut self) {
        self.regs.p.clear(C);
        self.add_cycles(2);
    }

    /// SEC.
    pub(crate) fn op_sec(&mut self) {
        self.regs.p.set(C);
        self.add_cycles(2);
    }

    /// CLI.
    pub(crate) fn op_cli(&mut self) {
        self.regs.p.clear(I);
        self.add_cycles(2);
    }

    /// SEI.
    pub(crate) fn op_sei(&mut self) {
        self.regs.p.set(I);
        self.add_cycles(2);
    }

    /// CLD.
    pub(crate) fn op_cld(&mut self) {
        self.regs.p.clear(D);
        self.add_cycles(2);
    }

    /// SED.
    pub(crate) fn op_sed(&mut self) {
        self.regs.p.set(D);
        self.add_cycles(2);
    }

    /// CLV.
    pub(crate) fn op_clv(&mut self) {
        self.regs.p.clear(V);
        self.add_cycles(2);
    }

    /// REP - clear the P bits selected by the operand. Emulation mode
    /// keeps M and X forced.
    pub(crate) fn op_rep(&mut self, bus: &mut impl Bus, ea: u64) {
        let mask = bus.read_byte(ea);
        self.regs.p.0 &= !mask;
        if self.regs.e {
            self.regs.p.set(M);
            self.regs.p.set(X);
        }
        self.add_cycles(3);
    }

    /// SEP - set the P bits selected by the operand. Narrowing the index
    /// registers discards their upper bytes.
    pub(crate) fn op_sep(&mut self, bus: &mut impl Bus, ea: u64) {
        let mask = bus.read_byte(ea);
        self.regs.p.0 |= mask;
        if self.regs.e {
            self.regs.p.set(M);
            self.regs.p.set(X);
        }
        if self.regs.p.is_set(X) {
            self.regs.x &= 0xFF;
            self.regs.y &= 0xFF;
        }
        self.add_cycles(3);
    }

    /// Common body of BRK and COP: push the return state, mask interrupts,
    /// leave decimal mode, zero the program bank and vector.
    fn software_interrupt(&mut self, bus: &mut impl Bus, vector: u64) {
        if !self.regs.e {
            self.push_byte(bus, self.regs.pbr);
        }
        let ret = self.regs.pc as u16;
        self.push_word(bus, ret);
        self.push_byte(bus, self.regs.p.0);
        self.regs.p.set(I);
        self.regs.p.clear(D);
        self.regs.pbr = 0;
        self.regs.pc = u64::from(bus.read_word(vector));
        self.add_cycles(8);
    }

    /// BRK - the signature byte was consumed by the addressing mode.
    pub(crate) fn op_brk(&mut self, bus: &mut impl Bus) {
        let vector = if self.regs.e {
            BRK_VECTOR_EMULATION
        } else {
            BRK_VECTOR_NATIVE
        };
        self.software_interrupt(bus, vector);
    }

    /// COP - coprocessor trap, same shape as BRK with its own vectors.
    pub(crate) fn op_cop(&mut self, bus: &mut impl Bus) {
        let vector = if self.regs.e {
            COP_VECTOR_EMULATION
        } else {
            COP_VECTOR_NATIVE
        };
        self.software_interrupt(bus, vector);
    }

    /// NOP.
    pub(crate) fn op_nop(&mut self) {
        self.add_cycles(2);
    }

    /// WDM - the reserved escape, used as the host service hatch.
    ///
    /// Subcode 0x01 writes the low byte of A to the host, 0x02 reads one
    /// character into the low byte of A, 0xFF stops the CPU. Anything else
    /// is a no-op.
    pub(crate) fn op_wdm(&mut self, bus: &mut impl Bus, host: &mut impl Host, ea: u64) {
        match bus.read_byte(ea) {
            0x01 => host.put_char(self.regs.a as u8),
            0x02 => {
                let value = host.get_char();
                set_low_byte(&mut self.regs.a, value);
            }
            0xFF => self.set_stopped(),
            _ => {}
        }
        self.add_cycles(2);
    }

    /// WAI/STP - idle in place until the host signals an interrupt.
    ///
    /// Stalling rewinds PC onto the opcode so the instruction re-executes
    /// next step; a pending interrupt is consumed and execution falls
    /// through.
    pub(crate) fn op_wai(&mut self) {
        if !self.take_interrupt() {
            self.regs.pc = self.regs.pc.wrapping_sub(1);
        }
        self.add_cycles(3);
    }
}
