//! Load and store operations.
//!
//! Loads update N and Z at the operation width. Narrow-mode loads replace
//! only the low byte of the destination register; the upper bytes survive,
//! as on the 65C816.

use crate::bus::Bus;
use crate::cpu::Cpu65x64;
use crate::registers::set_low_byte;

impl Cpu65x64 {
    /// LDA - load accumulator.
    pub(crate) fn op_lda(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let value = bus.read_byte(ea);
            set_low_byte(&mut self.regs.a, value);
            self.regs.p.update_nz_byte(value);
            self.add_cycles(2);
        } else {
            let value = bus.read_qword(ea);
            self.regs.a = value;
            self.regs.p.update_nz_qword(value);
            self.add_cycles(4);
        }
    }

    /// LDX - load X.
    pub(crate) fn op_ldx(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.index_is_narrow() {
            let value = bus.read_byte(ea);
            set_low_byte(&mut self.regs.x, value);
            self.regs.p.update_nz_byte(value);
            self.add_cycles(2);
        } else {
            let value = bus.read_qword(ea);
            self.regs.x = value;
            self.regs.p.update_nz_qword(value);
            self.add_cycles(4);
        }
    }

    /// LDY - load Y.
    pub(crate) fn op_ldy(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.index_is_narrow() {
            let value = bus.read_byte(ea);
            set_low_byte(&mut self.regs.y, value);
            self.regs.p.update_nz_byte(value);
            self.add_cycles(2);
        } else {
            let value = bus.read_qword(ea);
            self.regs.y = value;
            self.regs.p.update_nz_qword(value);
            self.add_cycles(4);
        }
    }

    /// STA - store accumulator.
    pub(crate) fn op_sta(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            bus.write_byte(ea, self.regs.a as u8);
            self.add_cycles(2);
        } else {
            bus.write_qword(ea, self.regs.a);
            self.add_cycles(4);
        }
    }

    /// STX - store X.
    pub(crate) fn op_stx(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.index_is_narrow() {
            bus.write_byte(ea, self.regs.x as u8);
            self.add_cycles(2);
        } else {
            bus.write_qword(ea, self.regs.x);
            self.add_cycles(4);
        }
    }

    /// STY - store Y.
    pub(crate) fn op_sty(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.index_is_narrow() {
            bus.write_byte(ea, self.regs.y as u8);
            self.add_cycles(2);
        } else {
            bus.write_qword(ea, self.regs.y);
            self.add_cycles(4);
        }
    }

    /// STZ - store zero.
    pub(crate) fn op_stz(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            bus.write_byte(ea, 0);
            self.add_cycles(2);
        } else {
            bus.write_qword(ea, 0);
            self.add_cycles(4);
        }
    }
}
