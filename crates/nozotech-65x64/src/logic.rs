//! Logical operations and bit tests.

use crate::bus::Bus;
use crate::cpu::Cpu65x64;
use crate::flags::{N, V, Z};
use crate::registers::set_low_byte;

impl Cpu65x64 {
    /// AND - combine A with memory.
    pub(crate) fn op_and(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let value = (self.regs.a as u8) & bus.read_byte(ea);
            set_low_byte(&mut self.regs.a, value);
            self.regs.p.update_nz_byte(value);
            self.add_cycles(2);
        } else {
            let value = self.regs.a & bus.read_qword(ea);
            self.regs.a = value;
            self.regs.p.update_nz_qword(value);
            self.add_cycles(4);
        }
    }

    /// ORA - combine A with memory.
    pub(crate) fn op_ora(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let value = (self.regs.a as u8) | bus.read_byte(ea);
            set_low_byte(&mut self.regs.a, value);
            self.regs.p.update_nz_byte(value);
            self.add_cycles(2);
        } else {
            let value = self.regs.a | bus.read_qword(ea);
            self.regs.a = value;
            self.regs.p.update_nz_qword(value);
            self.add_cycles(4);
        }
    }

    /// EOR - combine A with memory.
    pub(crate) fn op_eor(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let value = (self.regs.a as u8) ^ bus.read_byte(ea);
            set_low_byte(&mut self.regs.a, value);
            self.regs.p.update_nz_byte(value);
            self.add_cycles(2);
        } else {
            let value = self.regs.a ^ bus.read_qword(ea);
            self.regs.a = value;
            self.regs.p.update_nz_qword(value);
            self.add_cycles(4);
        }
    }

    /// BIT - Z from A AND memory, N and V from the operand's top two bits.
    pub(crate) fn op_bit(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let data = bus.read_byte(ea);
            self.regs.p.set_if(Z, (self.regs.a as u8) & data == 0);
            self.regs.p.set_if(N, data & 0x80 != 0);
            self.regs.p.set_if(V, data & 0x40 != 0);
            self.add_cycles(2);
        } else {
            let data = bus.read_qword(ea);
            self.regs.p.set_if(Z, self.regs.a & data == 0);
            self.regs.p.set_if(N, data & 0x8000_0000_0000_0000 != 0);
            self.regs.p.set_if(V, data & 0x4000_0000_0000_0000 != 0);
            self.add_cycles(4);
        }
    }

    /// BIT immediate - sets Z only.
    pub(crate) fn op_bit_immediate(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let data = bus.read_byte(ea);
            self.regs.p.set_if(Z, (self.regs.a as u8) & data == 0);
            self.add_cycles(2);
        } else {
            let data = bus.read_qword(ea);
            self.regs.p.set_if(Z, self.regs.a & data == 0);
            self.add_cycles(4);
        }
    }
}
