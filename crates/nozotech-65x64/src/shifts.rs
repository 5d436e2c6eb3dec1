//! Shifts and rotates, accumulator and memory forms.
//!
//! The carry flag takes the shifted-out bit; rotates shift through carry.

use crate::bus::Bus;
use crate::cpu::Cpu65x64;
use crate::flags::C;
use crate::registers::set_low_byte;

impl Cpu65x64 {
    fn asl_byte(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(C, value & 0x80 != 0);
        let result = value << 1;
        self.regs.p.update_nz_byte(result);
        result
    }

    fn asl_qword(&mut self, value: u64) -> u64 {
        self.regs.p.set_if(C, value & 0x8000_0000_0000_0000 != 0);
        let result = value << 1;
        self.regs.p.update_nz_qword(result);
        result
    }

    fn lsr_byte(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(C, value & 0x01 != 0);
        let result = value >> 1;
        self.regs.p.update_nz_byte(result);
        result
    }

    fn lsr_qword(&mut self, value: u64) -> u64 {
        self.regs.p.set_if(C, value & 0x01 != 0);
        let result = value >> 1;
        self.regs.p.update_nz_qword(result);
        result
    }

    fn rol_byte(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.regs.p.is_set(C));
        self.regs.p.set_if(C, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.regs.p.update_nz_byte(result);
        result
    }

    fn rol_qword(&mut self, value: u64) -> u64 {
        let carry_in = u64::from(self.regs.p.is_set(C));
        self.regs.p.set_if(C, value & 0x8000_0000_0000_0000 != 0);
        let result = (value << 1) | carry_in;
        self.regs.p.update_nz_qword(result);
        result
    }

    fn ror_byte(&mut self, value: u8) -> u8 {
        let carry_in = if self.regs.p.is_set(C) { 0x80 } else { 0 };
        self.regs.p.set_if(C, value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        self.regs.p.update_nz_byte(result);
        result
    }

    fn ror_qword(&mut self, value: u64) -> u64 {
        let carry_in = if self.regs.p.is_set(C) {
            0x8000_0000_0000_0000
        } else {
            0
        };
        self.regs.p.set_if(C, value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        self.regs.p.update_nz_qword(result);
        result
    }

    /// ASL on memory.
    pub(crate) fn op_asl(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let result = self.asl_byte(bus.read_byte(ea));
            bus.write_byte(ea, result);
            self.add_cycles(4);
        } else {
            let result = self.asl_qword(bus.read_qword(ea));
            bus.write_qword(ea, result);
            self.add_cycles(8);
        }
    }

    /// ASL on A.
    pub(crate) fn op_asl_a(&mut self) {
        if self.regs.a_is_narrow() {
            let result = self.asl_byte(self.regs.a as u8);
            set_low_byte(&mut self.regs.a, result);
        } else {
            self.regs.a = self.asl_qword(self.regs.a);
        }
        self.add_cycles(2);
    }

    /// LSR on memory.
    pub(crate) fn op_lsr(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let result = self.lsr_byte(bus.read_byte(ea));
            bus.write_byte(ea, result);
            self.add_cycles(4);
        } else {
            let result = self.lsr_qword(bus.read_qword(ea));
            bus.write_qword(ea, result);
            self.add_cycles(8);
        }
    }

    /// LSR on A.
    pub(crate) fn op_lsr_a(&mut self) {
        if self.regs.a_is_narrow() {
            let result = self.lsr_byte(self.regs.a as u8);
            set_low_byte(&mut self.regs.a, result);
        } else {
            self.regs.a = self.lsr_qword(self.regs.a);
        }
        self.add_cycles(2);
    }

    /// ROL on memory.
    pub(crate) fn op_rol(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let result = self.rol_byte(bus.read_byte(ea));
            bus.write_byte(ea, result);
            self.add_cycles(4);
        } else {
            let result = self.rol_qword(bus.read_qword(ea));
            bus.write_qword(ea, result);
            self.add_cycles(8);
        }
    }

    /// ROL on A.
    pub(crate) fn op_rol_a(&mut self) {
        if self.regs.a_is_narrow() {
            let result = self.rol_byte(self.regs.a as u8);
            set_low_byte(&mut self.regs.a, result);
        } else {
            self.regs.a = self.rol_qword(self.regs.a);
        }
        self.add_cycles(2);
    }

    /// ROR on memory.
    pub(crate) fn op_ror(&mut self, bus: &mut impl Bus, ea: u64) {
        if self.regs.a_is_narrow() {
            let result = self.ror_byte(bus.read_byte(ea));
            bus.write_byte(ea, result);
            self.add_cycles(4);
        } else {
            let result = self.ror_qword(bus.read_qword(ea));
            bus.write_qword(ea, result);
            self.add_cycles(8);
        }
    }

    /// ROR on A.
    pub(crate) fn op_ror_a(&mut self) {
        if self.regs.a_is_narrow() {
            let result = self.ror_byte(self.regs.a as u8);
            set_low_byte(&mut self.regs.a, result);
        } else {
            self.regs.a = self.ror_qword(self.regs.a);
        }
        self.add_cycles(2);
    }
}
