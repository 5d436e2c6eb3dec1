//! Stack primitives and the push/pull operations.
//!
//! Pushes write at SP and post-decrement; pulls pre-increment and read. In
//! emulation mode SP's low byte is the active stack index and wraps within
//! page one. Multi-byte values go on high-half first so they sit in memory
//! little-endian, matching the 65x816 stack frame layout.
//!
//! PHA/PHX/PHY push a byte in narrow mode and a word otherwise - the push
//! width never widens past 16 bits even though the ALU does. PHD/PLD and
//! the PEA/PEI/PER family are word-sized for the same reason.

use crate::bus::Bus;
use crate::cpu::Cpu65x64;
use crate::flags::{M, X};
use crate::registers::{set_low_byte, set_low_word};

impl Cpu65x64 {
    /// Push one byte.
    pub fn push_byte(&mut self, bus: &mut impl Bus, value: u8) {
        bus.write_byte(self.regs.sp, value);
        self.regs.dec_sp();
    }

    /// Pull one byte.
    pub fn pull_byte(&mut self, bus: &mut impl Bus) -> u8 {
        self.regs.inc_sp();
        bus.read_byte(self.regs.sp)
    }

    /// Push a word, high byte first.
    pub fn push_word(&mut self, bus: &mut impl Bus, value: u16) {
        self.push_byte(bus, (value >> 8) as u8);
        self.push_byte(bus, value as u8);
    }

    /// Pull a word, low byte first.
    pub fn pull_word(&mut self, bus: &mut impl Bus) -> u16 {
        let low = self.pull_byte(bus);
        let high = self.pull_byte(bus);
        u16::from_le_bytes([low, high])
    }

    /// Push a dword, high word first.
    pub fn push_dword(&mut self, bus: &mut impl Bus, value: u32) {
        self.push_word(bus, (value >> 16) as u16);
        self.push_word(bus, value as u16);
    }

    /// Pull a dword, low word first.
    pub fn pull_dword(&mut self, bus: &mut impl Bus) -> u32 {
        let low = u32::from(self.pull_word(bus));
        let high = u32::from(self.pull_word(bus));
        (high << 16) | low
    }

    /// Push a qword, high dword first.
    pub fn push_qword(&mut self, bus: &mut impl Bus, value: u64) {
        self.push_dword(bus, (value >> 32) as u32);
        self.push_dword(bus, value as u32);
    }

    /// Pull a qword, low dword first.
    pub fn pull_qword(&mut self, bus: &mut impl Bus) -> u64 {
        let low = u64::from(self.pull_dword(bus));
        let high = u64::from(self.pull_dword(bus));
        (high << 32) | low
    }

    /// PHA.
    pub(crate) fn op_pha(&mut self, bus: &mut impl Bus) {
        if self.regs.a_is_narrow() {
            self.push_byte(bus, self.regs.a as u8);
            self.add_cycles(3);
        } else {
            self.push_word(bus, self.regs.a as u16);
            self.add_cycles(4);
        }
    }

    /// PHX.
    pub(crate) fn op_phx(&mut self, bus: &mut impl Bus) {
        if self.regs.index_is_narrow() {
            self.push_byte(bus, self.regs.x as u8);
            self.add_cycles(3);
        } else {
            self.push_word(bus, self.regs.x as u16);
            self.add_cycles(4);
        }
    }

    /// PHY.
    pub(crate) fn op_phy(&mut self, bus: &mut impl Bus) {
        if self.regs.index_is_narrow() {
            self.push_byte(bus, self.regs.y as u8);
            self.add_cycles(3);
        } else {
            self.push_word(bus, self.regs.y as u16);
            self.add_cycles(4);
        }
    }

    /// PHP.
    pub(crate) fn op_php(&mut self, bus: &mut impl Bus) {
        self.push_byte(bus, self.regs.p.0);
        self.add_cycles(3);
    }

    /// PHB.
    pub(crate) fn op_phb(&mut self, bus: &mut impl Bus) {
        self.push_byte(bus, self.regs.dbr);
        self.add_cycles(3);
    }

    /// PHK.
    pub(crate) fn op_phk(&mut self, bus: &mut impl Bus) {
        self.push_byte(bus, self.regs.pbr);
        self.add_cycles(3);
    }

    /// PHD.
    pub(crate) fn op_phd(&mut self, bus: &mut impl Bus) {
        self.push_word(bus, self.regs.dp as u16);
        self.add_cycles(4);
    }

    /// PLA.
    pub(crate) fn op_pla(&mut self, bus: &mut impl Bus) {
        if self.regs.a_is_narrow() {
            let value = self.pull_byte(bus);
            set_low_byte(&mut self.regs.a, value);
            self.regs.p.update_nz_byte(value);
            self.add_cycles(4);
        } else {
            let value = self.pull_word(bus);
            set_low_word(&mut self.regs.a, value);
            self.regs.p.update_nz_word(value);
            self.add_cycles(5);
        }
    }

    /// PLX.
    pub(crate) fn op_plx(&mut self, bus: &mut impl Bus) {
        if self.regs.index_is_narrow() {
            let value = self.pull_byte(bus);
            set_low_byte(&mut self.regs.x, value);
            self.regs.p.update_nz_byte(value);
            self.add_cycles(4);
        } else {
            let value = self.pull_word(bus);
            set_low_word(&mut self.regs.x, value);
            self.regs.p.update_nz_word(value);
            self.add_cycles(5);
        }
    }

    /// PLY.
    pub(crate) fn op_ply(&mut self, bus: &mut impl Bus) {
        if self.regs.index_is_narrow() {
            let value = self.pull_byte(bus);
            set_low_byte(&mut self.regs.y, value);
            self.regs.p.update_nz_byte(value);
            self.add_cycles(4);
        } else {
            let value = self.pull_word(bus);
            set_low_word(&mut self.regs.y, value);
            self.regs.p.update_nz_word(value);
            self.add_cycles(5);
        }
    }

    /// PLP - restore P directly; emulation mode keeps M and X forced.
    pub(crate) fn op_plp(&mut self, bus: &mut impl Bus) {
        self.regs.p.0 = self.pull_byte(bus);
        if self.regs.e {
            self.regs.p.set(M);
            self.regs.p.set(X);
        }
        self.add_cycles(4);
    }

    /// PLB.
    pub(crate) fn op_plb(&mut self, bus: &mut impl Bus) {
        let value = self.pull_byte(bus);
        self.regs.dbr = value;
        self.regs.p.update_nz_byte(value);
        self.add_cycles(4);
    }

    /// PLD.
    pub(crate) fn op_pld(&mut self, bus: &mut impl Bus) {
        let value = self.pull_word(bus);
        set_low_word(&mut self.regs.dp, value);
        self.regs.p.update_nz_word(value);
        self.add_cycles(5);
    }

    /// PEA - push the literal word operand.
    pub(crate) fn op_pea(&mut self, bus: &mut impl Bus, ea: u64) {
        let value = bus.read_word(ea);
        self.push_word(bus, value);
        self.add_cycles(3);
    }

    /// PEI - push the word at the direct-page operand address.
    pub(crate) fn op_pei(&mut self, bus: &mut impl Bus, ea: u64) {
        let value = bus.read_word(ea);
        self.push_word(bus, value);
        self.add_cycles(4);
    }

    /// PER - push the PC-relative result, truncated to a word.
    pub(crate) fn op_per(&mut self, bus: &mut impl Bus, ea: u64) {
        self.push_word(bus, ea as u16);
        self.add_cycles(4);
    }
}
