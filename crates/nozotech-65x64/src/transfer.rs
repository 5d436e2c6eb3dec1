//! Register transfers, exchanges and block moves.
//!
//! Transfer widths follow the governing narrow-mode bit: byte when narrow,
//! the full qword otherwise. TXS and TCS set no flags; in emulation mode
//! both force the stack pointer back into page one.

use crate::bus::Bus;
use crate::cpu::Cpu65x64;
use crate::flags::{C, M, X};
use crate::registers::{set_low_byte, set_low_word};

impl Cpu65x64 {
    /// TAX.
    pub(crate) fn op_tax(&mut self) {
        if self.regs.index_is_narrow() {
            let value = self.regs.a as u8;
            set_low_byte(&mut self.regs.x, value);
            self.regs.p.update_nz_byte(value);
        } else {
            self.regs.x = self.regs.a;
            self.regs.p.update_nz_qword(self.regs.x);
        }
        self.add_cycles(2);
    }

    /// TAY.
    pub(crate) fn op_tay(&mut self) {
        if self.regs.index_is_narrow() {
            let value = self.regs.a as u8;
            set_low_byte(&mut self.regs.y, value);
            self.regs.p.update_nz_byte(value);
        } else {
            self.regs.y = self.regs.a;
            self.regs.p.update_nz_qword(self.regs.y);
        }
        self.add_cycles(2);
    }

    /// TXA.
    pub(crate) fn op_txa(&mut self) {
        if self.regs.a_is_narrow() {
            let value = self.regs.x as u8;
            set_low_byte(&mut self.regs.a, value);
            self.regs.p.update_nz_byte(value);
        } else {
            self.regs.a = self.regs.x;
            self.regs.p.update_nz_qword(self.regs.a);
        }
        self.add_cycles(2);
    }

    /// TYA.
    pub(crate) fn op_tya(&mut self) {
        if self.regs.a_is_narrow() {
            let value = self.regs.y as u8;
            set_low_byte(&mut self.regs.a, value);
            self.regs.p.update_nz_byte(value);
        } else {
            self.regs.a = self.regs.y;
            self.regs.p.update_nz_qword(self.regs.a);
        }
        self.add_cycles(2);
    }

    /// TXY.
    pub(crate) fn op_txy(&mut self) {
        if self.regs.index_is_narrow() {
            let value = self.regs.x as u8;
            set_low_byte(&mut self.regs.y, value);
            self.regs.p.update_nz_byte(value);
        } else {
            self.regs.y = self.regs.x;
            self.regs.p.update_nz_qword(self.regs.y);
        }
        self.add_cycles(2);
    }

    /// TYX.
    pub(crate) fn op_tyx(&mut self) {
        if self.regs.index_is_narrow() {
            let value = self.regs.y as u8;
            set_low_byte(&mut self.regs.x, value);
            self.regs.p.update_nz_byte(value);
        } else {
            self.regs.x = self.regs.y;
            self.regs.p.update_nz_qword(self.regs.x);
        }
        self.add_cycles(2);
    }

    /// TSX.
    pub(crate) fn op_tsx(&mut self) {
        if self.regs.index_is_narrow() {
            let value = self.regs.sp as u8;
            set_low_byte(&mut self.regs.x, value);
            self.regs.p.update_nz_byte(value);
        } else {
            self.regs.x = self.regs.sp;
            self.regs.p.update_nz_qword(self.regs.x);
        }
        self.add_cycles(2);
    }

    /// TXS - no flags. Emulation mode pins the high byte of SP to 0x01.
    pub(crate) fn op_txs(&mut self) {
        if self.regs.e {
            self.regs.sp = 0x0100 | (self.regs.x & 0xFF);
        } else if self.regs.index_is_narrow() {
            self.regs.sp = self.regs.x & 0xFF;
        } else {
            self.regs.sp = self.regs.x;
        }
        self.add_cycles(2);
    }

    /// TCS - no flags.
    pub(crate) fn op_tcs(&mut self) {
        if self.regs.e {
            self.regs.sp = 0x0100 | (self.regs.a & 0xFF);
        } else {
            self.regs.sp = self.regs.a;
        }
        self.add_cycles(2);
    }

    /// TSC.
    pub(crate) fn op_tsc(&mut self) {
        self.regs.a = self.regs.sp;
        self.regs.p.update_nz_qword(self.regs.a);
        self.add_cycles(2);
    }

    /// TCD.
    pub(crate) fn op_tcd(&mut self) {
        self.regs.dp = self.regs.a;
        self.regs.p.update_nz_qword(self.regs.dp);
        self.add_cycles(2);
    }

    /// TDC.
    pub(crate) fn op_tdc(&mut self) {
        self.regs.a = self.regs.dp;
        self.regs.p.update_nz_qword(self.regs.a);
        self.add_cycles(2);
    }

    /// XBA - swap the two low bytes of A; N/Z from the new low byte.
    pub(crate) fn op_xba(&mut self) {
        let low = self.regs.a & 0xFF;
        let high = (self.regs.a >> 8) & 0xFF;
        self.regs.a = (self.regs.a & !0xFFFF) | (low << 8) | high;
        self.regs.p.update_nz_byte(high as u8);
        self.add_cycles(3);
    }

    /// XCE - exchange carry with the emulation bit. Entering emulation
    /// forces M and X and narrows SP to the page-one layout.
    pub(crate) fn op_xce(&mut self) {
        let carry = self.regs.p.is_set(C);
        self.regs.p.set_if(C, self.regs.e);
        self.regs.e = carry;
        if self.regs.e {
            self.regs.p.set(M);
            self.regs.p.set(X);
            self.regs.sp = 0x0100 | (self.regs.sp & 0xFF);
        }
        self.add_cycles(2);
    }

    /// MVN - block move, ascending pointers.
    ///
    /// One byte per execution; the instruction rewinds PC over itself until
    /// the word view of A runs out. Banks come from the operand word: low
    /// byte destination, high byte source. DBR tracks the destination bank.
    pub(crate) fn op_mvn(&mut self, bus: &mut impl Bus, ea: u64) {
        let banks = bus.read_word(ea);
        let dst_bank = u64::from(banks & 0xFF);
        let src_bank = u64::from(banks >> 8);
        self.regs.dbr = banks as u8;

        let src = (src_bank << 16) | (self.regs.x & 0xFFFF);
        let dst = (dst_bank << 16) | (self.regs.y & 0xFFFF);
        let value = bus.read_byte(src);
        bus.write_byte(dst, value);

        let new_x = (self.regs.x as u16).wrapping_add(1);
        let new_y = (self.regs.y as u16).wrapping_add(1);
        let new_a = (self.regs.a as u16).wrapping_sub(1);
        set_low_word(&mut self.regs.x, new_x);
        set_low_word(&mut self.regs.y, new_y);
        set_low_word(&mut self.regs.a, new_a);

        if self.regs.a & 0xFFFF != 0xFFFF {
            self.regs.pc = self.regs.pc.wrapping_sub(3);
        }
        self.add_cycles(7);
    }

    /// MVP - block move, descending pointers.
    pub(crate) fn op_mvp(&mut self, bus: &mut impl Bus, ea: u64) {
        let banks = bus.read_word(ea);
        let dst_bank = u64::from(banks & 0xFF);
        let src_bank = u64::from(banks >> 8);
        self.regs.dbr = banks as u8;

        let src = (src_bank << 16) | (self.regs.x & 0xFFFF);
        let dst = (dst_bank << 16) | (self.regs.y & 0xFFFF);
        let value = bus.read_byte(src);
        bus.write_byte(dst, value);

        let new_x = (self.regs.x as u16).wrapping_sub(1);
        let new_y = (self.regs.y as u16).wrapping_sub(1);
        let new_a = (self.regs.a as u16).wrapping_sub(1);
        set_low_word(&mut self.regs.x, new_x);
        set_low_word(&mut self.regs.y, new_y);
        set_low_word(&mut self.regs.a, new_a);

        if self.regs.a & 0xFFFF != 0xFFFF {
            self.regs.pc = self.regs.pc.wrapping_sub(3);
        }
        self.add_cycles(7);
    }
}
