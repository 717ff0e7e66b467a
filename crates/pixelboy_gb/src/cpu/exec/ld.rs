use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_ld_rr_d16(&mut self, opcode: u8, imm: u16) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        self.regs.set_rp(opcode >> 4, imm);
        0
    }

    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8, imm: u16) -> u32 {
        self.write_reg8(bus, opcode >> 3, imm as u8);
        0
    }

    /// LD r,r' over 0x40-0x7F. 0x76 (what would be LD (HL),(HL)) is HALT
    /// and is routed away before reaching here.
    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(opcode != 0x76);

        let value = self.read_reg8(bus, opcode);
        self.write_reg8(bus, opcode >> 3, value);
        0
    }

    /// Address for LD (BC)/(DE)/(HL+)/(HL-), applying the HL post-step.
    fn indirect_address(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = self.indirect_address(opcode);
        bus.write8(addr, self.regs.a);
        0
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = self.indirect_address(opcode);
        self.regs.a = bus.read8(addr);
        0
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
        0
    }

    pub(super) fn exec_ldh_a8<B: Bus>(&mut self, bus: &mut B, opcode: u8, imm: u16) -> u32 {
        let addr = 0xFF00 | (imm & 0x00FF);
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        0
    }

    pub(super) fn exec_ldh_c<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let addr = 0xFF00 | u16::from(self.regs.c);
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        0
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B, opcode: u8, addr: u16) -> u32 {
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        0
    }

    /// LD HL,SP+r8 (0xF8) and LD SP,HL (0xF9).
    pub(super) fn exec_ld_sp_hl(&mut self, opcode: u8, imm: u16) -> u32 {
        debug_assert!(matches!(opcode, 0xF8 | 0xF9));

        if opcode == 0xF8 {
            let value = self.sp_offset(imm as u8);
            self.regs.set_hl(value);
        } else {
            self.regs.sp = self.regs.hl();
        }
        0
    }
}
