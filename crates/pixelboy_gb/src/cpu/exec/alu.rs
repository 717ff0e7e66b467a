use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_alu_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x80..=0xBF));

        let value = self.read_reg8(bus, opcode);
        self.alu_op(opcode >> 3, value);
        0
    }

    pub(super) fn exec_alu_d8(&mut self, opcode: u8, imm: u16) -> u32 {
        self.alu_op(opcode >> 3, imm as u8);
        0
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.regs.rp(opcode >> 4);
        self.add16_hl(value);
        0
    }

    pub(super) fn exec_add_sp_r8(&mut self, imm: u16) -> u32 {
        self.regs.sp = self.sp_offset(imm as u8);
        0
    }
}
