use crate::cpu::{Bus, Cpu};

/// Extra cost of a taken JR cc / JP cc over the not-taken path.
const JUMP_TAKEN: u32 = 4;
/// Extra cost of a taken CALL cc / RET cc.
const CALL_RET_TAKEN: u32 = 12;

impl Cpu {
    /// JR r8. The displacement is relative to the byte after the operand,
    /// which is where PC already points.
    pub(super) fn exec_jr(&mut self, imm: u16) -> u32 {
        self.regs.pc = self.regs.pc.wrapping_add(imm as u8 as i8 as u16);
        0
    }

    pub(super) fn exec_jr_cc(&mut self, opcode: u8, imm: u16) -> u32 {
        if !self.condition(opcode) {
            return 0;
        }
        self.exec_jr(imm);
        JUMP_TAKEN
    }

    pub(super) fn exec_jp(&mut self, addr: u16) -> u32 {
        self.regs.pc = addr;
        0
    }

    pub(super) fn exec_jp_cc(&mut self, opcode: u8, addr: u16) -> u32 {
        if !self.condition(opcode) {
            return 0;
        }
        self.regs.pc = addr;
        JUMP_TAKEN
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        0
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
        0
    }

    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8, addr: u16) -> u32 {
        if !self.condition(opcode) {
            return 0;
        }
        self.exec_call(bus, addr);
        CALL_RET_TAKEN
    }

    /// RET (0xC9) and RETI (0xD9). RETI re-enables interrupts immediately.
    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC9 | 0xD9));

        self.regs.pc = self.pop_u16(bus);
        if opcode == 0xD9 {
            self.ime = true;
        }
        0
    }

    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        if !self.condition(opcode) {
            return 0;
        }
        self.regs.pc = self.pop_u16(bus);
        CALL_RET_TAKEN
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0xC7);

        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(opcode & 0x38);
        0
    }
}
