use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let reg = opcode >> 3;
        let value = self.read_reg8(bus, reg);
        let result = self.inc8(value);
        self.write_reg8(bus, reg, result);
        0
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let reg = opcode >> 3;
        let value = self.read_reg8(bus, reg);
        let result = self.dec8(value);
        self.write_reg8(bus, reg, result);
        0
    }

    /// INC rr / DEC rr. No flags change.
    pub(super) fn exec_incdec16(&mut self, opcode: u8) -> u32 {
        let rp = opcode >> 4;
        let value = self.regs.rp(rp);
        let value = if opcode & 0x08 == 0 {
            value.wrapping_add(1)
        } else {
            value.wrapping_sub(1)
        };
        self.regs.set_rp(rp, value);
        0
    }
}
