use super::opcodes::cb_instruction;
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Execute the CB-prefixed instruction whose second byte sits at PC.
    ///
    /// Opcode fields: bits 6-7 pick the group (shift, BIT, RES, SET), bits
    /// 3-5 the shift kind or bit index, bits 0-2 the operand register.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let opcode = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);

        let group = opcode >> 6;
        let y = (opcode >> 3) & 0x07;
        let reg = opcode & 0x07;
        let value = self.read_reg8(bus, reg);

        match group {
            0 => {
                let result = self.shift_op(y, value);
                self.write_reg8(bus, reg, result);
            }
            1 => {
                let carry = self.get_flag(Flag::C);
                self.set_flags(value & (1 << y) == 0, false, true, carry);
            }
            2 => self.write_reg8(bus, reg, value & !(1 << y)),
            _ => self.write_reg8(bus, reg, value | (1 << y)),
        }

        u32::from(cb_instruction(opcode).cycles)
    }
}
