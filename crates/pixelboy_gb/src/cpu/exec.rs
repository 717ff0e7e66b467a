mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu};

impl Cpu {
    /// Execute a base (non-CB) opcode whose operand bytes have already been
    /// read into `imm` and with PC already past the instruction.
    ///
    /// Returns the cycles to add on top of the descriptor's cost (non-zero
    /// only for taken conditional branches), or `None` for the eleven
    /// opcodes the LR35902 leaves undefined.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, opcode: u8, imm: u16) -> Option<u32> {
        let extra = match opcode {
            0x00 => 0,
            0x10 => self.exec_stop(),
            0x76 => self.exec_halt(),
            0xF3 | 0xFB => self.exec_di_ei(opcode),
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),
            0x27 | 0x2F | 0x37 | 0x3F => self.exec_accumulator_misc(opcode),

            // Loads.
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_d16(opcode, imm),
            0x02 | 0x12 | 0x22 | 0x32 => self.exec_ld_indirect_a(bus, opcode),
            0x0A | 0x1A | 0x2A | 0x3A => self.exec_ld_a_indirect(bus, opcode),
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                self.exec_ld_r_d8(bus, opcode, imm)
            }
            0x08 => self.exec_ld_a16_sp(bus, imm),
            0x40..=0x7F => self.exec_ld_r_r(bus, opcode),
            0xE0 | 0xF0 => self.exec_ldh_a8(bus, opcode, imm),
            0xE2 | 0xF2 => self.exec_ldh_c(bus, opcode),
            0xEA | 0xFA => self.exec_ld_a16_a(bus, opcode, imm),
            0xF8 | 0xF9 => self.exec_ld_sp_hl(opcode, imm),

            // Arithmetic.
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => self.exec_inc8(bus, opcode),
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => self.exec_dec8(bus, opcode),
            0x03 | 0x13 | 0x23 | 0x33 | 0x0B | 0x1B | 0x2B | 0x3B => self.exec_incdec16(opcode),
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(opcode),
            0x80..=0xBF => self.exec_alu_r(bus, opcode),
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => self.exec_alu_d8(opcode, imm),
            0xE8 => self.exec_add_sp_r8(imm),

            // Control flow.
            0x18 => self.exec_jr(imm),
            0x20 | 0x28 | 0x30 | 0x38 => self.exec_jr_cc(opcode, imm),
            0xC3 => self.exec_jp(imm),
            0xC2 | 0xCA | 0xD2 | 0xDA => self.exec_jp_cc(opcode, imm),
            0xE9 => self.exec_jp_hl(),
            0xCD => self.exec_call(bus, imm),
            0xC4 | 0xCC | 0xD4 | 0xDC => self.exec_call_cc(bus, opcode, imm),
            0xC9 | 0xD9 => self.exec_ret(bus, opcode),
            0xC0 | 0xC8 | 0xD0 | 0xD8 => self.exec_ret_cc(bus, opcode),
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(bus, opcode),

            // Stack.
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop(bus, opcode),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push(bus, opcode),

            // 0xCB is handled by the caller. What remains are the holes
            // D3 DB DD E3 E4 EB EC ED F4 FC FD.
            _ => return None,
        };
        Some(extra)
    }
}
