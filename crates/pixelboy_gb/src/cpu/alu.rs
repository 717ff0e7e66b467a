use super::{Cpu, Flag};

impl Cpu {
    /// Apply one of the eight accumulator operations selected by bits 3-5 of
    /// the 0x80-0xBF block and the `op A, d8` immediates:
    /// ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
    pub(super) fn alu_op(&mut self, op: u8, value: u8) {
        let carry = self.get_flag(Flag::C);
        match op & 0x07 {
            0 => self.regs.a = self.add8(value, false),
            1 => self.regs.a = self.add8(value, carry),
            2 => self.regs.a = self.sub8(value, false),
            3 => self.regs.a = self.sub8(value, carry),
            4 => {
                self.regs.a &= value;
                self.set_flags(self.regs.a == 0, false, true, false);
            }
            5 => {
                self.regs.a ^= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            6 => {
                self.regs.a |= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            _ => {
                // CP discards the difference.
                self.sub8(value, false);
            }
        }
    }

    fn add8(&mut self, value: u8, carry_in: bool) -> u8 {
        let a = self.regs.a;
        let c = u8::from(carry_in);
        let wide = u16::from(a) + u16::from(value) + u16::from(c);
        let result = wide as u8;
        let half = (a & 0x0F) + (value & 0x0F) + c > 0x0F;
        self.set_flags(result == 0, false, half, wide > 0xFF);
        result
    }

    fn sub8(&mut self, value: u8, carry_in: bool) -> u8 {
        let a = self.regs.a;
        let c = u8::from(carry_in);
        let result = a.wrapping_sub(value).wrapping_sub(c);
        let half = (a & 0x0F) < (value & 0x0F) + c;
        let borrow = u16::from(a) < u16::from(value) + u16::from(c);
        self.set_flags(result == 0, true, half, borrow);
        result
    }

    /// INC r / INC (HL). C is left alone.
    pub(super) fn inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let carry = self.get_flag(Flag::C);
        self.set_flags(result == 0, false, value & 0x0F == 0x0F, carry);
        result
    }

    /// DEC r / DEC (HL). C is left alone.
    pub(super) fn dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let carry = self.get_flag(Flag::C);
        self.set_flags(result == 0, true, value & 0x0F == 0x00, carry);
        result
    }

    /// ADD HL,rr. Z is left alone; H comes from bit 11.
    pub(super) fn add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (result, carry) = hl.overflowing_add(value);
        let half = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        let zero = self.get_flag(Flag::Z);
        self.set_flags(zero, false, half, carry);
        self.regs.set_hl(result);
    }

    /// SP plus a signed displacement, shared by ADD SP,r8 and LD HL,SP+r8.
    /// H and C are computed on the unsigned low byte; Z and N are cleared.
    pub(super) fn sp_offset(&mut self, displacement: u8) -> u16 {
        let sp = self.regs.sp;
        let low = sp & 0x00FF;
        let d = u16::from(displacement);
        let half = (low & 0x0F) + (d & 0x0F) > 0x0F;
        let carry = low + d > 0xFF;
        self.set_flags(false, false, half, carry);
        sp.wrapping_add(displacement as i8 as u16)
    }

    /// Correct A after a BCD add or subtract, using N, H and C from the
    /// previous operation. N is preserved, H is cleared.
    pub(super) fn daa(&mut self) {
        let subtract = self.get_flag(Flag::N);
        let mut carry = self.get_flag(Flag::C);
        let mut correction = 0u8;

        if self.get_flag(Flag::H) || (!subtract && self.regs.a & 0x0F > 0x09) {
            correction |= 0x06;
        }
        if carry || (!subtract && self.regs.a > 0x99) {
            correction |= 0x60;
            carry = true;
        }

        self.regs.a = if subtract {
            self.regs.a.wrapping_sub(correction)
        } else {
            self.regs.a.wrapping_add(correction)
        };
        self.set_flags(self.regs.a == 0, subtract, false, carry);
    }

    /// The rotate/shift/swap family selected by bits 3-5 of a CB opcode:
    /// RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL. Sets Z from the result.
    pub(super) fn shift_op(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry) = match op & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };
        self.set_flags(result == 0, false, false, carry);
        result
    }
}
