use crate::cpu::{Cpu, Flag};

impl Cpu {
    /// STOP. The padding byte is part of the instruction length; with no
    /// speed switch or low-power mode to model this behaves as NOP.
    pub(super) fn exec_stop(&mut self) -> u32 {
        log::trace!("GB CPU STOP at {:04X}", self.regs.pc.wrapping_sub(2));
        0
    }

    pub(super) fn exec_halt(&mut self) -> u32 {
        self.halted = true;
        0
    }

    pub(super) fn exec_di_ei(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xF3 | 0xFB));

        if opcode == 0xFB {
            self.ime_pending = true;
        } else {
            self.ime = false;
            self.ime_pending = false;
            self.ime_armed = false;
        }
        0
    }

    /// RLCA, RRCA, RLA, RRA. Same as the CB forms on A except Z is always
    /// cleared.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a;
        self.regs.a = self.shift_op(opcode >> 3, a);
        self.set_flag(Flag::Z, false);
        0
    }

    /// DAA, CPL, SCF, CCF.
    pub(super) fn exec_accumulator_misc(&mut self, opcode: u8) -> u32 {
        match opcode {
            0x27 => self.daa(),
            0x2F => {
                self.regs.a = !self.regs.a;
                self.set_flag(Flag::N, true);
                self.set_flag(Flag::H, true);
            }
            0x37 => {
                let z = self.get_flag(Flag::Z);
                self.set_flags(z, false, false, true);
            }
            _ => {
                let z = self.get_flag(Flag::Z);
                let c = self.get_flag(Flag::C);
                self.set_flags(z, false, false, !c);
            }
        }
        0
    }
}
