//! LR35902 interpreter.
//!
//! `Cpu::step` executes one instruction (or one interrupt dispatch, or one
//! idle HALT slot) against anything implementing [`Bus`] and reports how many
//! T-cycles it took. Instruction metadata lives in [`opcodes`]; semantics are
//! split by instruction group under `exec/`.

mod alu;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
pub mod opcodes;
mod regs;
mod step;
mod trace;

#[cfg(test)]
mod tests;

pub use opcodes::Instruction;
pub use regs::{Flag, Registers};

/// Byte-addressed view of the machine as seen by the CPU.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    #[inline]
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// EI was executed; IME turns on once the following instruction retires.
    ime_pending: bool,
    ime_armed: bool,
    /// Total T-cycles consumed since power-on.
    pub cycles: u64,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.f & flag.mask() != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= flag.mask();
        } else {
            self.regs.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// Overwrite all four flags at once.
    #[inline]
    pub(crate) fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.regs.f = (u8::from(z) << 7) | (u8::from(n) << 6) | (u8::from(h) << 5) | (u8::from(c) << 4);
    }
}
