use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A CPU in the state the DMG boot ROM leaves behind at 0x0100.
    pub fn new() -> Self {
        Self {
            regs: Registers::DMG_BOOT,
            ime: false,
            halted: false,
            ime_pending: false,
            ime_armed: false,
            cycles: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Start from an arbitrary register file, e.g. when replaying a trace.
    pub fn with_registers(regs: Registers) -> Self {
        Self {
            regs,
            ..Self::new()
        }
    }
}
