use crate::interrupt::{Interrupt, IE_ADDR, IF_ADDR};

use super::{Bus, Cpu};

/// Cost of an interrupt dispatch (two idle M-cycles, two pushes, jump).
const DISPATCH_CYCLES: u32 = 20;

impl Cpu {
    /// Requested-and-enabled interrupt lines.
    #[inline]
    pub(super) fn pending_interrupts<B: Bus>(bus: &mut B) -> u8 {
        bus.read8(IE_ADDR) & bus.read8(IF_ADDR) & 0x1F
    }

    /// Dispatch the highest-priority pending interrupt if IME allows it.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken.
    pub(super) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.ime {
            return None;
        }
        let interrupt = Interrupt::highest_priority(Self::pending_interrupts(bus))?;

        self.ime = false;
        self.halted = false;

        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !interrupt.bit());

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();

        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} from pc=0x{:04X} sp=0x{:04X}",
            interrupt,
            self.regs.pc,
            pc,
            self.regs.sp,
        );

        Some(DISPATCH_CYCLES)
    }

    /// Advance the EI delay by one retired instruction.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_armed {
            self.ime = true;
            self.ime_armed = false;
        } else if self.ime_pending {
            self.ime_pending = false;
            self.ime_armed = true;
        }
    }
}
