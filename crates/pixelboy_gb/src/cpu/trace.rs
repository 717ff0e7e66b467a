use super::{Bus, Cpu};

impl Cpu {
    /// One line of CPU state in the format used by gameboy-doctor style
    /// trace comparison: registers, then the four bytes at PC.
    ///
    /// Reads go through the bus, so MMIO side effects (if any) apply.
    pub fn trace_line<B: Bus>(&self, bus: &mut B) -> String {
        let r = &self.regs;
        let pc = r.pc;
        let mem = [
            bus.read8(pc),
            bus.read8(pc.wrapping_add(1)),
            bus.read8(pc.wrapping_add(2)),
            bus.read8(pc.wrapping_add(3)),
        ];
        format!(
            "A:{:02X} F:{:02X} B:{:02X} C:{:02X} D:{:02X} E:{:02X} H:{:02X} L:{:02X} SP:{:04X} PC:{:04X} PCMEM:{:02X},{:02X},{:02X},{:02X}",
            r.a, r.f, r.b, r.c, r.d, r.e, r.h, r.l, r.sp, pc, mem[0], mem[1], mem[2], mem[3],
        )
    }
}
