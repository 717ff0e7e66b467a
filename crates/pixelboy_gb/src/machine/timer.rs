use crate::interrupt::Interrupt;

use super::memory::{Memory, DIV, TAC, TIMA, TMA};

/// T-cycles per DIV increment (16384 Hz).
const DIV_PERIOD: u32 = 256;
/// T-cycles per TIMA increment, indexed by TAC bits 0-1.
const TIMA_PERIODS: [u32; 4] = [1024, 16, 64, 256];

/// Divider and programmable timer.
///
/// The registers themselves live in memory; this only keeps the cycles
/// that have not yet added up to a whole DIV or TIMA increment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    div_cycles: u32,
    tima_cycles: u32,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for `cycles` T-cycles of elapsed time.
    pub fn advance(&mut self, cycles: u32, memory: &mut Memory) {
        // DIV and TIMA share one divider; a DIV write restarts both.
        if memory.take_div_reset() {
            self.div_cycles = 0;
            self.tima_cycles = 0;
        }

        self.div_cycles += cycles;
        while self.div_cycles >= DIV_PERIOD {
            self.div_cycles -= DIV_PERIOD;
            let div = memory.io_read(DIV);
            memory.io_write(DIV, div.wrapping_add(1));
        }

        let tac = memory.io_read(TAC);
        if tac & 0x04 == 0 {
            return;
        }

        let period = TIMA_PERIODS[usize::from(tac & 0x03)];
        self.tima_cycles += cycles;
        while self.tima_cycles >= period {
            self.tima_cycles -= period;
            match memory.io_read(TIMA).checked_add(1) {
                Some(tima) => memory.io_write(TIMA, tima),
                None => {
                    memory.io_write(TIMA, memory.io_read(TMA));
                    memory.request_interrupt(Interrupt::Timer);
                }
            }
        }
    }
}
