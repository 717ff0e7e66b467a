use crate::error::DecodeFault;

use super::opcodes::instruction;
use super::{Bus, Cpu};

/// Cost of one idle slot while halted.
const HALT_IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Run one instruction, interrupt dispatch or idle HALT slot.
    ///
    /// Returns the T-cycles consumed. An undefined opcode stops the CPU with
    /// a [`DecodeFault`]; PC is left on the opcode so the caller can inspect
    /// or resume the machine.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, DecodeFault> {
        let cycles = self.step_inner(bus)?;
        self.cycles += u64::from(cycles);
        Ok(cycles)
    }

    fn step_inner<B: Bus>(&mut self, bus: &mut B) -> Result<u32, DecodeFault> {
        if let Some(cycles) = self.service_interrupt(bus) {
            return Ok(cycles);
        }

        if self.halted {
            if Self::pending_interrupts(bus) == 0 {
                return Ok(HALT_IDLE_CYCLES);
            }
            // A pending interrupt ends HALT even with IME clear; execution
            // resumes after the HALT without dispatching.
            self.halted = false;
        }

        let opcode_pc = self.regs.pc;
        let opcode = bus.read8(opcode_pc);

        let cycles = if opcode == 0xCB {
            self.regs.pc = opcode_pc.wrapping_add(1);
            self.exec_cb(bus)
        } else {
            let instr = instruction(opcode);
            let imm = Self::read_immediate(bus, opcode_pc, instr.length);
            self.regs.pc = opcode_pc.wrapping_add(u16::from(instr.length));
            match self.exec_opcode(bus, opcode, imm) {
                Some(extra) => u32::from(instr.cycles) + extra,
                None => {
                    self.regs.pc = opcode_pc;
                    return Err(self.decode_fault(opcode_pc, opcode, false));
                }
            }
        };

        self.apply_ime_delay();
        Ok(cycles)
    }

    fn decode_fault(&self, address: u16, opcode: u8, prefixed: bool) -> DecodeFault {
        let fault = DecodeFault {
            address,
            opcode,
            mnemonic: instruction(opcode).mnemonic,
            prefixed,
            registers: self.regs,
        };
        log::error!("GB CPU {fault}");
        fault
    }
}
