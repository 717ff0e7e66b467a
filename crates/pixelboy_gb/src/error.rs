use thiserror::Error;

use crate::cpu::Registers;

/// The CPU fetched an opcode with no defined instruction.
///
/// On hardware these opcodes hang the CPU. The core stops instead and hands
/// back everything needed to diagnose the ROM: `registers.pc` still points
/// at the offending opcode and no other state has been touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("undefined opcode {opcode:02X} ({mnemonic}) at {address:04X}, prefixed={prefixed} [{registers}]")]
pub struct DecodeFault {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub prefixed: bool,
    pub registers: Registers,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("header should be at least 336 bytes, was {len} bytes")]
    HeaderTooShort { len: usize },
    #[error("ROM image of {len} bytes exceeds the 2MB the banking controller can address")]
    RomTooLarge { len: usize },
    #[error("unsupported mapper byte in cartridge header: {mapper_byte:02X}")]
    UnsupportedMapper { mapper_byte: u8 },
}
