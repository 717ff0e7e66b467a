/// Static per-opcode metadata.
///
/// `length` is the full encoded length in bytes (including the 0xCB prefix
/// for extension opcodes) and `cycles` is the T-cycle cost of the
/// instruction when a conditional branch is *not* taken. The semantics live
/// in `Cpu::exec_opcode` / `Cpu::exec_cb`, keyed off the same opcode byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
}

const fn op(mnemonic: &'static str, length: u8, cycles: u8) -> Instruction {
    Instruction {
        mnemonic,
        length,
        cycles,
    }
}

/// Look up the descriptor of a base opcode.
#[inline]
pub fn instruction(opcode: u8) -> &'static Instruction {
    &INSTRUCTIONS[opcode as usize]
}

/// Look up the descriptor of a CB-prefixed opcode.
#[inline]
pub fn cb_instruction(opcode: u8) -> &'static Instruction {
    &CB_INSTRUCTIONS[opcode as usize]
}

#[rustfmt::skip]
pub static INSTRUCTIONS: [Instruction; 256] = [
    // 0x00
    op("NOP", 1, 4),            op("LD BC, d16", 3, 12),    op("LD (BC), A", 1, 8),     op("INC BC", 1, 8),
    op("INC B", 1, 4),          op("DEC B", 1, 4),          op("LD B, d8", 2, 8),       op("RLCA", 1, 4),
    op("LD (a16), SP", 3, 20),  op("ADD HL, BC", 1, 8),     op("LD A, (BC)", 1, 8),     op("DEC BC", 1, 8),
    op("INC C", 1, 4),          op("DEC C", 1, 4),          op("LD C, d8", 2, 8),       op("RRCA", 1, 4),
    // 0x10
    op("STOP", 2, 4),           op("LD DE, d16", 3, 12),    op("LD (DE), A", 1, 8),     op("INC DE", 1, 8),
    op("INC D", 1, 4),          op("DEC D", 1, 4),          op("LD D, d8", 2, 8),       op("RLA", 1, 4),
    op("JR r8", 2, 12),         op("ADD HL, DE", 1, 8),     op("LD A, (DE)", 1, 8),     op("DEC DE", 1, 8),
    op("INC E", 1, 4),          op("DEC E", 1, 4),          op("LD E, d8", 2, 8),       op("RRA", 1, 4),
    // 0x20
    op("JR NZ, r8", 2, 8),      op("LD HL, d16", 3, 12),    op("LD (HL+), A", 1, 8),    op("INC HL", 1, 8),
    op("INC H", 1, 4),          op("DEC H", 1, 4),          op("LD H, d8", 2, 8),       op("DAA", 1, 4),
    op("JR Z, r8", 2, 8),       op("ADD HL, HL", 1, 8),     op("LD A, (HL+)", 1, 8),    op("DEC HL", 1, 8),
    op("INC L", 1, 4),          op("DEC L", 1, 4),          op("LD L, d8", 2, 8),       op("CPL", 1, 4),
    // 0x30
    op("JR NC, r8", 2, 8),      op("LD SP, d16", 3, 12),    op("LD (HL-), A", 1, 8),    op("INC SP", 1, 8),
    op("INC (HL)", 1, 12),      op("DEC (HL)", 1, 12),      op("LD (HL), d8", 2, 12),   op("SCF", 1, 4),
    op("JR C, r8", 2, 8),       op("ADD HL, SP", 1, 8),     op("LD A, (HL-)", 1, 8),    op("DEC SP", 1, 8),
    op("INC A", 1, 4),          op("DEC A", 1, 4),          op("LD A, d8", 2, 8),       op("CCF", 1, 4),
    // 0x40
    op("LD B, B", 1, 4),        op("LD B, C", 1, 4),        op("LD B, D", 1, 4),        op("LD B, E", 1, 4),
    op("LD B, H", 1, 4),        op("LD B, L", 1, 4),        op("LD B, (HL)", 1, 8),     op("LD B, A", 1, 4),
    op("LD C, B", 1, 4),        op("LD C, C", 1, 4),        op("LD C, D", 1, 4),        op("LD C, E", 1, 4),
    op("LD C, H", 1, 4),        op("LD C, L", 1, 4),        op("LD C, (HL)", 1, 8),     op("LD C, A", 1, 4),
    // 0x50
    op("LD D, B", 1, 4),        op("LD D, C", 1, 4),        op("LD D, D", 1, 4),        op("LD D, E", 1, 4),
    op("LD D, H", 1, 4),        op("LD D, L", 1, 4),        op("LD D, (HL)", 1, 8),     op("LD D, A", 1, 4),
    op("LD E, B", 1, 4),        op("LD E, C", 1, 4),        op("LD E, D", 1, 4),        op("LD E, E", 1, 4),
    op("LD E, H", 1, 4),        op("LD E, L", 1, 4),        op("LD E, (HL)", 1, 8),     op("LD E, A", 1, 4),
    // 0x60
    op("LD H, B", 1, 4),        op("LD H, C", 1, 4),        op("LD H, D", 1, 4),        op("LD H, E", 1, 4),
    op("LD H, H", 1, 4),        op("LD H, L", 1, 4),        op("LD H, (HL)", 1, 8),     op("LD H, A", 1, 4),
    op("LD L, B", 1, 4),        op("LD L, C", 1, 4),        op("LD L, D", 1, 4),        op("LD L, E", 1, 4),
    op("LD L, H", 1, 4),        op("LD L, L", 1, 4),        op("LD L, (HL)", 1, 8),     op("LD L, A", 1, 4),
    // 0x70
    op("LD (HL), B", 1, 8),     op("LD (HL), C", 1, 8),     op("LD (HL), D", 1, 8),     op("LD (HL), E", 1, 8),
    op("LD (HL), H", 1, 8),     op("LD (HL), L", 1, 8),     op("HALT", 1, 4),           op("LD (HL), A", 1, 8),
    op("LD A, B", 1, 4),        op("LD A, C", 1, 4),        op("LD A, D", 1, 4),        op("LD A, E", 1, 4),
    op("LD A, H", 1, 4),        op("LD A, L", 1, 4),        op("LD A, (HL)", 1, 8),     op("LD A, A", 1, 4),
    // 0x80
    op("ADD A, B", 1, 4),       op("ADD A, C", 1, 4),       op("ADD A, D", 1, 4),       op("ADD A, E", 1, 4),
    op("ADD A, H", 1, 4),       op("ADD A, L", 1, 4),       op("ADD A, (HL)", 1, 8),    op("ADD A, A", 1, 4),
    op("ADC A, B", 1, 4),       op("ADC A, C", 1, 4),       op("ADC A, D", 1, 4),       op("ADC A, E", 1, 4),
    op("ADC A, H", 1, 4),       op("ADC A, L", 1, 4),       op("ADC A, (HL)", 1, 8),    op("ADC A, A", 1, 4),
    // 0x90
    op("SUB B", 1, 4),          op("SUB C", 1, 4),          op("SUB D", 1, 4),          op("SUB E", 1, 4),
    op("SUB H", 1, 4),          op("SUB L", 1, 4),          op("SUB (HL)", 1, 8),       op("SUB A", 1, 4),
    op("SBC A, B", 1, 4),       op("SBC A, C", 1, 4),       op("SBC A, D", 1, 4),       op("SBC A, E", 1, 4),
    op("SBC A, H", 1, 4),       op("SBC A, L", 1, 4),       op("SBC A, (HL)", 1, 8),    op("SBC A, A", 1, 4),
    // 0xA0
    op("AND B", 1, 4),          op("AND C", 1, 4),          op("AND D", 1, 4),          op("AND E", 1, 4),
    op("AND H", 1, 4),          op("AND L", 1, 4),          op("AND (HL)", 1, 8),       op("AND A", 1, 4),
    op("XOR B", 1, 4),          op("XOR C", 1, 4),          op("XOR D", 1, 4),          op("XOR E", 1, 4),
    op("XOR H", 1, 4),          op("XOR L", 1, 4),          op("XOR (HL)", 1, 8),       op("XOR A", 1, 4),
    // 0xB0
    op("OR B", 1, 4),           op("OR C", 1, 4),           op("OR D", 1, 4),           op("OR E", 1, 4),
    op("OR H", 1, 4),           op("OR L", 1, 4),           op("OR (HL)", 1, 8),        op("OR A", 1, 4),
    op("CP B", 1, 4),           op("CP C", 1, 4),           op("CP D", 1, 4),           op("CP E", 1, 4),
    op("CP H", 1, 4),           op("CP L", 1, 4),           op("CP (HL)", 1, 8),        op("CP A", 1, 4),
    // 0xC0
    op("RET NZ", 1, 8),         op("POP BC", 1, 12),        op("JP NZ, a16", 3, 12),    op("JP a16", 3, 16),
    op("CALL NZ, a16", 3, 12),  op("PUSH BC", 1, 16),       op("ADD A, d8", 2, 8),      op("RST 00H", 1, 16),
    op("RET Z", 1, 8),          op("RET", 1, 16),           op("JP Z, a16", 3, 12),     op("PREFIX CB", 1, 4),
    op("CALL Z, a16", 3, 12),   op("CALL a16", 3, 24),      op("ADC A, d8", 2, 8),      op("RST 08H", 1, 16),
    // 0xD0
    op("RET NC", 1, 8),         op("POP DE", 1, 12),        op("JP NC, a16", 3, 12),    op("ILLEGAL_D3", 1, 4),
    op("CALL NC, a16", 3, 12),  op("PUSH DE", 1, 16),       op("SUB d8", 2, 8),         op("RST 10H", 1, 16),
    op("RET C", 1, 8),          op("RETI", 1, 16),          op("JP C, a16", 3, 12),     op("ILLEGAL_DB", 1, 4),
    op("CALL C, a16", 3, 12),   op("ILLEGAL_DD", 1, 4),     op("SBC A, d8", 2, 8),      op("RST 18H", 1, 16),
    // 0xE0
    op("LDH (a8), A", 2, 12),   op("POP HL", 1, 12),        op("LD (C), A", 1, 8),      op("ILLEGAL_E3", 1, 4),
    op("ILLEGAL_E4", 1, 4),     op("PUSH HL", 1, 16),       op("AND d8", 2, 8),         op("RST 20H", 1, 16),
    op("ADD SP, r8", 2, 16),    op("JP (HL)", 1, 4),        op("LD (a16), A", 3, 16),   op("ILLEGAL_EB", 1, 4),
    op("ILLEGAL_EC", 1, 4),     op("ILLEGAL_ED", 1, 4),     op("XOR d8", 2, 8),         op("RST 28H", 1, 16),
    // 0xF0
    op("LDH A, (a8)", 2, 12),   op("POP AF", 1, 12),        op("LD A, (C)", 1, 8),      op("DI", 1, 4),
    op("ILLEGAL_F4", 1, 4),     op("PUSH AF", 1, 16),       op("OR d8", 2, 8),          op("RST 30H", 1, 16),
    op("LD HL, SP+r8", 2, 12),  op("LD SP, HL", 1, 8),      op("LD A, (a16)", 3, 16),   op("EI", 1, 4),
    op("ILLEGAL_FC", 1, 4),     op("ILLEGAL_FD", 1, 4),     op("CP d8", 2, 8),          op("RST 38H", 1, 16),
];

#[rustfmt::skip]
pub static CB_INSTRUCTIONS: [Instruction; 256] = [
    // 0x00
    op("RLC B", 2, 8),    op("RLC C", 2, 8),    op("RLC D", 2, 8),    op("RLC E", 2, 8),
    op("RLC H", 2, 8),    op("RLC L", 2, 8),    op("RLC (HL)", 2, 16), op("RLC A", 2, 8),
    op("RRC B", 2, 8),    op("RRC C", 2, 8),    op("RRC D", 2, 8),    op("RRC E", 2, 8),
    op("RRC H", 2, 8),    op("RRC L", 2, 8),    op("RRC (HL)", 2, 16), op("RRC A", 2, 8),
    // 0x10
    op("RL B", 2, 8),     op("RL C", 2, 8),     op("RL D", 2, 8),     op("RL E", 2, 8),
    op("RL H", 2, 8),     op("RL L", 2, 8),     op("RL (HL)", 2, 16), op("RL A", 2, 8),
    op("RR B", 2, 8),     op("RR C", 2, 8),     op("RR D", 2, 8),     op("RR E", 2, 8),
    op("RR H", 2, 8),     op("RR L", 2, 8),     op("RR (HL)", 2, 16), op("RR A", 2, 8),
    // 0x20
    op("SLA B", 2, 8),    op("SLA C", 2, 8),    op("SLA D", 2, 8),    op("SLA E", 2, 8),
    op("SLA H", 2, 8),    op("SLA L", 2, 8),    op("SLA (HL)", 2, 16), op("SLA A", 2, 8),
    op("SRA B", 2, 8),    op("SRA C", 2, 8),    op("SRA D", 2, 8),    op("SRA E", 2, 8),
    op("SRA H", 2, 8),    op("SRA L", 2, 8),    op("SRA (HL)", 2, 16), op("SRA A", 2, 8),
    // 0x30
    op("SWAP B", 2, 8),   op("SWAP C", 2, 8),   op("SWAP D", 2, 8),   op("SWAP E", 2, 8),
    op("SWAP H", 2, 8),   op("SWAP L", 2, 8),   op("SWAP (HL)", 2, 16), op("SWAP A", 2, 8),
    op("SRL B", 2, 8),    op("SRL C", 2, 8),    op("SRL D", 2, 8),    op("SRL E", 2, 8),
    op("SRL H", 2, 8),    op("SRL L", 2, 8),    op("SRL (HL)", 2, 16), op("SRL A", 2, 8),
    // 0x40
    op("BIT 0, B", 2, 8), op("BIT 0, C", 2, 8), op("BIT 0, D", 2, 8), op("BIT 0, E", 2, 8),
    op("BIT 0, H", 2, 8), op("BIT 0, L", 2, 8), op("BIT 0, (HL)", 2, 12), op("BIT 0, A", 2, 8),
    op("BIT 1, B", 2, 8), op("BIT 1, C", 2, 8), op("BIT 1, D", 2, 8), op("BIT 1, E", 2, 8),
    op("BIT 1, H", 2, 8), op("BIT 1, L", 2, 8), op("BIT 1, (HL)", 2, 12), op("BIT 1, A", 2, 8),
    // 0x50
    op("BIT 2, B", 2, 8), op("BIT 2, C", 2, 8), op("BIT 2, D", 2, 8), op("BIT 2, E", 2, 8),
    op("BIT 2, H", 2, 8), op("BIT 2, L", 2, 8), op("BIT 2, (HL)", 2, 12), op("BIT 2, A", 2, 8),
    op("BIT 3, B", 2, 8), op("BIT 3, C", 2, 8), op("BIT 3, D", 2, 8), op("BIT 3, E", 2, 8),
    op("BIT 3, H", 2, 8), op("BIT 3, L", 2, 8), op("BIT 3, (HL)", 2, 12), op("BIT 3, A", 2, 8),
    // 0x60
    op("BIT 4, B", 2, 8), op("BIT 4, C", 2, 8), op("BIT 4, D", 2, 8), op("BIT 4, E", 2, 8),
    op("BIT 4, H", 2, 8), op("BIT 4, L", 2, 8), op("BIT 4, (HL)", 2, 12), op("BIT 4, A", 2, 8),
    op("BIT 5, B", 2, 8), op("BIT 5, C", 2, 8), op("BIT 5, D", 2, 8), op("BIT 5, E", 2, 8),
    op("BIT 5, H", 2, 8), op("BIT 5, L", 2, 8), op("BIT 5, (HL)", 2, 12), op("BIT 5, A", 2, 8),
    // 0x70
    op("BIT 6, B", 2, 8), op("BIT 6, C", 2, 8), op("BIT 6, D", 2, 8), op("BIT 6, E", 2, 8),
    op("BIT 6, H", 2, 8), op("BIT 6, L", 2, 8), op("BIT 6, (HL)", 2, 12), op("BIT 6, A", 2, 8),
    op("BIT 7, B", 2, 8), op("BIT 7, C", 2, 8), op("BIT 7, D", 2, 8), op("BIT 7, E", 2, 8),
    op("BIT 7, H", 2, 8), op("BIT 7, L", 2, 8), op("BIT 7, (HL)", 2, 12), op("BIT 7, A", 2, 8),
    // 0x80
    op("RES 0, B", 2, 8), op("RES 0, C", 2, 8), op("RES 0, D", 2, 8), op("RES 0, E", 2, 8),
    op("RES 0, H", 2, 8), op("RES 0, L", 2, 8), op("RES 0, (HL)", 2, 16), op("RES 0, A", 2, 8),
    op("RES 1, B", 2, 8), op("RES 1, C", 2, 8), op("RES 1, D", 2, 8), op("RES 1, E", 2, 8),
    op("RES 1, H", 2, 8), op("RES 1, L", 2, 8), op("RES 1, (HL)", 2, 16), op("RES 1, A", 2, 8),
    // 0x90
    op("RES 2, B", 2, 8), op("RES 2, C", 2, 8), op("RES 2, D", 2, 8), op("RES 2, E", 2, 8),
    op("RES 2, H", 2, 8), op("RES 2, L", 2, 8), op("RES 2, (HL)", 2, 16), op("RES 2, A", 2, 8),
    op("RES 3, B", 2, 8), op("RES 3, C", 2, 8), op("RES 3, D", 2, 8), op("RES 3, E", 2, 8),
    op("RES 3, H", 2, 8), op("RES 3, L", 2, 8), op("RES 3, (HL)", 2, 16), op("RES 3, A", 2, 8),
    // 0xA0
    op("RES 4, B", 2, 8), op("RES 4, C", 2, 8), op("RES 4, D", 2, 8), op("RES 4, E", 2, 8),
    op("RES 4, H", 2, 8), op("RES 4, L", 2, 8), op("RES 4, (HL)", 2, 16), op("RES 4, A", 2, 8),
    op("RES 5, B", 2, 8), op("RES 5, C", 2, 8), op("RES 5, D", 2, 8), op("RES 5, E", 2, 8),
    op("RES 5, H", 2, 8), op("RES 5, L", 2, 8), op("RES 5, (HL)", 2, 16), op("RES 5, A", 2, 8),
    // 0xB0
    op("RES 6, B", 2, 8), op("RES 6, C", 2, 8), op("RES 6, D", 2, 8), op("RES 6, E", 2, 8),
    op("RES 6, H", 2, 8), op("RES 6, L", 2, 8), op("RES 6, (HL)", 2, 16), op("RES 6, A", 2, 8),
    op("RES 7, B", 2, 8), op("RES 7, C", 2, 8), op("RES 7, D", 2, 8), op("RES 7, E", 2, 8),
    op("RES 7, H", 2, 8), op("RES 7, L", 2, 8), op("RES 7, (HL)", 2, 16), op("RES 7, A", 2, 8),
    // 0xC0
    op("SET 0, B", 2, 8), op("SET 0, C", 2, 8), op("SET 0, D", 2, 8), op("SET 0, E", 2, 8),
    op("SET 0, H", 2, 8), op("SET 0, L", 2, 8), op("SET 0, (HL)", 2, 16), op("SET 0, A", 2, 8),
    op("SET 1, B", 2, 8), op("SET 1, C", 2, 8), op("SET 1, D", 2, 8), op("SET 1, E", 2, 8),
    op("SET 1, H", 2, 8), op("SET 1, L", 2, 8), op("SET 1, (HL)", 2, 16), op("SET 1, A", 2, 8),
    // 0xD0
    op("SET 2, B", 2, 8), op("SET 2, C", 2, 8), op("SET 2, D", 2, 8), op("SET 2, E", 2, 8),
    op("SET 2, H", 2, 8), op("SET 2, L", 2, 8), op("SET 2, (HL)", 2, 16), op("SET 2, A", 2, 8),
    op("SET 3, B", 2, 8), op("SET 3, C", 2, 8), op("SET 3, D", 2, 8), op("SET 3, E", 2, 8),
    op("SET 3, H", 2, 8), op("SET 3, L", 2, 8), op("SET 3, (HL)", 2, 16), op("SET 3, A", 2, 8),
    // 0xE0
    op("SET 4, B", 2, 8), op("SET 4, C", 2, 8), op("SET 4, D", 2, 8), op("SET 4, E", 2, 8),
    op("SET 4, H", 2, 8), op("SET 4, L", 2, 8), op("SET 4, (HL)", 2, 16), op("SET 4, A", 2, 8),
    op("SET 5, B", 2, 8), op("SET 5, C", 2, 8), op("SET 5, D", 2, 8), op("SET 5, E", 2, 8),
    op("SET 5, H", 2, 8), op("SET 5, L", 2, 8), op("SET 5, (HL)", 2, 16), op("SET 5, A", 2, 8),
    // 0xF0
    op("SET 6, B", 2, 8), op("SET 6, C", 2, 8), op("SET 6, D", 2, 8), op("SET 6, E", 2, 8),
    op("SET 6, H", 2, 8), op("SET 6, L", 2, 8), op("SET 6, (HL)", 2, 16), op("SET 6, A", 2, 8),
    op("SET 7, B", 2, 8), op("SET 7, C", 2, 8), op("SET 7, D", 2, 8), op("SET 7, E", 2, 8),
    op("SET 7, H", 2, 8), op("SET 7, L", 2, 8), op("SET 7, (HL)", 2, 16), op("SET 7, A", 2, 8),
];
