use super::*;
use crate::error::DecodeFault;
use crate::interrupt::{Interrupt, IE_ADDR, IF_ADDR};

struct TestBus {
    memory: Vec<u8>,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: vec![0; 0x10000],
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

/// CPU in post-boot state with `program` loaded at 0x0100.
fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let mut bus = TestBus::default();
    bus.memory[0x0100..0x0100 + program.len()].copy_from_slice(program);
    (Cpu::new(), bus)
}

fn run(cpu: &mut Cpu, bus: &mut TestBus, steps: usize) -> u32 {
    (0..steps).map(|_| cpu.step(bus).unwrap()).sum()
}

fn flags(cpu: &Cpu) -> (bool, bool, bool, bool) {
    (
        cpu.get_flag(Flag::Z),
        cpu.get_flag(Flag::N),
        cpu.get_flag(Flag::H),
        cpu.get_flag(Flag::C),
    )
}

#[test]
fn power_on_state_matches_dmg_boot() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);
    assert!(!cpu.halted);
}

#[test]
fn start_from_custom_registers_then_reset() {
    let regs = Registers {
        a: 0x42,
        pc: 0xC000,
        ..Registers::DMG_BOOT
    };
    let mut cpu = Cpu::with_registers(regs);
    assert_eq!(cpu.regs, regs);
    assert!(!cpu.ime);
    assert_eq!(cpu.cycles, 0);

    // Zeroed memory is a run of NOPs.
    let mut bus = TestBus::default();
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.regs.pc, 0xC001);

    cpu.clear_flags();
    assert_eq!(flags(&cpu), (false, false, false, false));
    assert_eq!(cpu.regs.af(), 0x4200);

    cpu.reset();
    assert_eq!(cpu, Cpu::new());
}

#[test]
fn register_pairs_mask_f_low_nibble() {
    let mut regs = Registers::default();
    regs.set_af(0x12FF);
    assert_eq!(regs.a, 0x12);
    assert_eq!(regs.f, 0xF0);
    assert_eq!(regs.af(), 0x12F0);

    regs.set_hl(0xBEEF);
    assert_eq!((regs.h, regs.l), (0xBE, 0xEF));
}

#[test]
fn opcode_tables_are_consistent() {
    for op in 0..=255u8 {
        let base = opcodes::instruction(op);
        assert!((1..=3).contains(&base.length), "{op:02X}");
        assert!(base.cycles >= 4 && base.cycles % 4 == 0, "{op:02X}");

        let cb = opcodes::cb_instruction(op);
        assert_eq!(cb.length, 2);
        let expected = match (op >> 6, op & 0x07) {
            (_, r) if r != 6 => 8,
            (1, _) => 12,
            _ => 16,
        };
        assert_eq!(cb.cycles, expected, "CB {op:02X}");
    }
    assert_eq!(opcodes::instruction(0xCB).cycles, 4);
    assert_eq!(opcodes::instruction(0x10).length, 2);
    assert_eq!(opcodes::instruction(0xCD).cycles, 24);
}

#[test]
fn inc_wraps_to_zero_with_half_carry() {
    // LD A,0xFF ; SCF ; INC A
    let (mut cpu, mut bus) = setup(&[0x3E, 0xFF, 0x37, 0x3C]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.a, 0x00);
    // C is left as SCF set it.
    assert_eq!(flags(&cpu), (true, false, true, true));
}

#[test]
fn dec_from_zero_borrows_nibble() {
    // LD B,0x00 ; DEC B
    let (mut cpu, mut bus) = setup(&[0x06, 0x00, 0x05]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.b, 0xFF);
    let (z, n, h, _) = flags(&cpu);
    assert_eq!((z, n, h), (false, true, true));
}

#[test]
fn inc_dec_hl_indirect() {
    // LD HL,0xC000 ; INC (HL) ; INC (HL) ; DEC (HL)
    let (mut cpu, mut bus) = setup(&[0x21, 0x00, 0xC0, 0x34, 0x34, 0x35]);
    bus.memory[0xC000] = 0x0F;
    let cycles = run(&mut cpu, &mut bus, 4);
    assert_eq!(bus.memory[0xC000], 0x10);
    assert_eq!(cycles, 12 + 12 + 12 + 12);
}

#[test]
fn push_pop_round_trips_and_restores_sp() {
    // LD BC,0x1234 ; PUSH BC ; POP DE
    let (mut cpu, mut bus) = setup(&[0x01, 0x34, 0x12, 0xC5, 0xD1]);
    let sp = cpu.regs.sp;
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.sp, sp.wrapping_sub(2));
    assert_eq!(bus.memory[cpu.regs.sp as usize], 0x34);
    assert_eq!(bus.memory[cpu.regs.sp as usize + 1], 0x12);

    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.regs.sp, sp);
}

#[test]
fn pop_af_drops_low_flag_bits() {
    // LD BC,0x12FF ; PUSH BC ; POP AF
    let (mut cpu, mut bus) = setup(&[0x01, 0xFF, 0x12, 0xC5, 0xF1]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.af(), 0x12F0);
}

#[test]
fn call_and_ret() {
    // 0x0100: CALL 0x0200 ; 0x0200: RET
    let (mut cpu, mut bus) = setup(&[0xCD, 0x00, 0x02]);
    bus.memory[0x0200] = 0xC9;

    assert_eq!(cpu.step(&mut bus).unwrap(), 24);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x03);
    assert_eq!(bus.memory[0xFFFD], 0x01);

    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_branch_costs() {
    // XOR A (Z=1) ; JR NZ,+2 (not taken) ; JR Z,+0 (taken)
    let (mut cpu, mut bus) = setup(&[0xAF, 0x20, 0x02, 0x28, 0x00]);
    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.step(&mut bus).unwrap(), 8);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.step(&mut bus).unwrap(), 12);
    assert_eq!(cpu.regs.pc, 0x0105);

    // Z still set: CALL Z taken, RET Z taken, JP NZ not taken.
    bus.memory[0x0105..0x0108].copy_from_slice(&[0xCC, 0x00, 0x03]);
    bus.memory[0x0300] = 0xC8;
    bus.memory[0x0108..0x010B].copy_from_slice(&[0xC2, 0x00, 0x40]);
    assert_eq!(cpu.step(&mut bus).unwrap(), 24);
    assert_eq!(cpu.step(&mut bus).unwrap(), 20);
    assert_eq!(cpu.regs.pc, 0x0108);
    assert_eq!(cpu.step(&mut bus).unwrap(), 12);
    assert_eq!(cpu.regs.pc, 0x010B);
}

#[test]
fn jr_backwards() {
    // 0x0100: NOP ; JR -3 -> back to 0x0100
    let (mut cpu, mut bus) = setup(&[0x00, 0x18, 0xFD]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn rst_pushes_return_address() {
    let (mut cpu, mut bus) = setup(&[0xEF]);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.read16(cpu.regs.sp), 0x0101);
}

#[test]
fn daa_after_bcd_add() {
    // LD A,0x0F ; ADD A,0x0F ; DAA
    let (mut cpu, mut bus) = setup(&[0x3E, 0x0F, 0xC6, 0x0F, 0x27]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.a, 0x1E);
    assert!(cpu.get_flag(Flag::H));

    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.a, 0x24);
    assert!(!cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::H));
}

#[test]
fn daa_after_bcd_subtract() {
    // LD A,0x10 ; SUB 0x01 ; DAA -> 0x09
    let (mut cpu, mut bus) = setup(&[0x3E, 0x10, 0xD6, 0x01, 0x27]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.a, 0x09);
    assert!(cpu.get_flag(Flag::N));
}

#[test]
fn sub_and_sbc_flags() {
    // LD A,0x10 ; SCF ; SBC A,0x0F -> 0x00, H set, no carry
    let (mut cpu, mut bus) = setup(&[0x3E, 0x10, 0x37, 0xDE, 0x0F]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(flags(&cpu), (true, true, true, false));
}

#[test]
fn cp_leaves_a_untouched() {
    // LD A,0x05 ; CP 0x06
    let (mut cpu, mut bus) = setup(&[0x3E, 0x05, 0xFE, 0x06]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.a, 0x05);
    assert_eq!(flags(&cpu), (false, true, true, true));
}

#[test]
fn add_hl_keeps_zero_flag() {
    // XOR A (Z=1) ; LD HL,0x0FFF ; LD BC,0x0001 ; ADD HL,BC
    let (mut cpu, mut bus) = setup(&[0xAF, 0x21, 0xFF, 0x0F, 0x01, 0x01, 0x00, 0x09]);
    run(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert_eq!(flags(&cpu), (true, false, true, false));
}

#[test]
fn add_sp_signed_offset() {
    // LD SP,0x00FF ; ADD SP,-1 ; LD HL,SP+2
    let (mut cpu, mut bus) = setup(&[0x31, 0xFF, 0x00, 0xE8, 0xFF, 0xF8, 0x02]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.sp, 0x00FE);
    assert_eq!(flags(&cpu), (false, false, true, true));

    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.hl(), 0x0100);
    assert_eq!(flags(&cpu), (false, false, true, true));
}

#[test]
fn ldi_ldd_step_hl() {
    // LD HL,0xC000 ; LD A,0x42 ; LD (HL+),A ; LD (HL-),A
    let (mut cpu, mut bus) = setup(&[0x21, 0x00, 0xC0, 0x3E, 0x42, 0x22, 0x32]);
    run(&mut cpu, &mut bus, 4);
    assert_eq!(bus.memory[0xC000], 0x42);
    assert_eq!(bus.memory[0xC001], 0x42);
    assert_eq!(cpu.regs.hl(), 0xC000);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    let (mut cpu, mut bus) = setup(&[0x08, 0x00, 0xC1]);
    assert_eq!(cpu.step(&mut bus).unwrap(), 20);
    assert_eq!(bus.memory[0xC100], 0xFE);
    assert_eq!(bus.memory[0xC101], 0xFF);
}

#[test]
fn rotate_a_clears_zero() {
    // XOR A ; RLCA
    let (mut cpu, mut bus) = setup(&[0xAF, 0x07]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.a, 0);
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn cb_operations() {
    // LD A,0x81 ; CB RLC A ; CB SWAP A ; CB BIT 7,A ; CB RES 0,A ; CB SET 7,B
    let (mut cpu, mut bus) = setup(&[
        0x3E, 0x81, 0xCB, 0x07, 0xCB, 0x37, 0xCB, 0x7F, 0xCB, 0x87, 0xCB, 0xF8,
    ]);
    run(&mut cpu, &mut bus, 1);

    assert_eq!(cpu.step(&mut bus).unwrap(), 8);
    assert_eq!(cpu.regs.a, 0x03);
    assert!(cpu.get_flag(Flag::C));

    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.a, 0x30);
    assert!(!cpu.get_flag(Flag::C));

    run(&mut cpu, &mut bus, 1);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));

    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.a, 0x30);
    assert_eq!(cpu.regs.b, 0x80);
    assert_eq!(cpu.regs.pc, 0x010C);
}

#[test]
fn cb_hl_indirect_costs() {
    // LD HL,0xC000 ; BIT 0,(HL) ; SET 0,(HL) ; SRL (HL)
    let (mut cpu, mut bus) = setup(&[0x21, 0x00, 0xC0, 0xCB, 0x46, 0xCB, 0xC6, 0xCB, 0x3E]);
    bus.memory[0xC000] = 0x80;
    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.step(&mut bus).unwrap(), 12);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(bus.memory[0xC000], 0x81);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(bus.memory[0xC000], 0x40);
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn interrupt_priority_and_dispatch() {
    let (mut cpu, mut bus) = setup(&[0x00]);
    cpu.ime = true;
    bus.memory[IE_ADDR as usize] = 0x1F;
    bus.memory[IF_ADDR as usize] = Interrupt::Timer.bit() | Interrupt::VBlank.bit();

    assert_eq!(cpu.step(&mut bus).unwrap(), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert!(!cpu.ime);
    assert_eq!(bus.memory[IF_ADDR as usize], Interrupt::Timer.bit());
    assert_eq!(bus.read16(cpu.regs.sp), 0x0100);

    // IME is now clear, so Timer stays pending until RETI.
    bus.memory[0x0040] = 0xD9;
    run(&mut cpu, &mut bus, 1);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0100);
    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.memory[IF_ADDR as usize], 0);
}

#[test]
fn disabled_interrupts_are_not_dispatched() {
    let (mut cpu, mut bus) = setup(&[0x00]);
    cpu.ime = true;
    bus.memory[IE_ADDR as usize] = Interrupt::Joypad.bit();
    bus.memory[IF_ADDR as usize] = Interrupt::VBlank.bit();
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.regs.pc, 0x0101);
}

#[test]
fn ei_takes_effect_after_next_instruction() {
    // EI ; NOP ; NOP
    let (mut cpu, mut bus) = setup(&[0xFB, 0x00, 0x00]);
    bus.memory[IE_ADDR as usize] = Interrupt::VBlank.bit();
    bus.memory[IF_ADDR as usize] = Interrupt::VBlank.bit();

    run(&mut cpu, &mut bus, 1);
    assert!(!cpu.ime);
    // The instruction after EI still runs before the dispatch.
    run(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert!(cpu.ime);
    assert_eq!(cpu.step(&mut bus).unwrap(), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
}

#[test]
fn di_cancels_pending_ei() {
    // EI ; DI ; NOP
    let (mut cpu, mut bus) = setup(&[0xFB, 0xF3, 0x00]);
    run(&mut cpu, &mut bus, 3);
    assert!(!cpu.ime);
}

#[test]
fn halt_idles_until_interrupt() {
    let (mut cpu, mut bus) = setup(&[0x76, 0x00]);
    cpu.ime = true;
    bus.memory[IE_ADDR as usize] = Interrupt::Timer.bit();

    run(&mut cpu, &mut bus, 1);
    assert!(cpu.halted);
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.regs.pc, 0x0101);

    bus.memory[IF_ADDR as usize] = Interrupt::Timer.bit();
    assert_eq!(cpu.step(&mut bus).unwrap(), 20);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.read16(cpu.regs.sp), 0x0101);
}

#[test]
fn halt_wakes_without_dispatch_when_ime_clear() {
    let (mut cpu, mut bus) = setup(&[0x76, 0x3C]);
    bus.memory[IE_ADDR as usize] = Interrupt::Timer.bit();
    run(&mut cpu, &mut bus, 1);
    assert!(cpu.halted);

    bus.memory[IF_ADDR as usize] = Interrupt::Timer.bit();
    let a = cpu.regs.a;
    run(&mut cpu, &mut bus, 1);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.a, a.wrapping_add(1));
    assert_eq!(cpu.regs.pc, 0x0102);
    // Not serviced.
    assert_eq!(bus.memory[IF_ADDR as usize], Interrupt::Timer.bit());
}

#[test]
fn stop_skips_padding_byte() {
    let (mut cpu, mut bus) = setup(&[0x10, 0x00, 0x3C]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.a, 0x02);
}

#[test]
fn undefined_opcode_faults_without_side_effects() {
    let (mut cpu, mut bus) = setup(&[0x00, 0xD3]);
    run(&mut cpu, &mut bus, 1);
    let before = cpu.clone();

    let fault = cpu.step(&mut bus).unwrap_err();
    assert_eq!(
        fault,
        DecodeFault {
            address: 0x0101,
            opcode: 0xD3,
            mnemonic: "ILLEGAL_D3",
            prefixed: false,
            registers: before.regs,
        }
    );
    assert_eq!(cpu, before);
}

#[test]
fn every_hole_faults() {
    for op in [0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD] {
        let (mut cpu, mut bus) = setup(&[op]);
        assert!(cpu.step(&mut bus).is_err(), "{op:02X}");
        assert_eq!(cpu.regs.pc, 0x0100);
    }
}

#[test]
fn cycle_counter_accumulates() {
    // NOP ; LD BC,d16 ; CALL a16
    let (mut cpu, mut bus) = setup(&[0x00, 0x01, 0x00, 0x00, 0xCD, 0x00, 0x02]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.cycles, 4 + 12 + 24);
}

#[test]
fn trace_line_format() {
    let (cpu, mut bus) = setup(&[0x00, 0xC3, 0x50, 0x01]);
    assert_eq!(
        cpu.trace_line(&mut bus),
        "A:01 F:B0 B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE PC:0100 PCMEM:00,C3,50,01"
    );
}
