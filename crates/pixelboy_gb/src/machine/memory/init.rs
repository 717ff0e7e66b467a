use crate::interrupt::IF_ADDR;
use crate::machine::cartridge::{Cartridge, Mapper, Mbc1, RAM_BANK_SIZE};
use crate::machine::input::Buttons;

use super::{Memory, BGP, DIV, JOYP, LCDC, MEMORY_SIZE, OBP0, OBP1, STAT, TAC};

impl Default for Memory {
    fn default() -> Self {
        Self::empty()
    }
}

impl Memory {
    /// Memory with no cartridge: the ROM window reads 0xFF.
    pub fn empty() -> Self {
        let mut memory = Self {
            data: vec![0; MEMORY_SIZE],
            rom: Vec::new(),
            rom_banks: 1,
            ram_banks: 0,
            ram: Vec::new(),
            mapper: Mapper::RomOnly,
            mbc: Mbc1::default(),
            buttons: Buttons::empty(),
            div_reset: false,
            doctor_mode: false,
        };
        memory.apply_dmg_initial_io_state();
        memory
    }

    pub fn with_cartridge(cartridge: Cartridge) -> Self {
        let mapper = cartridge.mapper();
        let rom_banks = cartridge.rom_banks();
        let ram_banks = cartridge.ram_banks();
        Self {
            rom: cartridge.into_rom(),
            rom_banks,
            ram_banks,
            ram: vec![0; ram_banks * RAM_BANK_SIZE],
            mapper,
            ..Self::empty()
        }
    }

    /// IO registers as the DMG boot ROM leaves them.
    fn apply_dmg_initial_io_state(&mut self) {
        let mut set = |addr: u16, value: u8| self.data[usize::from(addr)] = value;

        set(JOYP, 0x30);
        set(DIV, 0xAB);
        set(TAC, 0xF8);
        // VBlank is already requested when the boot ROM hands over.
        set(IF_ADDR, 0x01);
        set(LCDC, 0x91);
        // OAM scan on line 0, LY == LYC.
        set(STAT, 0x06);
        set(BGP, 0xFC);
        set(OBP0, 0xFF);
        set(OBP1, 0xFF);
    }
}
