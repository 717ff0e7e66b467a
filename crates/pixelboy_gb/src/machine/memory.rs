//! The 64KB address space as seen by the CPU.
//!
//! `Memory` owns a flat 64KB array for everything that is plain storage
//! (VRAM, WRAM, OAM, IO registers, HRAM, IE), plus the cartridge ROM image
//! and whatever 8KB external RAM banks the header declares, behind the MBC1
//! registers. CPU accesses go through [`Bus`](crate::cpu::Bus) and honour
//! the hardware register rules; the PPU and timer use the raw `io_read`/`io_write`
//! accessors instead.

mod dma;
mod init;
mod joypad;
mod mmio;
mod traits;

use crate::interrupt::{Interrupt, IF_ADDR};
use crate::machine::cartridge::{Mapper, Mbc1, RAM_BANK_SIZE, ROM_BANK_SIZE};
use crate::machine::input::Buttons;

pub const MEMORY_SIZE: usize = 0x10000;

pub const JOYP: u16 = 0xFF00;
pub const DIV: u16 = 0xFF04;
pub const TIMA: u16 = 0xFF05;
pub const TMA: u16 = 0xFF06;
pub const TAC: u16 = 0xFF07;
pub const LCDC: u16 = 0xFF40;
pub const STAT: u16 = 0xFF41;
pub const SCY: u16 = 0xFF42;
pub const SCX: u16 = 0xFF43;
pub const LY: u16 = 0xFF44;
pub const LYC: u16 = 0xFF45;
pub const DMA: u16 = 0xFF46;
pub const BGP: u16 = 0xFF47;
pub const OBP0: u16 = 0xFF48;
pub const OBP1: u16 = 0xFF49;
pub const WY: u16 = 0xFF4A;
pub const WX: u16 = 0xFF4B;

/// LY value reported in doctor mode; CPU test ROMs poll LY for VBlank and
/// trace-diff tools expect it pinned here.
const DOCTOR_LY: u8 = 0x90;

pub struct Memory {
    data: Vec<u8>,
    rom: Vec<u8>,
    rom_banks: usize,
    /// Banks declared by the cartridge header; `ram` holds exactly these.
    ram_banks: usize,
    ram: Vec<u8>,
    mapper: Mapper,
    mbc: Mbc1,
    buttons: Buttons,
    /// Set by a CPU write to DIV until the timer restarts its divider.
    div_reset: bool,
    doctor_mode: bool,
}

impl Memory {
    /// CPU-visible read.
    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => self.rom_byte(usize::from(addr)),
            0x4000..=0x7FFF => {
                let bank = self.mbc.rom_bank(self.rom_banks);
                self.rom_byte(bank * ROM_BANK_SIZE + usize::from(addr - 0x4000))
            }
            0xA000..=0xBFFF => match self.ram_index(addr) {
                Some(index) => self.ram[index],
                None => 0xFF,
            },
            0xE000..=0xFDFF => self.data[usize::from(addr - 0x2000)],
            0xFEA0..=0xFEFF => 0xFF,
            0xFF00..=0xFF7F => self.read_io(addr),
            _ => self.data[usize::from(addr)],
        }
    }

    /// CPU-visible write.
    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => match self.mapper {
                Mapper::Mbc1 => self.mbc.write_register(addr, value),
                Mapper::RomOnly => {
                    log::trace!("ignored ROM write {value:02X} -> {addr:04X}");
                }
            },
            0xA000..=0xBFFF => match self.ram_index(addr) {
                Some(index) => self.ram[index] = value,
                None => log::trace!("ignored write to disabled cartridge RAM at {addr:04X}"),
            },
            0xE000..=0xFDFF => self.data[usize::from(addr - 0x2000)] = value,
            0xFEA0..=0xFEFF => {}
            0xFF00..=0xFF7F => self.write_io(addr, value),
            _ => self.data[usize::from(addr)] = value,
        }
    }

    /// Raw register/array read without CPU-side masking.
    #[inline]
    pub fn io_read(&self, addr: u16) -> u8 {
        self.data[usize::from(addr)]
    }

    /// Raw register/array write, bypassing the CPU write rules.
    #[inline]
    pub fn io_write(&mut self, addr: u16, value: u8) {
        self.data[usize::from(addr)] = value;
    }

    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.data[usize::from(IF_ADDR)] |= interrupt.bit();
    }

    /// Whether DIV was written since the last call.
    #[inline]
    pub fn take_div_reset(&mut self) -> bool {
        std::mem::take(&mut self.div_reset)
    }

    /// Pin LY reads to 0x90 for trace comparison against CPU test ROMs.
    pub fn set_doctor_mode(&mut self, enabled: bool) {
        self.doctor_mode = enabled;
    }

    pub fn doctor_mode(&self) -> bool {
        self.doctor_mode
    }

    #[inline]
    fn rom_byte(&self, index: usize) -> u8 {
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    /// Offset into the RAM banks for an 0xA000-0xBFFF access, or `None`
    /// while RAM is disabled or the cartridge has none. The selected bank
    /// wraps to the banks present, so a single-bank cartridge mirrors it.
    #[inline]
    fn ram_index(&self, addr: u16) -> Option<usize> {
        if !self.mbc.ram_enabled() || self.ram_banks == 0 {
            return None;
        }
        let bank = self.mbc.ram_bank() % self.ram_banks;
        Some(bank * RAM_BANK_SIZE + usize::from(addr - 0xA000))
    }

    #[cfg(test)]
    pub(crate) fn mbc(&self) -> &Mbc1 {
        &self.mbc
    }
}
