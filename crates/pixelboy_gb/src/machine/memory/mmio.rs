use crate::interrupt::IF_ADDR;

use super::{Memory, DIV, DMA, DOCTOR_LY, JOYP, LY, STAT};

impl Memory {
    pub(super) fn read_io(&self, addr: u16) -> u8 {
        match addr {
            JOYP => self.read_joyp(),
            IF_ADDR => self.io_read(addr) | 0xE0,
            STAT => self.io_read(addr) | 0x80,
            LY if self.doctor_mode => DOCTOR_LY,
            _ => self.io_read(addr),
        }
    }

    pub(super) fn write_io(&mut self, addr: u16, value: u8) {
        match addr {
            JOYP => self.write_joyp(value),
            DIV => {
                self.io_write(DIV, 0);
                self.div_reset = true;
            }
            // Mode and coincidence bits belong to the PPU.
            STAT => {
                let kept = self.io_read(STAT) & 0x07;
                self.io_write(STAT, kept | (value & 0x78));
            }
            LY => log::trace!("ignored LY write {value:02X}"),
            IF_ADDR => self.io_write(IF_ADDR, value & 0x1F),
            DMA => self.oam_dma(value),
            _ => self.io_write(addr, value),
        }
    }
}
