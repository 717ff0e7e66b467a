use super::{Memory, DMA};

const OAM_START: u16 = 0xFE00;
const OAM_LEN: u16 = 0xA0;

impl Memory {
    /// OAM DMA: copy 160 bytes from `value << 8` into OAM at once. The
    /// source goes through normal routing, so banked ROM and echo RAM work.
    pub(super) fn oam_dma(&mut self, value: u8) {
        let source = u16::from(value) << 8;
        for i in 0..OAM_LEN {
            let byte = self.read(source.wrapping_add(i));
            self.io_write(OAM_START + i, byte);
        }
        self.io_write(DMA, value);
    }
}
