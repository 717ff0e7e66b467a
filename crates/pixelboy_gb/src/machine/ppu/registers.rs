use bitflags::bitflags;

bitflags! {
    /// LCD control (0xFF40).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Lcdc: u8 {
        /// On DMG this gates both background and window.
        const BG_ENABLE = 1 << 0;
        const OBJ_ENABLE = 1 << 1;
        /// 8x16 sprites instead of 8x8.
        const OBJ_TALL = 1 << 2;
        /// Background map at 0x9C00 instead of 0x9800.
        const BG_MAP_HIGH = 1 << 3;
        /// Tiles at 0x8000 with unsigned indices instead of 0x9000 signed.
        const TILE_DATA_LOW = 1 << 4;
        const WINDOW_ENABLE = 1 << 5;
        /// Window map at 0x9C00 instead of 0x9800.
        const WINDOW_MAP_HIGH = 1 << 6;
        const LCD_ENABLE = 1 << 7;
    }
}

bitflags! {
    /// LCD status (0xFF41).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Stat: u8 {
        const MODE = 0b0000_0011;
        const LYC_EQUAL = 1 << 2;
        const HBLANK_INT = 1 << 3;
        const VBLANK_INT = 1 << 4;
        const OAM_INT = 1 << 5;
        const LYC_INT = 1 << 6;
    }
}

impl Lcdc {
    #[inline]
    pub fn bg_map(self) -> u16 {
        if self.contains(Lcdc::BG_MAP_HIGH) {
            0x9C00
        } else {
            0x9800
        }
    }

    #[inline]
    pub fn window_map(self) -> u16 {
        if self.contains(Lcdc::WINDOW_MAP_HIGH) {
            0x9C00
        } else {
            0x9800
        }
    }

    #[inline]
    pub fn sprite_height(self) -> i16 {
        if self.contains(Lcdc::OBJ_TALL) {
            16
        } else {
            8
        }
    }

    /// Start of the 16-byte tile `index` for background and window.
    #[inline]
    pub fn tile_address(self, index: u8) -> u16 {
        if self.contains(Lcdc::TILE_DATA_LOW) {
            0x8000 + u16::from(index) * 16
        } else {
            0x9000u16.wrapping_add((i16::from(index as i8) * 16) as u16)
        }
    }
}
