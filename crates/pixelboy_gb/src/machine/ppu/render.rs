use crate::machine::memory::{Memory, BGP, OBP0, OBP1, SCX, SCY, WX, WY};
use crate::SCREEN_WIDTH;

use super::{Lcdc, Ppu, Shade};

const OAM_START: u16 = 0xFE00;
const SPRITE_COUNT: u16 = 40;

/// Sprite attribute bits (OAM byte 3).
const ATTR_BEHIND_BG: u8 = 1 << 7;
const ATTR_Y_FLIP: u8 = 1 << 6;
const ATTR_X_FLIP: u8 = 1 << 5;
const ATTR_OBP1: u8 = 1 << 4;

/// 2bpp color index of pixel `x` (0 = leftmost) in a tile row.
#[inline]
fn row_pixel(lo: u8, hi: u8, x: u8) -> u8 {
    let bit = 7 - x;
    (((hi >> bit) & 1) << 1) | ((lo >> bit) & 1)
}

impl Ppu {
    /// Draw scanline `self.line` into the framebuffer.
    pub(super) fn render_line(&mut self, memory: &Memory, lcdc: Lcdc) {
        let ly = self.line;
        let scy = memory.io_read(SCY);
        let scx = memory.io_read(SCX);
        let wy = memory.io_read(WY);
        let wx = memory.io_read(WX);
        let bgp = memory.io_read(BGP);

        let window_on_line = lcdc.contains(Lcdc::WINDOW_ENABLE) && ly >= wy;
        let row_start = usize::from(ly) * SCREEN_WIDTH;

        for x in 0..SCREEN_WIDTH {
            let color = if !lcdc.contains(Lcdc::BG_ENABLE) {
                0
            } else if window_on_line && x + 7 >= usize::from(wx) {
                let wx_pos = (x + 7 - usize::from(wx)) as u8;
                self.tile_map_pixel(memory, lcdc, lcdc.window_map(), wx_pos, ly - wy)
            } else {
                let bx = (x as u8).wrapping_add(scx);
                let by = ly.wrapping_add(scy);
                self.tile_map_pixel(memory, lcdc, lcdc.bg_map(), bx, by)
            };

            self.line_colors[x] = color;
            self.framebuffer[row_start + x] = Shade::from_palette(bgp, color);
        }

        if lcdc.contains(Lcdc::OBJ_ENABLE) {
            self.render_sprites(memory, lcdc);
        }
    }

    fn tile_map_pixel(&self, memory: &Memory, lcdc: Lcdc, map: u16, x: u8, y: u8) -> u8 {
        let entry = map + u16::from(y / 8) * 32 + u16::from(x / 8);
        let tile = lcdc.tile_address(memory.io_read(entry));
        let row = tile + u16::from(y % 8) * 2;
        row_pixel(memory.io_read(row), memory.io_read(row + 1), x % 8)
    }

    /// Overlay sprites on the current line.
    ///
    /// Each pixel belongs to the first opaque sprite in OAM order. That
    /// sprite's priority bit alone decides whether background colors 1-3
    /// hide it; a sprite further down OAM never shows through.
    fn render_sprites(&mut self, memory: &Memory, lcdc: Lcdc) {
        let ly = i16::from(self.line);
        let height = lcdc.sprite_height();
        let row_start = usize::from(self.line) * SCREEN_WIDTH;
        let mut claimed = [false; SCREEN_WIDTH];

        for index in 0..SPRITE_COUNT {
            let entry = OAM_START + index * 4;
            let top = i16::from(memory.io_read(entry)) - 16;
            let left = i16::from(memory.io_read(entry + 1)) - 8;
            let mut tile = memory.io_read(entry + 2);
            let attrs = memory.io_read(entry + 3);

            let mut row = ly - top;
            if !(0..height).contains(&row) {
                continue;
            }
            if attrs & ATTR_Y_FLIP != 0 {
                row = height - 1 - row;
            }
            if height == 16 {
                tile &= 0xFE;
            }

            let addr = 0x8000 + u16::from(tile) * 16 + (row as u16) * 2;
            let lo = memory.io_read(addr);
            let hi = memory.io_read(addr + 1);
            let palette = memory.io_read(if attrs & ATTR_OBP1 != 0 { OBP1 } else { OBP0 });

            for px in 0..8u8 {
                let sx = left + i16::from(px);
                if !(0..SCREEN_WIDTH as i16).contains(&sx) {
                    continue;
                }
                let sx = sx as usize;
                if claimed[sx] {
                    continue;
                }

                let column = if attrs & ATTR_X_FLIP != 0 { 7 - px } else { px };
                let color = row_pixel(lo, hi, column);
                if color == 0 {
                    continue;
                }
                claimed[sx] = true;
                if attrs & ATTR_BEHIND_BG != 0 && self.line_colors[sx] != 0 {
                    continue;
                }
                self.framebuffer[row_start + sx] = Shade::from_palette(palette, color);
            }
        }
    }
}
