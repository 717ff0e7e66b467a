//! Scanline PPU.
//!
//! Each visible line walks OAM scan (80 dots), pixel transfer (172 dots,
//! the line is rendered when it ends) and HBlank (204 dots). Lines 144-153
//! are VBlank, 456 dots each. A frame is 154 lines, 70224 dots.

mod registers;
mod render;

pub use registers::{Lcdc, Stat};

use crate::interrupt::Interrupt;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::memory::{Memory, LCDC, LY, LYC, STAT};

pub const OAM_SCAN_DOTS: u32 = 80;
pub const TRANSFER_DOTS: u32 = 172;
pub const HBLANK_DOTS: u32 = 204;
pub const LINE_DOTS: u32 = OAM_SCAN_DOTS + TRANSFER_DOTS + HBLANK_DOTS;
pub const VBLANK_START_LINE: u8 = 144;
pub const LAST_LINE: u8 = 153;
pub const FRAME_DOTS: u32 = LINE_DOTS * (LAST_LINE as u32 + 1);

/// PPU mode, numbered as reported in STAT bits 0-1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    Transfer = 3,
}

impl Mode {
    /// Dots spent in this mode before the next transition.
    #[inline]
    fn duration(self) -> u32 {
        match self {
            Mode::OamScan => OAM_SCAN_DOTS,
            Mode::Transfer => TRANSFER_DOTS,
            Mode::HBlank => HBLANK_DOTS,
            Mode::VBlank => LINE_DOTS,
        }
    }

    /// STAT enable bit for the interrupt raised on entering this mode.
    #[inline]
    fn stat_source(self) -> Option<Stat> {
        match self {
            Mode::HBlank => Some(Stat::HBLANK_INT),
            Mode::VBlank => Some(Stat::VBLANK_INT),
            Mode::OamScan => Some(Stat::OAM_INT),
            Mode::Transfer => None,
        }
    }
}

/// One of the four DMG gray levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shade {
    #[default]
    White,
    LightGray,
    DarkGray,
    Black,
}

impl Shade {
    /// Resolve a 2-bit color index through a BGP/OBP palette register.
    #[inline]
    pub fn from_palette(palette: u8, color: u8) -> Shade {
        match (palette >> (color * 2)) & 0x03 {
            0 => Shade::White,
            1 => Shade::LightGray,
            2 => Shade::DarkGray,
            _ => Shade::Black,
        }
    }

    #[inline]
    pub fn luminance(self) -> u8 {
        match self {
            Shade::White => 0xFF,
            Shade::LightGray => 0xAA,
            Shade::DarkGray => 0x55,
            Shade::Black => 0x00,
        }
    }

    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        let l = self.luminance();
        [l, l, l]
    }
}

#[derive(Clone, Debug)]
pub struct Ppu {
    mode: Mode,
    /// Dots elapsed in the current mode.
    dots: u32,
    line: u8,
    lcd_on: bool,
    lyc_match: bool,
    framebuffer: Vec<Shade>,
    /// Background color indices of the line being drawn, for sprite priority.
    line_colors: [u8; SCREEN_WIDTH],
    frames: u64,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    pub fn new() -> Self {
        Self {
            mode: Mode::OamScan,
            dots: 0,
            line: 0,
            lcd_on: true,
            lyc_match: true,
            framebuffer: vec![Shade::White; SCREEN_WIDTH * SCREEN_HEIGHT],
            line_colors: [0; SCREEN_WIDTH],
            frames: 0,
        }
    }

    /// Run the PPU for `cycles` dots, taking every mode transition that
    /// falls inside them.
    pub fn advance(&mut self, cycles: u32, memory: &mut Memory) {
        let lcdc = Lcdc::from_bits_retain(memory.io_read(LCDC));
        if !lcdc.contains(Lcdc::LCD_ENABLE) {
            if self.lcd_on {
                self.switch_off(memory);
            }
            return;
        }
        if !self.lcd_on {
            self.lcd_on = true;
            self.set_mode(Mode::OamScan, memory);
            self.compare_lyc(memory);
        }

        self.dots += cycles;
        while self.dots >= self.mode.duration() {
            self.dots -= self.mode.duration();
            self.next_mode(memory, lcdc);
            memory.io_write(LY, self.line);
            self.compare_lyc(memory);
        }
    }

    fn next_mode(&mut self, memory: &mut Memory, lcdc: Lcdc) {
        match self.mode {
            Mode::OamScan => self.enter(Mode::Transfer, memory),
            Mode::Transfer => {
                self.render_line(memory, lcdc);
                self.enter(Mode::HBlank, memory);
            }
            Mode::HBlank => {
                self.line += 1;
                if self.line == VBLANK_START_LINE {
                    self.frames += 1;
                    log::debug!("GB PPU VBlank: frame {}", self.frames);
                    memory.request_interrupt(Interrupt::VBlank);
                    self.enter(Mode::VBlank, memory);
                } else {
                    self.enter(Mode::OamScan, memory);
                }
            }
            Mode::VBlank => {
                if self.line == LAST_LINE {
                    self.line = 0;
                    self.enter(Mode::OamScan, memory);
                } else {
                    self.line += 1;
                }
            }
        }
    }

    /// Switch mode and raise LCDSTAT if the mode's source is enabled.
    fn enter(&mut self, mode: Mode, memory: &mut Memory) {
        self.set_mode(mode, memory);
        let stat = Stat::from_bits_retain(memory.io_read(STAT));
        if mode.stat_source().is_some_and(|source| stat.contains(source)) {
            memory.request_interrupt(Interrupt::LcdStat);
        }
    }

    fn set_mode(&mut self, mode: Mode, memory: &mut Memory) {
        self.mode = mode;
        let stat = memory.io_read(STAT) & !Stat::MODE.bits();
        memory.io_write(STAT, stat | mode as u8);
    }

    /// Update the coincidence flag; LCDSTAT fires only when LY becomes
    /// equal to LYC, not while it stays equal.
    fn compare_lyc(&mut self, memory: &mut Memory) {
        let matched = memory.io_read(LY) == memory.io_read(LYC);
        let mut stat = Stat::from_bits_retain(memory.io_read(STAT));
        stat.set(Stat::LYC_EQUAL, matched);
        memory.io_write(STAT, stat.bits());

        if matched && !self.lyc_match && stat.contains(Stat::LYC_INT) {
            memory.request_interrupt(Interrupt::LcdStat);
        }
        self.lyc_match = matched;
    }

    fn switch_off(&mut self, memory: &mut Memory) {
        log::debug!("GB PPU LCD off at line {}", self.line);
        self.lcd_on = false;
        self.dots = 0;
        self.line = 0;
        self.mode = Mode::OamScan;
        memory.io_write(LY, 0);
        let stat = memory.io_read(STAT) & !Stat::MODE.bits();
        memory.io_write(STAT, stat);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current scanline, 0-153.
    pub fn line(&self) -> u8 {
        self.line
    }

    /// Completed frames, counted on VBlank entry.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn framebuffer(&self) -> &[Shade] {
        &self.framebuffer
    }

    /// Write the framebuffer as packed RGB24 into `buffer`, filling as many
    /// whole pixels as fit.
    pub fn write_rgb24(&self, buffer: &mut [u8]) {
        for (pixel, shade) in buffer.chunks_exact_mut(3).zip(&self.framebuffer) {
            pixel.copy_from_slice(&shade.rgb());
        }
    }
}
