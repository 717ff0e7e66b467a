//! DMG Game Boy emulator core.
//!
//! [`GameBoy`] ties together the LR35902 [`cpu`], the banked memory map,
//! the divider/timer and the scanline PPU. Frontends feed it a ROM, call
//! [`GameBoy::step_frame`] and read back [`GameBoy::framebuffer`].

pub mod cpu;
pub mod error;
pub mod interrupt;
pub mod machine;

pub use cpu::{Bus, Cpu, Registers};
pub use error::{CartridgeError, DecodeFault};
pub use interrupt::Interrupt;
pub use machine::{Button, Cartridge, GameBoy, Shade};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
