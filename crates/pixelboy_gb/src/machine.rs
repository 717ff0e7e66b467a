pub mod cartridge;
mod gameboy;
pub mod input;
pub mod memory;
pub mod ppu;
mod timer;

pub use cartridge::{Cartridge, Mapper};
pub use gameboy::{GameBoy, FRAME_CYCLES};
pub use input::{Button, Buttons};
pub use memory::Memory;
pub use ppu::{Mode, Ppu, Shade};
pub use timer::Timer;
