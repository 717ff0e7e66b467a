use crate::cpu::Cpu;
use crate::error::{CartridgeError, DecodeFault};

use super::cartridge::Cartridge;
use super::input::Button;
use super::memory::Memory;
use super::ppu::{Ppu, Shade, FRAME_DOTS};
use super::timer::Timer;

/// T-cycles in one video frame.
pub const FRAME_CYCLES: u32 = FRAME_DOTS;

/// The whole console: CPU, memory map, timer and PPU.
///
/// Components never hold references to each other. Each step lends the
/// memory to the CPU, then to the timer, then to the PPU.
pub struct GameBoy {
    pub cpu: Cpu,
    pub memory: Memory,
    pub timer: Timer,
    pub ppu: Ppu,
    /// Cycles already run towards the current frame, including the
    /// overshoot carried from the previous one.
    frame_cycles: u32,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::with_memory(Memory::empty())
    }
}

impl GameBoy {
    pub fn new(cartridge: Cartridge) -> Self {
        Self::with_memory(Memory::with_cartridge(cartridge))
    }

    /// Validate a raw ROM image and power on with it inserted.
    pub fn from_rom(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        Cartridge::from_rom(rom).map(Self::new)
    }

    fn with_memory(memory: Memory) -> Self {
        Self {
            cpu: Cpu::new(),
            memory,
            timer: Timer::new(),
            ppu: Ppu::new(),
            frame_cycles: 0,
        }
    }

    /// Execute one CPU step and let the timer and PPU catch up.
    pub fn step(&mut self) -> Result<u32, DecodeFault> {
        let cycles = self.cpu.step(&mut self.memory)?;
        self.timer.advance(cycles, &mut self.memory);
        self.ppu.advance(cycles, &mut self.memory);
        Ok(cycles)
    }

    /// Run until a frame's worth of cycles has elapsed.
    ///
    /// A decode fault stops the frame early; everything stays as it was at
    /// the faulting opcode.
    pub fn step_frame(&mut self) -> Result<(), DecodeFault> {
        self.step_frame_with(|_, _| {})
    }

    /// Like [`GameBoy::step_frame`], calling `before_step` ahead of every
    /// CPU step (e.g. to emit a trace line).
    pub fn step_frame_with<F>(&mut self, mut before_step: F) -> Result<(), DecodeFault>
    where
        F: FnMut(&Cpu, &mut Memory),
    {
        while self.frame_cycles < FRAME_CYCLES {
            before_step(&self.cpu, &mut self.memory);
            self.frame_cycles += self.step()?;
        }
        self.frame_cycles -= FRAME_CYCLES;
        Ok(())
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.memory.set_button(button, pressed);
    }

    pub fn framebuffer(&self) -> &[Shade] {
        self.ppu.framebuffer()
    }

    /// Packed RGB24 copy of the framebuffer, see [`Ppu::write_rgb24`].
    pub fn frame_rgb24(&self, buffer: &mut [u8]) {
        self.ppu.write_rgb24(buffer);
    }

    pub fn trace_line(&mut self) -> String {
        self.cpu.trace_line(&mut self.memory)
    }

    pub fn set_doctor_mode(&mut self, enabled: bool) {
        self.memory.set_doctor_mode(enabled);
    }
}
