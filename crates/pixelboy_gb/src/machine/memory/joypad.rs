use crate::interrupt::Interrupt;
use crate::machine::input::{Button, Buttons};

use super::{Memory, JOYP};

impl Memory {
    /// JOYP as the CPU sees it: bits 6-7 high, the stored select bits, and
    /// the selected group(s) in the low nibble with 0 meaning pressed.
    pub(super) fn read_joyp(&self) -> u8 {
        let select = self.io_read(JOYP) & 0x30;
        let mut pressed = 0;
        if select & 0x10 == 0 {
            pressed |= self.buttons.dpad_nibble();
        }
        if select & 0x20 == 0 {
            pressed |= self.buttons.action_nibble();
        }
        0xC0 | select | (!pressed & 0x0F)
    }

    pub(super) fn write_joyp(&mut self, value: u8) {
        let kept = self.io_read(JOYP) & !0x30;
        self.io_write(JOYP, kept | (value & 0x30));
    }

    /// Update one key. A new press raises the Joypad interrupt when its
    /// group is currently selected.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        let flag = button.flag();
        let newly_pressed = pressed && !self.buttons.contains(flag);
        self.buttons.set(flag, pressed);

        if newly_pressed && self.io_read(JOYP) & button.select_bit() == 0 {
            log::debug!("GB joypad interrupt: {button:?} pressed");
            self.request_interrupt(Interrupt::Joypad);
        }
    }

    pub fn buttons(&self) -> Buttons {
        self.buttons
    }
}
