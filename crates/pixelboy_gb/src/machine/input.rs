use bitflags::bitflags;

/// One of the eight keys on the handheld.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

bitflags! {
    /// Pressed keys. The low nibble is the direction pad and the high
    /// nibble the action keys, each in JOYP bit order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const RIGHT = 1 << 0;
        const LEFT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const A = 1 << 4;
        const B = 1 << 5;
        const SELECT = 1 << 6;
        const START = 1 << 7;
    }
}

impl Buttons {
    /// Direction keys as an active-high JOYP nibble.
    #[inline]
    pub fn dpad_nibble(self) -> u8 {
        self.bits() & 0x0F
    }

    /// Action keys as an active-high JOYP nibble.
    #[inline]
    pub fn action_nibble(self) -> u8 {
        self.bits() >> 4
    }
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
    ];

    pub fn flag(self) -> Buttons {
        match self {
            Button::Right => Buttons::RIGHT,
            Button::Left => Buttons::LEFT,
            Button::Up => Buttons::UP,
            Button::Down => Buttons::DOWN,
            Button::A => Buttons::A,
            Button::B => Buttons::B,
            Button::Select => Buttons::SELECT,
            Button::Start => Buttons::START,
        }
    }

    /// JOYP select bit (active low) that exposes this key's group.
    #[inline]
    pub fn select_bit(self) -> u8 {
        if self.flag().dpad_nibble() != 0 {
            0x10
        } else {
            0x20
        }
    }
}
