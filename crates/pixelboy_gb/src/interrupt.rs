/// Interrupt request register.
pub const IF_ADDR: u16 = 0xFF0F;
/// Interrupt enable register.
pub const IE_ADDR: u16 = 0xFFFF;

/// The five interrupt sources, in dispatch priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    /// All sources from highest to lowest priority.
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Bit of this source in IF and IE.
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self.index()
    }

    /// Address the CPU jumps to when dispatching this source.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x0040 + (self.index() as u16) * 8
    }

    /// Highest-priority source set in `mask`, if any.
    pub fn highest_priority(mask: u8) -> Option<Interrupt> {
        Self::ALL.into_iter().find(|interrupt| mask & interrupt.bit() != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_follow_priority_order() {
        let vectors: Vec<u16> = Interrupt::ALL.iter().map(|i| i.vector()).collect();
        assert_eq!(vectors, vec![0x40, 0x48, 0x50, 0x58, 0x60]);
    }

    #[test]
    fn lowest_bit_wins() {
        assert_eq!(Interrupt::highest_priority(0b0_0101), Some(Interrupt::VBlank));
        assert_eq!(Interrupt::highest_priority(0b1_1000), Some(Interrupt::Serial));
        assert_eq!(Interrupt::highest_priority(0), None);
        // Bits above the five sources are ignored.
        assert_eq!(Interrupt::highest_priority(0xE0), None);
    }
}
