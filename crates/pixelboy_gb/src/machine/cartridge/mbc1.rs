/// What the 2-bit register at 0x4000-0x5FFF drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum BankingMode {
    /// Upper ROM bank bits.
    #[default]
    Rom,
    /// External RAM bank.
    Ram,
}

/// MBC1 bank-select registers.
///
/// Only the register file lives here; the ROM image and RAM banks are
/// owned by `Memory`, which asks for the current bank numbers on every
/// access to the switchable windows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Mbc1 {
    /// Bits 0-6 of the switchable ROM bank.
    rom_bank: u8,
    ram_bank: u8,
    ram_enabled: bool,
    mode: BankingMode,
}

impl Default for Mbc1 {
    fn default() -> Self {
        Self {
            rom_bank: 1,
            ram_bank: 0,
            ram_enabled: false,
            mode: BankingMode::Rom,
        }
    }
}

impl Mbc1 {
    /// Handle a CPU write into 0x0000-0x7FFF.
    pub(crate) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                self.ram_enabled = value & 0x0F == 0x0A;
            }
            0x2000..=0x3FFF => {
                // A zero in the low five bits selects bank 1 instead.
                let low = match value & 0x1F {
                    0 => 1,
                    n => n,
                };
                self.rom_bank = (self.rom_bank & 0x60) | low;
            }
            0x4000..=0x5FFF => {
                let bits = value & 0x03;
                match self.mode {
                    BankingMode::Rom => self.rom_bank = (self.rom_bank & 0x1F) | (bits << 5),
                    BankingMode::Ram => self.ram_bank = bits,
                }
            }
            0x6000..=0x7FFF => {
                self.mode = if value & 0x01 == 0 {
                    self.ram_bank = 0;
                    BankingMode::Rom
                } else {
                    BankingMode::Ram
                };
            }
            _ => {}
        }
    }

    /// Bank mapped at 0x4000-0x7FFF, wrapped to the banks present.
    #[inline]
    pub(crate) fn rom_bank(&self, rom_banks: usize) -> usize {
        usize::from(self.rom_bank) % rom_banks.max(1)
    }

    #[inline]
    pub(crate) fn ram_bank(&self) -> usize {
        usize::from(self.ram_bank)
    }

    #[inline]
    pub(crate) fn ram_enabled(&self) -> bool {
        self.ram_enabled
    }

    #[cfg(test)]
    pub(crate) fn mode(&self) -> BankingMode {
        self.mode
    }
}
