mod mbc1;

#[cfg(test)]
pub(crate) use mbc1::BankingMode;
pub(crate) use mbc1::Mbc1;

use crate::error::CartridgeError;

/// Size of the cartridge header; anything shorter cannot be identified.
pub const HEADER_END: usize = 0x150;
/// Largest image MBC1 can address: 128 banks of 16KB.
pub const MAX_ROM_SIZE: usize = 2 * 1024 * 1024;
pub const ROM_BANK_SIZE: usize = 0x4000;
pub const RAM_BANK_SIZE: usize = 0x2000;
pub const MAX_RAM_BANKS: usize = 16;

const TITLE_START: usize = 0x134;
const TITLE_END: usize = 0x144;
const CARTRIDGE_TYPE: usize = 0x147;
const RAM_SIZE: usize = 0x149;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mapper {
    /// 32KB of ROM, no banking.
    RomOnly,
    Mbc1,
}

/// A validated cartridge image.
#[derive(Clone, Debug)]
pub struct Cartridge {
    rom: Vec<u8>,
    mapper: Mapper,
    ram_banks: usize,
    title: String,
}

impl Cartridge {
    /// Validate and wrap a raw ROM image.
    ///
    /// # Errors
    ///
    /// Fails if the image is too short to hold a header, too large for the
    /// banking controller, or declares a mapper other than ROM-only/MBC1.
    pub fn from_rom(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        if rom.len() < HEADER_END {
            return Err(CartridgeError::HeaderTooShort { len: rom.len() });
        }
        if rom.len() > MAX_ROM_SIZE {
            return Err(CartridgeError::RomTooLarge { len: rom.len() });
        }

        let mapper_byte = rom[CARTRIDGE_TYPE];
        let mapper = match mapper_byte {
            0x00 => Mapper::RomOnly,
            // MBC1, MBC1+RAM, MBC1+RAM+BATTERY
            0x01..=0x03 => Mapper::Mbc1,
            _ => return Err(CartridgeError::UnsupportedMapper { mapper_byte }),
        };

        let ram_banks = match rom[RAM_SIZE] {
            0x00 => 0,
            // 2KB parts still occupy one bank slot.
            0x01 | 0x02 => 1,
            0x03 => 4,
            0x04 => 16,
            0x05 => 8,
            other => {
                log::warn!("unknown RAM size code {other:02X}, assuming no RAM");
                0
            }
        };

        let title = parse_title(&rom[TITLE_START..TITLE_END]);

        log::info!(
            "Loaded cartridge \"{}\": {:?}, {} ROM banks, {} RAM banks",
            title,
            mapper,
            rom.len().div_ceil(ROM_BANK_SIZE),
            ram_banks,
        );

        Ok(Self {
            rom,
            mapper,
            ram_banks: ram_banks.min(MAX_RAM_BANKS),
            title,
        })
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    pub fn mapper(&self) -> Mapper {
        self.mapper
    }

    /// RAM banks declared by the header, 0 when the cartridge has none.
    pub fn ram_banks(&self) -> usize {
        self.ram_banks
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of 16KB banks in the image, at least one.
    pub fn rom_banks(&self) -> usize {
        self.rom.len().div_ceil(ROM_BANK_SIZE).max(1)
    }

    pub(crate) fn into_rom(self) -> Vec<u8> {
        self.rom
    }
}

/// Title bytes are ASCII, NUL padded. Later headers reuse the tail for a
/// manufacturer code and CGB flag, which are cut off at the first NUL or
/// non-printable byte.
fn parse_title(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0 && b.is_ascii_graphic() || b == b' ')
        .map(|&b| b as char)
        .collect::<String>()
        .trim_end()
        .to_string()
}
