// Cartridge module - iNES container parsing and mapper ownership
//
// A cartridge image is a 16-byte header, an optional 512-byte trainer, the
// program ROM, then the character ROM. Three header revisions exist in the
// wild (archaic v0, standard v1, NES 2.0); they differ in how the mapper id
// and the ROM sizes are encoded.
//
// ```text
// byte 0-3  signature "NES\x1A"
// byte 4    program-ROM size (16 KiB units; low 8 bits in NES 2.0)
// byte 5    character-ROM size (8 KiB units; low 8 bits in NES 2.0)
// byte 6    mirroring (bit 0), battery (bit 1), trainer (bit 2),
//           four-screen (bit 3), mapper id low nibble (bits 4-7)
// byte 7    console type, version (bits 2-3), mapper id high nibble
// byte 8    NES 2.0: mapper id bits 8-11, submapper id
// byte 9    NES 2.0: size high nibbles / exponent escape
// ```

pub mod mappers;

pub use mappers::{create_mapper, Mapper};

use crate::error::EmulatorError;
use std::fs;
use std::path::Path;

/// Header size in bytes
const HEADER_SIZE: usize = 16;

/// Trainer block size in bytes
const TRAINER_SIZE: usize = 512;

/// Program-ROM size unit (16 KiB)
const PRG_ROM_UNIT: usize = 0x4000;

/// Character-ROM size unit (8 KiB)
const CHR_ROM_UNIT: usize = 0x2000;

/// Nametable mirroring arrangement selected by the cartridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    /// Tables (0,1) and (2,3) alias: the map scrolls vertically
    Horizontal,
    /// Tables (0,2) and (1,3) alias: the map scrolls horizontally
    Vertical,
    /// All four tables are distinct
    FourScreen,
}

/// TV system declared by the header
///
/// Only NTSC timing is emulated; the field is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvSystem {
    Ntsc,
    Pal,
}

/// Container header revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderVersion {
    /// Archaic iNES (pre-0.7)
    V0,
    /// Standard iNES
    V1,
    /// NES 2.0
    V2,
}

/// Header-derived cartridge description
#[derive(Debug, Clone)]
pub struct CartridgeInfo {
    pub mapper_id: u16,
    pub submapper_id: u8,
    pub mirroring: Mirroring,
    pub tv_system: TvSystem,
    pub prg_rom_size: usize,
    pub chr_rom_size: usize,
    pub has_trainer: bool,
}

/// A parsed cartridge: header info plus the mapper that owns the ROM data
///
/// A console always holds a cartridge value; before anything is loaded the
/// mapper slot is empty and every bus access reads as open bus (0).
pub struct Cartridge {
    info: CartridgeInfo,
    mapper: Option<Box<dyn Mapper>>,
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("info", &self.info)
            .field("mapper", &self.mapper.is_some())
            .finish()
    }
}

impl Cartridge {
    /// An empty cartridge slot
    pub fn empty() -> Self {
        Cartridge {
            info: CartridgeInfo {
                mapper_id: 0,
                submapper_id: 0,
                mirroring: Mirroring::Horizontal,
                tv_system: TvSystem::Ntsc,
                prg_rom_size: 0,
                chr_rom_size: 0,
                has_trainer: false,
            },
            mapper: None,
        }
    }

    /// Load and parse a cartridge image from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EmulatorError> {
        let path = path.as_ref();
        log::info!("loading NES file '{}'", path.display());

        let contents = fs::read(path).map_err(|err| EmulatorError::BadFile {
            path: path.display().to_string(),
            reason: format!("could not read file: {}", err),
        })?;

        Self::from_bytes(&path.display().to_string(), &contents)
    }

    /// Parse a cartridge image from raw bytes
    ///
    /// `path` is only used to label errors and log lines.
    pub fn from_bytes(path: &str, contents: &[u8]) -> Result<Self, EmulatorError> {
        let bad_file = |reason: &str| EmulatorError::BadFile {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if contents.len() <= HEADER_SIZE {
            return Err(bad_file("file too short for an iNES header"));
        }
        if &contents[0..4] != b"NES\x1A" {
            return Err(bad_file("missing NES signature"));
        }

        let version = header_version(contents[7]);
        log::debug!("header revision {:?}", version);

        let info = parse_info(contents, version);
        log::debug!(
            "mapper {} (submapper {}), program ROM {} KiB, character ROM {} KiB",
            info.mapper_id,
            info.submapper_id,
            info.prg_rom_size >> 10,
            info.chr_rom_size >> 10
        );

        if info.prg_rom_size == 0 {
            return Err(bad_file("header declares no program ROM"));
        }

        let rom_start = HEADER_SIZE + if info.has_trainer { TRAINER_SIZE } else { 0 };
        let total = rom_start + info.prg_rom_size + info.chr_rom_size;
        if total > contents.len() {
            return Err(bad_file("file size does not match the header's ROM sizes"));
        }

        let prg_rom = contents[rom_start..rom_start + info.prg_rom_size].to_vec();
        let chr_start = rom_start + info.prg_rom_size;
        let chr_rom = contents[chr_start..chr_start + info.chr_rom_size].to_vec();

        let mapper = create_mapper(&info, prg_rom, chr_rom)?;
        Ok(Cartridge {
            info,
            mapper: Some(mapper),
        })
    }

    /// Whether a cartridge image has been loaded
    pub fn is_loaded(&self) -> bool {
        self.mapper.is_some()
    }

    /// Header-derived description
    pub fn info(&self) -> &CartridgeInfo {
        &self.info
    }

    /// Nametable mirroring the cartridge selects
    pub fn mirroring(&self) -> Mirroring {
        self.info.mirroring
    }

    /// Service a CPU bus read in $4020-$FFFF
    pub fn cpu_read(&self, address: u16) -> u8 {
        match &self.mapper {
            Some(mapper) => mapper.cpu_read(address),
            None => 0,
        }
    }

    /// Service a CPU bus write in $4020-$FFFF
    pub fn cpu_write(&mut self, address: u16, value: u8) {
        if let Some(mapper) = &mut self.mapper {
            mapper.cpu_write(address, value);
        }
    }

    /// Service a PPU bus read in $0000-$1FFF (pattern tables)
    pub fn ppu_read(&self, address: u16) -> u8 {
        match &self.mapper {
            Some(mapper) => mapper.ppu_read(address),
            None => 0,
        }
    }

    /// Service a PPU bus write in $0000-$1FFF
    pub fn ppu_write(&mut self, address: u16, value: u8) {
        if let Some(mapper) = &mut self.mapper {
            mapper.ppu_write(address, value);
        }
    }
}

fn header_version(byte7: u8) -> HeaderVersion {
    match byte7 & 0x0C {
        0x00 => HeaderVersion::V1,
        0x08 => HeaderVersion::V2,
        _ => HeaderVersion::V0,
    }
}

fn parse_info(contents: &[u8], version: HeaderVersion) -> CartridgeInfo {
    let mut mapper_id = u16::from(contents[6] >> 4);
    let mut submapper_id = 0;
    if version != HeaderVersion::V0 {
        mapper_id |= u16::from(contents[7] & 0xF0);
    }
    if version == HeaderVersion::V2 {
        mapper_id |= u16::from(contents[8] & 0x0F) << 8;
        submapper_id = contents[8] >> 4;
    }

    let mirroring = if contents[6] & 0x08 != 0 {
        Mirroring::FourScreen
    } else if contents[6] & 0x01 != 0 {
        Mirroring::Vertical
    } else {
        Mirroring::Horizontal
    };

    let (prg_rom_size, chr_rom_size) = if version == HeaderVersion::V2 {
        (
            rom_size_v2(contents[4], contents[9] & 0x0F, PRG_ROM_UNIT),
            rom_size_v2(contents[5], contents[9] >> 4, CHR_ROM_UNIT),
        )
    } else {
        (
            contents[4] as usize * PRG_ROM_UNIT,
            contents[5] as usize * CHR_ROM_UNIT,
        )
    };

    let tv_system = match version {
        HeaderVersion::V2 => TvSystem::Ntsc,
        _ if contents[9] & 0x01 != 0 => TvSystem::Pal,
        _ => TvSystem::Ntsc,
    };

    CartridgeInfo {
        mapper_id,
        submapper_id,
        mirroring,
        tv_system,
        prg_rom_size,
        chr_rom_size,
        has_trainer: contents[6] & 0x04 != 0,
    }
}

/// Decode a NES 2.0 ROM size field
///
/// The size is a 12-bit unit count unless the high nibble is $F, in which
/// case the low byte encodes a multiplier-exponent pair giving sizes that
/// are not multiples of the unit.
fn rom_size_v2(lsb: u8, msb_nibble: u8, unit: usize) -> usize {
    if msb_nibble != 0x0F {
        ((lsb as usize) | ((msb_nibble as usize) << 8)) * unit
    } else {
        let multiplier = 2 * (lsb & 0x03) as usize + 1;
        let exponent = (lsb >> 2) as u32;
        multiplier << exponent
    }
}
