// Mappers module - cartridge bank-switching circuits
//
// The mapper is the cartridge-side address decoder: it services the CPU
// window $4020-$FFFF and the PPU pattern-table window $0000-$1FFF. Only
// NROM (mapper 0) is implemented; the factory rejects everything else so
// the console can keep its previous cartridge.

mod nrom;

use super::CartridgeInfo;
use crate::error::EmulatorError;
use nrom::Nrom;

/// Interface every mapper exposes to the two buses
///
/// Reads outside a mapper's decoded ranges return 0 and writes are dropped,
/// matching open-bus behavior on the real cartridge edge connector.
pub trait Mapper {
    /// Read from the CPU bus window ($4020-$FFFF)
    fn cpu_read(&self, address: u16) -> u8;

    /// Write to the CPU bus window ($4020-$FFFF)
    fn cpu_write(&mut self, address: u16, value: u8);

    /// Read from the PPU pattern-table window ($0000-$1FFF)
    fn ppu_read(&self, address: u16) -> u8;

    /// Write to the PPU pattern-table window ($0000-$1FFF)
    fn ppu_write(&mut self, address: u16, value: u8);
}

/// Build the mapper named by the header
///
/// # Errors
/// `EmulatorError::UnsupportedMapper` when the id has no implementation in
/// this build.
pub fn create_mapper(
    info: &CartridgeInfo,
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
) -> Result<Box<dyn Mapper>, EmulatorError> {
    match info.mapper_id {
        0 => Ok(Box::new(Nrom::new(prg_rom, chr_rom))),
        id => Err(EmulatorError::UnsupportedMapper { id }),
    }
}
