// PPU bus decoding
//
// The 14-bit PPU address space:
//
// ```text
// $0000-$1FFF  pattern tables (cartridge)
// $2000-$2FFF  four logical nametables, folded by mirroring
// $3000-$3EFF  mirror of $2000-$2EFF
// $3F00-$3FFF  palette RAM, 32 bytes repeated
// ```

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::{Cartridge, Mirroring};
use crate::error::{BusKind, EmulatorError};

impl Ppu {
    /// Fold a nametable address onto the internal VRAM array
    ///
    /// The two-bit logical table index reduces to a physical table per the
    /// cartridge's arrangement: horizontal maps (0,1)->0 and (2,3)->1,
    /// vertical maps (0,2)->0 and (1,3)->1, four-screen keeps all four.
    pub(super) fn mirror_nametable(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let physical = match self.mirroring {
            Mirroring::Horizontal => table / 2,
            Mirroring::Vertical => table % 2,
            Mirroring::FourScreen => table,
        };

        physical * NAMETABLE_SIZE + offset
    }

    /// Reduce a palette address to its slot in the 32-byte palette RAM
    ///
    /// $3F10/$3F14/$3F18/$3F1C alias $3F00/$3F04/$3F08/$3F0C: sprite palette
    /// entry 0 is the shared backdrop color.
    pub(super) fn mirror_palette(&self, addr: u16) -> usize {
        let index = (addr & 0x001F) as usize;
        if index >= 0x10 && index % 4 == 0 {
            index - 0x10
        } else {
            index
        }
    }

    /// Read a byte from the PPU bus
    pub(super) fn read_vram(&self, addr: u16, cart: &Cartridge) -> Result<u8, EmulatorError> {
        match addr {
            0x0000..=0x1FFF => Ok(cart.ppu_read(addr)),
            0x2000..=0x3EFF => Ok(self.vram[self.mirror_nametable(addr)]),
            0x3F00..=0x3FFF => Ok(self.palette[self.mirror_palette(addr)]),
            _ => Err(EmulatorError::InvalidBusAccess {
                bus: BusKind::Ppu,
                address: addr,
            }),
        }
    }

    /// Write a byte to the PPU bus
    pub(super) fn write_vram(
        &mut self,
        addr: u16,
        value: u8,
        cart: &mut Cartridge,
    ) -> Result<(), EmulatorError> {
        match addr {
            0x0000..=0x1FFF => {
                cart.ppu_write(addr, value);
                Ok(())
            }
            0x2000..=0x3EFF => {
                let index = self.mirror_nametable(addr);
                self.vram[index] = value;
                Ok(())
            }
            0x3F00..=0x3FFF => {
                let index = self.mirror_palette(addr);
                self.palette[index] = value;
                Ok(())
            }
            _ => Err(EmulatorError::InvalidBusAccess {
                bus: BusKind::Ppu,
                address: addr,
            }),
        }
    }
}
