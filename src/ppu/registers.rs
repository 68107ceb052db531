// The eight CPU-facing PPU registers
//
// The CPU reaches the PPU only through these ports, mirrored every 8 bytes
// across $2000-$3FFF. Several have side effects that games depend on: the
// Status read clears VBlank and the write latch, the Data port reads
// through a one-byte delay buffer, and the Scroll/Address pairs assemble
// the 15-bit t register two writes at a time.

use super::constants::*;
use super::Ppu;
use crate::cartridge::Cartridge;
use crate::error::{BusKind, EmulatorError};

impl Ppu {
    /// Read register `index` (0-7, pre-masked by the CPU bus)
    pub fn read_register(
        &mut self,
        index: u16,
        cart: &mut Cartridge,
    ) -> Result<u8, EmulatorError> {
        match index {
            // Control, Mask, OAM address, Scroll, Address are write-only
            0 | 1 | 3 | 5 | 6 => Ok(0),

            // Status: read clears VBlank and resets the write latch
            2 => {
                let value = self.status;
                self.status &= !STATUS_VBLANK;
                self.w = false;
                Ok(value)
            }

            // OAM data: no address increment on read
            4 => Ok(self.oam[self.oam_addr as usize]),

            // Data: buffered except for palette addresses
            7 => {
                let addr = self.v & 0x3FFF;
                let value = if addr >= 0x3F00 {
                    // Palette reads bypass the buffer, which is refilled
                    // from the nametable mirrored underneath
                    let value = self.read_vram(addr, cart)?;
                    self.read_buffer = self.read_vram(addr & 0x2FFF, cart)?;
                    value
                } else {
                    let value = self.read_buffer;
                    self.read_buffer = self.read_vram(addr, cart)?;
                    value
                };
                self.increment_vram_addr();
                Ok(value)
            }

            _ => Err(EmulatorError::InvalidBusAccess {
                bus: BusKind::Cpu,
                address: 0x2000 | index,
            }),
        }
    }

    /// Write register `index` (0-7, pre-masked by the CPU bus)
    pub fn write_register(
        &mut self,
        index: u16,
        value: u8,
        cart: &mut Cartridge,
    ) -> Result<(), EmulatorError> {
        match index {
            // Control
            0 => {
                let nmi_was_enabled = self.control & CTRL_NMI_ENABLE != 0;
                self.control = value;

                // t: ...GH.. ........ <- value: ......GH
                self.t = (self.t & 0xF3FF) | (u16::from(value & CTRL_NAMETABLE) << 10);

                let nmi_enabled = self.control & CTRL_NMI_ENABLE != 0;
                if !nmi_was_enabled && nmi_enabled && self.status & STATUS_VBLANK != 0 {
                    // Rising edge during VBlank raises NMI immediately
                    self.nmi_pending = true;
                } else if nmi_was_enabled && !nmi_enabled {
                    self.nmi_pending = false;
                }
                Ok(())
            }

            // Mask
            1 => {
                self.mask = value;
                Ok(())
            }

            // Status is read-only
            2 => Ok(()),

            // OAM address
            3 => {
                self.oam_addr = value;
                Ok(())
            }

            // OAM data: post-increments the address
            4 => {
                self.oam[self.oam_addr as usize] = value;
                self.oam_addr = self.oam_addr.wrapping_add(1);
                Ok(())
            }

            // Scroll: first write is X, second is Y
            5 => {
                if !self.w {
                    // t: ....... ...ABCDE <- value: ABCDE...
                    // x:              FGH <- value: .....FGH
                    self.t = (self.t & 0xFFE0) | (u16::from(value) >> 3);
                    self.fine_x = value & 0x07;
                } else {
                    // t: FGH..AB CDE..... <- value: ABCDEFGH
                    self.t = (self.t & 0x8FFF) | (u16::from(value & 0x07) << 12);
                    self.t = (self.t & 0xFC1F) | (u16::from(value & 0xF8) << 2);
                }
                self.w = !self.w;
                Ok(())
            }

            // Address: high byte then low byte, then v latches t
            6 => {
                if !self.w {
                    // t: .CDEFGH ........ <- value: ..CDEFGH (bit 14 cleared)
                    self.t = (self.t & 0x00FF) | (u16::from(value & 0x3F) << 8);
                } else {
                    // t: ....... ABCDEFGH <- value: ABCDEFGH, then v = t
                    self.t = (self.t & 0xFF00) | u16::from(value);
                    self.v = self.t;
                }
                self.w = !self.w;
                Ok(())
            }

            // Data
            7 => {
                self.write_vram(self.v & 0x3FFF, value, cart)?;
                self.increment_vram_addr();
                Ok(())
            }

            _ => Err(EmulatorError::InvalidBusAccess {
                bus: BusKind::Cpu,
                address: 0x2000 | index,
            }),
        }
    }

    /// Post-access increment of v, by 1 or 32 per Control bit 2
    fn increment_vram_addr(&mut self) {
        let step = if self.control & CTRL_INCREMENT_32 != 0 {
            32
        } else {
            1
        };
        self.v = self.v.wrapping_add(step) & 0x7FFF;
    }
}
