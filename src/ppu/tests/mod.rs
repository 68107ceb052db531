//! PPU unit tests
//!
//! Organized by functionality: register behavior, bus decoding, timing,
//! and rendering output.

use super::*;
use crate::cartridge::Cartridge;

// ========================================
// Test Helpers
// ========================================

/// NROM cartridge with 16 KiB of PRG and 8 KiB of writable character RAM
pub(crate) fn test_cartridge() -> Cartridge {
    let mut image = vec![0u8; 16];
    image[0..4].copy_from_slice(b"NES\x1A");
    image[4] = 1; // one 16 KiB PRG bank
    image[5] = 0; // no CHR ROM -> CHR RAM
    image.extend(std::iter::repeat(0u8).take(16 * 1024));
    Cartridge::from_bytes("ppu-test.nes", &image).expect("test image parses")
}

/// Tick until the PPU sits at (scanline, dot), not yet processed
pub(crate) fn advance_to(ppu: &mut Ppu, cart: &mut Cartridge, scanline: u16, dot: u16) {
    let mut guard = 0u32;
    while !(ppu.scanline() == scanline && ppu.dot() == dot) {
        ppu.tick(cart).expect("ppu tick");
        guard += 1;
        assert!(guard < 200_000, "position ({}, {}) never reached", scanline, dot);
    }
}

/// Run whole frames to completion
pub(crate) fn run_frames(ppu: &mut Ppu, cart: &mut Cartridge, frames: u32) {
    let mut completed = 0;
    let mut guard = 0u32;
    while completed < frames {
        if ppu.tick(cart).expect("ppu tick") {
            completed += 1;
        }
        guard += 1;
        assert!(guard < frames * 100_000 + 100_000, "frame never completed");
    }
}

// ========================================
// Test Modules
// ========================================

mod registers;
mod rendering;
