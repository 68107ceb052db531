// PPU constants

// ========================================
// Timing (NTSC)
// ========================================

/// Dots per scanline (0-340)
pub(super) const DOTS_PER_SCANLINE: u16 = 341;

/// Scanlines per frame (0-261)
pub(super) const SCANLINES_PER_FRAME: u16 = 262;

/// Total dots in an even frame
#[allow(dead_code)]
pub(super) const DOTS_PER_FRAME: u32 =
    (DOTS_PER_SCANLINE as u32) * (SCANLINES_PER_FRAME as u32);

/// Last visible scanline
pub(super) const LAST_VISIBLE_SCANLINE: u16 = 239;

/// Post-render idle scanline
pub(super) const POSTRENDER_SCANLINE: u16 = 240;

/// Scanline whose dot 1 sets the VBlank flag
pub(super) const FIRST_VBLANK_SCANLINE: u16 = 241;

/// Last VBlank scanline
pub(super) const LAST_VBLANK_SCANLINE: u16 = 260;

/// Pre-render scanline (also written -1 in hardware docs)
pub(super) const PRERENDER_SCANLINE: u16 = 261;

// ========================================
// Geometry
// ========================================

/// One nametable in bytes (32x30 tiles + attributes)
pub(super) const NAMETABLE_SIZE: usize = 0x400;

/// Internal nametable RAM: four tables; mirroring folds them to two except
/// in four-screen mode
pub(super) const VRAM_SIZE: usize = NAMETABLE_SIZE * 4;

/// Palette RAM size in bytes
pub(super) const PALETTE_SIZE: usize = 32;

/// Object attribute memory size (64 sprites x 4 bytes)
pub(super) const OAM_SIZE: usize = 256;

/// Sprites evaluated per scanline
pub(super) const SPRITES_PER_LINE: usize = 8;

// ========================================
// Control register ($2000) bits
// ========================================

/// Bits 0-1: base nametable (written into t bits 10-11)
pub(super) const CTRL_NAMETABLE: u8 = 0x03;
/// Bit 2: VRAM address increment (0: +1, 1: +32)
pub(super) const CTRL_INCREMENT_32: u8 = 0x04;
/// Bit 3: sprite pattern table for 8x8 sprites
pub(super) const CTRL_SPRITE_TABLE: u8 = 0x08;
/// Bit 4: background pattern table
pub(super) const CTRL_BACKGROUND_TABLE: u8 = 0x10;
/// Bit 5: sprite height (0: 8x8, 1: 8x16)
pub(super) const CTRL_SPRITE_HEIGHT: u8 = 0x20;
/// Bit 7: generate NMI at VBlank start
pub(super) const CTRL_NMI_ENABLE: u8 = 0x80;

// ========================================
// Mask register ($2001) bits
// ========================================

/// Bit 0: grayscale output
pub(super) const MASK_GRAYSCALE: u8 = 0x01;
/// Bit 1: show background in the leftmost 8 pixels
pub(super) const MASK_BACKGROUND_LEFT: u8 = 0x02;
/// Bit 2: show sprites in the leftmost 8 pixels
pub(super) const MASK_SPRITES_LEFT: u8 = 0x04;
/// Bit 3: show background
pub(super) const MASK_SHOW_BACKGROUND: u8 = 0x08;
/// Bit 4: show sprites
pub(super) const MASK_SHOW_SPRITES: u8 = 0x10;

// ========================================
// Status register ($2002) bits
// ========================================

/// Bit 5: sprite overflow
pub(super) const STATUS_SPRITE_OVERFLOW: u8 = 0x20;
/// Bit 6: sprite 0 hit
pub(super) const STATUS_SPRITE_ZERO_HIT: u8 = 0x40;
/// Bit 7: vertical blank
pub(super) const STATUS_VBLANK: u8 = 0x80;
