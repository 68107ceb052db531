//! PPU register tests
//!
//! Register side effects: the Status read clearing VBlank and the write
//! latch, the two-write Scroll/Address protocol into t/x/w, OAM port
//! increments, and the PPUDATA delay buffer.

use super::*;

// Initialization
// ========================================

#[test]
fn test_power_on_state() {
    let ppu = Ppu::new();

    assert_eq!(ppu.control, 0x00);
    assert_eq!(ppu.mask, 0x00);
    assert_eq!(ppu.status, 0x00);
    assert_eq!(ppu.oam_addr, 0x00);
    assert_eq!(ppu.v, 0x0000);
    assert_eq!(ppu.t, 0x0000);
    assert_eq!(ppu.fine_x, 0);
    assert!(!ppu.w);

    // Reset leaves the PPU at the top of the pre-render scanline
    assert_eq!(ppu.scanline(), 261);
    assert_eq!(ppu.dot(), 0);
    assert!(!ppu.frame_is_odd);
}

#[test]
fn test_reset_restores_register_state() {
    let mut ppu = Ppu::new();
    ppu.control = 0xFF;
    ppu.mask = 0xFF;
    ppu.status = 0xE0;
    ppu.v = 0x2C00;
    ppu.w = true;
    ppu.scanline = 100;
    ppu.dot = 200;

    ppu.reset();

    assert_eq!(ppu.control, 0x00);
    assert_eq!(ppu.mask, 0x00);
    assert_eq!(ppu.status, 0x00);
    assert_eq!(ppu.v, 0x0000);
    assert!(!ppu.w);
    assert_eq!(ppu.scanline(), 261);
    assert_eq!(ppu.dot(), 0);
}

// Status ($2002)
// ========================================

#[test]
fn test_status_read_clears_vblank_and_latch() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.status = 0xE0;
    ppu.w = true;

    let value = ppu.read_register(2, &mut cart).unwrap();
    assert_eq!(value, 0xE0, "read returns the pre-clear value");
    assert_eq!(ppu.status & 0x80, 0, "VBlank clears on read");
    assert_eq!(ppu.status & 0x60, 0x60, "sprite bits survive the read");
    assert!(!ppu.w, "write latch resets on read");
}

#[test]
fn test_write_only_registers_read_zero() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    for index in [0, 1, 3, 5, 6] {
        assert_eq!(ppu.read_register(index, &mut cart).unwrap(), 0);
    }
}

// Control ($2000)
// ========================================

#[test]
fn test_control_write_sets_nametable_bits_of_t() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.write_register(0, 0x03, &mut cart).unwrap();
    assert_eq!(ppu.t & 0x0C00, 0x0C00);

    ppu.write_register(0, 0x00, &mut cart).unwrap();
    assert_eq!(ppu.t & 0x0C00, 0x0000);
}

#[test]
fn test_nmi_rising_edge_during_vblank() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.status = 0x80; // inside VBlank
    ppu.write_register(0, 0x80, &mut cart).unwrap();

    assert!(ppu.take_nmi(), "0->1 on bit 7 during VBlank raises NMI");
    assert!(!ppu.take_nmi(), "take_nmi consumes the request");
}

#[test]
fn test_nmi_no_edge_outside_vblank() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.write_register(0, 0x80, &mut cart).unwrap();
    assert!(!ppu.take_nmi());
}

#[test]
fn test_nmi_disable_cancels_pending() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.status = 0x80;
    ppu.write_register(0, 0x80, &mut cart).unwrap();
    ppu.write_register(0, 0x00, &mut cart).unwrap();

    assert!(!ppu.take_nmi(), "clearing bit 7 withdraws the request");
}

// OAM ports ($2003/$2004)
// ========================================

#[test]
fn test_oam_write_increments_address() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.write_register(3, 0x10, &mut cart).unwrap();
    ppu.write_register(4, 0xAA, &mut cart).unwrap();
    ppu.write_register(4, 0xBB, &mut cart).unwrap();

    assert_eq!(ppu.oam[0x10], 0xAA);
    assert_eq!(ppu.oam[0x11], 0xBB);
    assert_eq!(ppu.oam_addr, 0x12);
}

#[test]
fn test_oam_read_does_not_increment() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.oam[0x20] = 0x55;
    ppu.write_register(3, 0x20, &mut cart).unwrap();

    assert_eq!(ppu.read_register(4, &mut cart).unwrap(), 0x55);
    assert_eq!(ppu.read_register(4, &mut cart).unwrap(), 0x55);
    assert_eq!(ppu.oam_addr, 0x20);
}

#[test]
fn test_oam_address_wraps() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.write_register(3, 0xFF, &mut cart).unwrap();
    ppu.write_register(4, 0x01, &mut cart).unwrap();

    assert_eq!(ppu.oam[0xFF], 0x01);
    assert_eq!(ppu.oam_addr, 0x00);
}

// Scroll ($2005)
// ========================================

#[test]
fn test_scroll_first_write_sets_coarse_and_fine_x() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    // $7D = coarse X 15, fine X 5
    ppu.write_register(5, 0x7D, &mut cart).unwrap();

    assert_eq!(ppu.t & 0x001F, 15);
    assert_eq!(ppu.fine_x, 5);
    assert!(ppu.w);
}

#[test]
fn test_scroll_second_write_sets_y_bits() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.write_register(5, 0x00, &mut cart).unwrap();
    // $5E = coarse Y 11, fine Y 6
    ppu.write_register(5, 0x5E, &mut cart).unwrap();

    assert_eq!((ppu.t >> 5) & 0x1F, 11, "coarse Y");
    assert_eq!((ppu.t >> 12) & 0x07, 6, "fine Y");
    assert!(!ppu.w, "latch toggles back after the pair");
}

// Address ($2006)
// ========================================

#[test]
fn test_address_write_pair_latches_v() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.write_register(6, 0x21, &mut cart).unwrap();
    assert_ne!(ppu.v, 0x2108, "v only updates on the second write");

    ppu.write_register(6, 0x08, &mut cart).unwrap();
    assert_eq!(ppu.v, 0x2108);
    assert_eq!(ppu.t, 0x2108);
    assert!(!ppu.w);
}

#[test]
fn test_address_first_write_clears_bit_14() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.t = 0x7FFF;
    ppu.write_register(6, 0xFF, &mut cart).unwrap();

    // Only 6 bits of the value land in t's high byte
    assert_eq!(ppu.t >> 8, 0x3F);
}

#[test]
fn test_status_read_resets_address_sequence() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.write_register(6, 0x21, &mut cart).unwrap();
    ppu.read_register(2, &mut cart).unwrap();

    // The next write starts the pair over as a high byte
    ppu.write_register(6, 0x3F, &mut cart).unwrap();
    ppu.write_register(6, 0x00, &mut cart).unwrap();
    assert_eq!(ppu.v, 0x3F00);
}

// Data ($2007)
// ========================================

#[test]
fn test_data_write_then_buffered_read() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    // Write $42 to $2400
    ppu.write_register(6, 0x24, &mut cart).unwrap();
    ppu.write_register(6, 0x00, &mut cart).unwrap();
    ppu.write_register(7, 0x42, &mut cart).unwrap();

    // Point back and read: first result is the stale buffer
    ppu.write_register(6, 0x24, &mut cart).unwrap();
    ppu.write_register(6, 0x00, &mut cart).unwrap();
    let first = ppu.read_register(7, &mut cart).unwrap();
    let second = ppu.read_register(7, &mut cart).unwrap();

    assert_eq!(first, 0x00, "first read returns the old buffer contents");
    assert_eq!(second, 0x42, "second read returns the byte behind v");
}

#[test]
fn test_data_read_from_palette_is_direct() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.palette[0x01] = 0x2A;
    // Put recognizable data in the nametable underneath $3F01
    let nt_index = ppu.mirror_nametable(0x2F01);
    ppu.vram[nt_index] = 0x77;

    ppu.write_register(6, 0x3F, &mut cart).unwrap();
    ppu.write_register(6, 0x01, &mut cart).unwrap();

    let value = ppu.read_register(7, &mut cart).unwrap();
    assert_eq!(value, 0x2A, "palette reads are not delayed");
    assert_eq!(
        ppu.read_buffer, 0x77,
        "buffer refills from the mirrored nametable underneath"
    );
}

#[test]
fn test_data_increment_by_one_and_thirty_two() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    ppu.write_register(6, 0x20, &mut cart).unwrap();
    ppu.write_register(6, 0x00, &mut cart).unwrap();
    ppu.write_register(7, 0x00, &mut cart).unwrap();
    assert_eq!(ppu.v, 0x2001);

    ppu.write_register(0, 0x04, &mut cart).unwrap(); // +32 mode
    ppu.write_register(7, 0x00, &mut cart).unwrap();
    assert_eq!(ppu.v, 0x2021);
}

#[test]
fn test_register_index_out_of_range_is_rejected() {
    let mut ppu = Ppu::new();
    let mut cart = test_cartridge();

    let err = ppu.read_register(8, &mut cart).unwrap_err();
    assert!(matches!(
        err,
        crate::error::EmulatorError::InvalidBusAccess { .. }
    ));
}
