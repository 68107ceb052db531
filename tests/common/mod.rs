// Common test utilities
//
// Builds minimal NROM cartridge images in memory and wires them into a CPU
// + bus (or a whole console) so tests can run short programs without any
// files on disk.

#![allow(dead_code)]

use famicore::{Cartridge, Console, Cpu, CpuBus};

/// One 16 KiB program-ROM bank
pub const PRG_BANK: usize = 16 * 1024;

/// Build an NROM image: one PRG bank, character RAM, `program` placed at
/// CPU address `org`, and the reset vector pointing at `org`
pub fn nrom_image(org: u16, program: &[u8]) -> Vec<u8> {
    nrom_image_with_nmi(org, program, None)
}

/// Same, with an optional NMI vector
pub fn nrom_image_with_nmi(org: u16, program: &[u8], nmi: Option<u16>) -> Vec<u8> {
    assert!(org >= 0x8000, "program must live in cartridge space");

    let mut prg = vec![0u8; PRG_BANK];
    let offset = (org as usize - 0x8000) % PRG_BANK;
    prg[offset..offset + program.len()].copy_from_slice(program);

    // With a single bank, CPU $FFFA-$FFFF land at the top of the bank
    if let Some(nmi) = nmi {
        prg[0x3FFA] = (nmi & 0xFF) as u8;
        prg[0x3FFB] = (nmi >> 8) as u8;
    }
    prg[0x3FFC] = (org & 0xFF) as u8;
    prg[0x3FFD] = (org >> 8) as u8;

    let mut image = vec![0u8; 16];
    image[0..4].copy_from_slice(b"NES\x1A");
    image[4] = 1; // one PRG bank
    image[5] = 0; // no CHR ROM -> CHR RAM
    image.extend(prg);
    image
}

/// A reset CPU and bus with `program` installed at `org`
pub fn cpu_with_program(org: u16, program: &[u8]) -> (Cpu, CpuBus) {
    let image = nrom_image(org, program);
    let cartridge = Cartridge::from_bytes("test.nes", &image).expect("test image parses");

    let mut bus = CpuBus::new();
    bus.insert_cartridge(cartridge);

    let mut cpu = Cpu::new();
    cpu.reset(&mut bus).expect("reset");
    (cpu, bus)
}

/// A console with `image` inserted and both processors reset
pub fn console_with_image(image: &[u8]) -> Console {
    let cartridge = Cartridge::from_bytes("test.nes", image).expect("test image parses");

    let mut console = Console::standalone();
    console.bus_mut().insert_cartridge(cartridge);
    console.reset().expect("reset");
    console
}

/// Advance the CPU a fixed number of cycles
pub fn run_cycles(cpu: &mut Cpu, bus: &mut CpuBus, cycles: u32) {
    for _ in 0..cycles {
        cpu.tick(bus).expect("cpu tick");
    }
}
