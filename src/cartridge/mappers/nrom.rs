// NROM (mapper 0) - no bank switching at all
//
// Memory layout:
// - CPU $8000-$FFFF: program ROM; a 16 KiB image repeats so the last
//   16 KiB mirrors the first
// - PPU $0000-$1FFF: 8 KiB character ROM, or character RAM when the header
//   declares no character ROM

use super::Mapper;

/// Character memory size (8 KiB pattern tables)
const CHR_SIZE: usize = 0x2000;

/// Mapper 0 implementation
///
/// Used by the earliest commercial titles (Super Mario Bros., Donkey Kong,
/// Balloon Fight). There are no mapper registers; writes to ROM are dropped.
pub struct Nrom {
    prg_rom: Vec<u8>,
    chr_mem: Vec<u8>,
    chr_is_ram: bool,
}

impl Nrom {
    /// Build an NROM board around the parsed ROM blocks
    ///
    /// An empty character-ROM block means the board carries 8 KiB of
    /// character RAM instead.
    pub fn new(prg_rom: Vec<u8>, chr_rom: Vec<u8>) -> Self {
        let chr_is_ram = chr_rom.is_empty();
        let chr_mem = if chr_is_ram {
            vec![0; CHR_SIZE]
        } else {
            chr_rom
        };

        Nrom {
            prg_rom,
            chr_mem,
            chr_is_ram,
        }
    }
}

impl Mapper for Nrom {
    fn cpu_read(&self, address: u16) -> u8 {
        match address {
            0x8000..=0xFFFF => {
                // Modulo folds a 16 KiB image over the full 32 KiB window
                let index = (address as usize - 0x8000) % self.prg_rom.len();
                self.prg_rom[index]
            }
            _ => 0,
        }
    }

    fn cpu_write(&mut self, _address: u16, _value: u8) {
        // Program ROM is read-only and NROM has no registers
    }

    fn ppu_read(&self, address: u16) -> u8 {
        match address {
            0x0000..=0x1FFF => self.chr_mem[address as usize % self.chr_mem.len()],
            _ => 0,
        }
    }

    fn ppu_write(&mut self, address: u16, value: u8) {
        if self.chr_is_ram {
            if let 0x0000..=0x1FFF = address {
                let len = self.chr_mem.len();
                self.chr_mem[address as usize % len] = value;
            }
        }
        // Character ROM writes are silently dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i & 0xFF) as u8).collect()
    }

    #[test]
    fn test_cpu_read_16kb_mirrors_upper_half() {
        let mapper = Nrom::new(patterned(16 * 1024), patterned(8 * 1024));

        assert_eq!(mapper.cpu_read(0x8000), 0x00);
        assert_eq!(mapper.cpu_read(0x8001), 0x01);
        assert_eq!(mapper.cpu_read(0xBFFF), 0xFF);

        // $C000-$FFFF mirrors $8000-$BFFF for a 16 KiB image
        assert_eq!(mapper.cpu_read(0xC000), mapper.cpu_read(0x8000));
        assert_eq!(mapper.cpu_read(0xFFFF), mapper.cpu_read(0xBFFF));
    }

    #[test]
    fn test_cpu_read_32kb_uses_both_halves() {
        let mut prg = patterned(32 * 1024);
        prg[0x4000] = 0x5A;
        let mapper = Nrom::new(prg, patterned(8 * 1024));

        assert_eq!(mapper.cpu_read(0xC000), 0x5A);
    }

    #[test]
    fn test_cpu_write_to_rom_is_dropped() {
        let mut mapper = Nrom::new(patterned(16 * 1024), patterned(8 * 1024));
        let before = mapper.cpu_read(0x8000);

        mapper.cpu_write(0x8000, !before);
        assert_eq!(mapper.cpu_read(0x8000), before);
    }

    #[test]
    fn test_chr_rom_is_read_only() {
        let mut mapper = Nrom::new(patterned(16 * 1024), patterned(8 * 1024));

        mapper.ppu_write(0x0000, 0xFF);
        assert_eq!(mapper.ppu_read(0x0000), 0x00);
        assert_eq!(mapper.ppu_read(0x1FFF), 0xFF);
    }

    #[test]
    fn test_chr_ram_when_no_chr_rom() {
        let mut mapper = Nrom::new(patterned(16 * 1024), Vec::new());

        mapper.ppu_write(0x0000, 0x42);
        mapper.ppu_write(0x1FFF, 0x99);
        assert_eq!(mapper.ppu_read(0x0000), 0x42);
        assert_eq!(mapper.ppu_read(0x1FFF), 0x99);
    }

    #[test]
    fn test_unmapped_cpu_region_reads_zero() {
        let mut mapper = Nrom::new(patterned(16 * 1024), patterned(8 * 1024));
        assert_eq!(mapper.cpu_read(0x4020), 0);
        assert_eq!(mapper.cpu_read(0x5FFF), 0);
        assert_eq!(mapper.cpu_read(0x7FFF), 0);

        // Nothing is mapped below $8000, so writes there are dropped too
        mapper.cpu_write(0x6000, 0xFF);
        assert_eq!(mapper.cpu_read(0x6000), 0);
    }
}
