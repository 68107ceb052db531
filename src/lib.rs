// famicore - a cycle-accurate NES emulator core
//
// The CPU and PPU advance in lock-step at the hardware's 1:3 clock ratio;
// the address decoders, mirroring rules, and register side effects sit
// between them. See the console module for the master clock and the
// display module for the host window.

pub mod bus;
pub mod cartridge;
pub mod console;
pub mod cpu;
pub mod display;
pub mod error;
pub mod logger;
pub mod ppu;

// Re-export the main types for convenience
pub use bus::CpuBus;
pub use cartridge::{Cartridge, CartridgeInfo, Mapper, Mirroring, TvSystem};
pub use console::{Console, ConsoleControls, EmulatorConfig, VideoConfig};
pub use cpu::{Cpu, Registers};
pub use display::{run_display, FrameBuffer, SharedFrame, WindowConfig};
pub use error::{BusKind, EmulatorError};
pub use ppu::Ppu;
