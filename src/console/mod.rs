// Console module - owns every component and runs the master clock
//
// The console wires the CPU to its bus (which owns the PPU and the
// cartridge) and advances them in lock-step: one CPU cycle, then three PPU
// dots. The CPU reaches the PPU only through the memory-mapped registers
// and the OAM-DMA suspension; the PPU reaches back only through the NMI
// line. Finished frames are published to the shared frame the window
// thread polls.

mod config;

pub use config::{EmulatorConfig, VideoConfig};

use crate::bus::CpuBus;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::display::SharedFrame;
use crate::error::EmulatorError;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Sleep between pause-state checks while the emulation idles
const PAUSE_POLL: Duration = Duration::from_millis(10);

/// Cross-thread control flags for a running console
///
/// The window thread writes these, the emulation thread reads them; relaxed
/// ordering is enough because no other state hangs off any of them.
pub struct ConsoleControls {
    running: AtomicBool,
    paused: AtomicBool,
    reset_requested: AtomicBool,
}

impl ConsoleControls {
    /// Flags for a console that is powered on but paused (nothing loaded)
    pub fn new() -> Self {
        ConsoleControls {
            running: AtomicBool::new(true),
            paused: AtomicBool::new(true),
            reset_requested: AtomicBool::new(false),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Ask the emulation loop to exit at its next iteration
    pub fn power_off(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    pub fn unpause(&self) {
        self.paused.store(false, Ordering::Relaxed);
    }

    pub fn toggle_pause(&self) {
        self.paused.fetch_xor(true, Ordering::Relaxed);
    }

    /// Ask the emulation loop to reset the machine
    pub fn request_reset(&self) {
        self.reset_requested.store(true, Ordering::Relaxed);
    }

    fn take_reset_request(&self) -> bool {
        self.reset_requested.swap(false, Ordering::Relaxed)
    }
}

impl Default for ConsoleControls {
    fn default() -> Self {
        Self::new()
    }
}

/// The console: CPU, buses, PPU, cartridge, and the clock that binds them
pub struct Console {
    cpu: Cpu,
    bus: CpuBus,
    controls: Arc<ConsoleControls>,
    frame: Arc<SharedFrame>,
}

impl Console {
    /// Build a console around shared control flags and a shared frame
    pub fn new(controls: Arc<ConsoleControls>, frame: Arc<SharedFrame>) -> Self {
        Console {
            cpu: Cpu::new(),
            bus: CpuBus::new(),
            controls,
            frame,
        }
    }

    /// A console with its own controls and frame, for tests and embedding
    pub fn standalone() -> Self {
        Self::new(
            Arc::new(ConsoleControls::new()),
            Arc::new(SharedFrame::new()),
        )
    }

    /// Handle to the control flags, for the window thread
    pub fn controls(&self) -> Arc<ConsoleControls> {
        Arc::clone(&self.controls)
    }

    /// Load a cartridge image
    ///
    /// Emulation pauses first. On success the CPU restarts from the new
    /// reset vector and the console unpauses; on failure the previous
    /// cartridge stays in place and the console stays paused.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EmulatorError> {
        self.pause();

        match Cartridge::from_file(path) {
            Ok(cartridge) => {
                let info = cartridge.info().clone();
                self.bus.insert_cartridge(cartridge);
                self.bus.ppu_mut().reset();
                self.cpu.reset(&mut self.bus)?;
                log::info!(
                    "cartridge ready: mapper {}, {} KiB program, {} KiB character, {:?} mirroring",
                    info.mapper_id,
                    info.prg_rom_size >> 10,
                    info.chr_rom_size >> 10,
                    info.mirroring
                );
                self.unpause();
                Ok(())
            }
            Err(err) => {
                log::info!("cartridge load failed: {}", err);
                Err(err)
            }
        }
    }

    /// Run until powered off
    ///
    /// While paused the loop sleeps and rechecks; while running it advances
    /// the master clock. An illegal instruction or bus fault stops the loop
    /// with the error after logging it; the last frame stays published.
    pub fn run(&mut self) -> Result<(), EmulatorError> {
        log::info!("emulation loop starting");

        while self.controls.is_running() {
            if self.controls.take_reset_request() {
                self.reset()?;
            }

            if self.controls.is_paused() || !self.bus.cartridge().is_loaded() {
                thread::sleep(PAUSE_POLL);
                continue;
            }

            if let Err(err) = self.step() {
                log::error!("emulation stopped: {}", err);
                return Err(err);
            }
        }

        log::info!("emulation loop stopped");
        Ok(())
    }

    /// Advance the master clock: one CPU cycle, then three PPU dots
    pub fn step(&mut self) -> Result<(), EmulatorError> {
        self.cpu.tick(&mut self.bus)?;
        for _ in 0..3 {
            if self.bus.tick_ppu()? {
                self.frame.publish(self.bus.ppu().frame());
            }
        }
        Ok(())
    }

    /// Reset CPU and PPU, as the front-panel button would
    pub fn reset(&mut self) -> Result<(), EmulatorError> {
        self.bus.ppu_mut().reset();
        self.cpu.reset(&mut self.bus)
    }

    pub fn pause(&mut self) {
        self.controls.pause();
    }

    pub fn unpause(&mut self) {
        self.controls.unpause();
    }

    pub fn toggle_pause(&mut self) {
        self.controls.toggle_pause();
    }

    pub fn power_off(&mut self) {
        self.controls.power_off();
    }

    /// Borrowed view of the 256x240x3 RGB picture
    pub fn frame_buffer(&self) -> &[u8] {
        self.bus.ppu().frame()
    }

    /// The CPU, for inspection
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// The bus (and through it the PPU and cartridge)
    pub fn bus(&self) -> &CpuBus {
        &self.bus
    }

    /// Mutable bus access, for tests that poke memory directly
    pub fn bus_mut(&mut self) -> &mut CpuBus {
        &mut self.bus
    }
}
