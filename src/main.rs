// famicore - entry point
//
// Two threads, per the hardware's own split: the emulation thread runs the
// console's master clock, the main thread runs the window and polls the
// shared frame at display refresh. The window owns shutdown: closing it
// powers the console off, and the process exit code reflects how the
// emulation thread ended.

use clap::{Parser, ValueEnum};
use famicore::console::{Console, ConsoleControls, EmulatorConfig};
use famicore::display::{run_display, SharedFrame, WindowConfig};
use famicore::logger;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

#[derive(Parser)]
#[command(name = "famicore", version, about = "A cycle-accurate NES emulator")]
struct Args {
    /// Cartridge image to load (.nes)
    rom: Option<PathBuf>,

    /// Logging verbosity
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevelArg,

    /// Write the log to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevelArg {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    All,
}

impl LogLevelArg {
    fn to_filter(self) -> LevelFilter {
        match self {
            LogLevelArg::None => LevelFilter::Off,
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace | LogLevelArg::All => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = logger::init(args.log_level.to_filter(), args.log_file.as_deref()) {
        eprintln!("could not set up logging: {}", err);
        return ExitCode::FAILURE;
    }
    log::info!("starting famicore");

    let config = EmulatorConfig::load_or_default();
    let controls = Arc::new(ConsoleControls::new());
    let frame = Arc::new(SharedFrame::new());

    let emulation = {
        let controls = Arc::clone(&controls);
        let frame = Arc::clone(&frame);
        let rom = args.rom.clone();

        thread::spawn(move || {
            let mut console = Console::new(controls, frame);
            if let Some(rom) = rom {
                // A failed load was already logged; the console stays
                // paused showing a blank frame
                let _ = console.load(&rom);
            } else {
                log::warn!("no cartridge on the command line; nothing to emulate");
            }
            console.run()
        })
    };

    let window_config = WindowConfig::new()
        .with_scale(config.video.scale)
        .with_vsync(config.video.vsync);

    if let Err(err) = run_display(window_config, frame, Arc::clone(&controls)) {
        log::error!("window error: {}", err);
        controls.power_off();
        let _ = emulation.join();
        return ExitCode::FAILURE;
    }

    // The window is gone; make sure the emulation loop winds down
    controls.power_off();
    match emulation.join() {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            log::error!("emulation ended with an error: {}", err);
            ExitCode::FAILURE
        }
        Err(_) => {
            log::error!("emulation thread panicked");
            ExitCode::FAILURE
        }
    }
}
