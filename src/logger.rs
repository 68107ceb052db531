// Log sink for the `log` facade
//
// The CLI selects a level (none through all) and an optional output file;
// everything else in the crate logs through the `log` macros. Lines carry a
// wall-clock timestamp so a trace of the emulation thread can be lined up
// with what the window thread saw.

use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

struct EmuLogger {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl log::Log for EmuLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Level filtering is done globally via log::set_max_level
        true
    }

    fn log(&self, record: &Record) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        let _ = writeln!(
            sink,
            "{} [{:<5}] {}: {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

/// Install the global logger
///
/// With no file the log goes to stderr. Installing twice fails (the `log`
/// crate allows exactly one global logger), which only matters to tests.
pub fn init(level: LevelFilter, file: Option<&Path>) -> io::Result<()> {
    let sink: Box<dyn Write + Send> = match file {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stderr()),
    };

    log::set_boxed_logger(Box::new(EmuLogger {
        sink: Mutex::new(sink),
    }))
    .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;
    log::set_max_level(level);
    Ok(())
}
