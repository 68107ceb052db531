// Configuration persistence
//
// User-facing settings live in a TOML file next to the executable; a
// missing or unreadable file falls back to defaults and writes them out.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Configuration file path
const CONFIG_FILE: &str = "famicore.toml";

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Integer window scale (1-8)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            video: VideoConfig {
                scale: 3,
                vsync: true,
            },
        }
    }
}

impl EmulatorConfig {
    /// Load the configuration, or create and persist the defaults
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            // Best effort; a read-only working directory is fine
            let _ = config.save();
            config
        })
    }

    /// Load the configuration from disk
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save the configuration to disk
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
