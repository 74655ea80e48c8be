//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline values for every knob.
//! 2. **Structures:** Hierarchical config for general run control and main memory.
//! 3. **Loading:** JSON parsing through `serde_json`; every field may be omitted.
//!
//! The CLI loads a JSON file with `--config` and then applies its own flag overrides, or
//! uses `Config::default()`.

use serde::{Deserialize, Serialize};

use crate::common::constants::DEFAULT_MAX_CYCLES;

/// Default configuration constants for the simulator.
mod defaults {
    /// Cycle budget before a run is abandoned as non-terminating.
    pub const MAX_CYCLES: u64 = super::DEFAULT_MAX_CYCLES;

    /// Zeroed words appended after the data segment.
    pub const RESERVE_WORDS: usize = 0;
}

/// Top-level simulator configuration.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "debug_mode": true,
///         "max_cycles": 500
///     },
///     "memory": {
///         "reserve_words": 16
///     }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.debug_mode);
/// assert_eq!(config.general.max_cycles, 500);
/// assert_eq!(config.memory.reserve_words, 16);
///
/// // Omitted sections fall back to their defaults.
/// let config = Config::from_json_str("{}").unwrap();
/// assert!(!config.general.debug_mode);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General run control
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not valid JSON or a field has the
    /// wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Report all four latches, registers and memory after every cycle.
    #[serde(default)]
    pub debug_mode: bool,

    /// Abort the run after this many cycles. `0` disables the limit.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default cycle budget.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// Zero-initialised words appended after the loaded data segment.
    #[serde(default = "MemoryConfig::default_reserve_words")]
    pub reserve_words: usize,
}

impl MemoryConfig {
    /// Returns the default number of reserved words.
    const fn default_reserve_words() -> usize {
        defaults::RESERVE_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            reserve_words: defaults::RESERVE_WORDS,
        }
    }
}
