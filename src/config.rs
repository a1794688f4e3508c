// src/config.rs

//! Engine tuning configuration.
//!
//! Deserializable from a JSON file; every section applies defaults for
//! missing fields, so a partial config is always valid. A process-wide
//! default is available through [`default_config`] for callers that do not
//! carry their own.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Complete engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Scratch-buffer pool settings.
    pub scratch: ScratchConfig,
}

/// Settings for the short-lived scanline scratch pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScratchConfig {
    /// Longest scanline (in pixels) the pool will hand out. Requests above
    /// this are refused, which callers observe as the absent-result failure
    /// of Get-Scanline.
    pub max_scanline_pixels: usize,
    /// How many returned buffers the pool keeps around for reuse before
    /// letting further returns drop.
    pub retained_buffers: usize,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        ScratchConfig {
            max_scanline_pixels: 16_384,
            retained_buffers: 4,
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

static DEFAULT_CONFIG: Lazy<EngineConfig> = Lazy::new(EngineConfig::default);

/// The process-wide default configuration.
pub fn default_config() -> &'static EngineConfig {
    &DEFAULT_CONFIG
}
