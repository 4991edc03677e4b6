//! # Configuration Management
//!
//! Loads the optional `moon-phases.toml` file. Every setting has a sensible
//! default, so a missing or broken file never stops a caller from computing
//! phases.
//!
//! ```toml
//! [phases]
//! fraction_tolerance = 1e-9
//!
//! [almanac]
//! upcoming_count = 4
//! ```

use crate::lunar::{FRACTION_TOLERANCE, MAX_FRACTION_TOLERANCE};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default file name looked up by [`Config::load`].
pub const CONFIG_FILE: &str = "moon-phases.toml";

/// Upper bound on `upcoming_count`.
pub const MAX_UPCOMING_COUNT: usize = 1000;

/// Settings loaded from `moon-phases.toml`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Phase classification settings
    pub phases: PhaseConfig,
    /// Phase listing settings
    pub almanac: AlmanacConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhaseConfig {
    /// Allowed distance between the fractional part of `k` and 0, ¼, ½ or ¾
    pub fraction_tolerance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AlmanacConfig {
    /// How many phases `Almanac::upcoming` returns
    pub upcoming_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            phases: PhaseConfig {
                fraction_tolerance: FRACTION_TOLERANCE,
            },
            almanac: AlmanacConfig {
                upcoming_count: 4, // one full lunation
            },
        }
    }
}

impl Config {
    /// Load configuration from `moon-phases.toml` in the working directory.
    /// Falls back to the default configuration if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from the given path.
    /// Falls back to the default configuration if the file is missing or invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) if config.is_valid() => {
                    info!(path = %path.display(), "loaded configuration");
                    config
                }
                Ok(config) => {
                    warn!(
                        path = %path.display(),
                        tolerance = config.phases.fraction_tolerance,
                        upcoming_count = config.almanac.upcoming_count,
                        "fraction_tolerance must lie in (0, 0.125) and upcoming_count in 1..=1000; using defaults"
                    );
                    Self::default()
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid config file; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no config file found; using defaults");
                Self::default()
            }
        }
    }

    /// Write the configuration as TOML.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self).context("serializing configuration")?;
        fs::write(path, contents)
            .with_context(|| format!("writing configuration to {}", path.display()))?;
        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    fn is_valid(&self) -> bool {
        let tolerance = self.phases.fraction_tolerance;
        tolerance > 0.0
            && tolerance < MAX_FRACTION_TOLERANCE
            && (1..=MAX_UPCOMING_COUNT).contains(&self.almanac.upcoming_count)
    }
}
