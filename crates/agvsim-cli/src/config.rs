//! TOML-loadable scheduler configuration.
//!
//! Mirrors `vpp-sim`'s `ScenarioConfig`/TOML pattern: a `Deserialize`
//! struct with per-field defaults equal to the built-in constants, loaded
//! with [`SimulationConfig::from_toml_file`] when `--config` is given and
//! [`SimulationConfig::default`] otherwise.
//!
//! Most of the dispatch policy's constants (travel-time and battery-drain
//! coefficients) are compile-time values baked into `agvsim-fleet::Agv`'s
//! formulas — see that crate's `constants` module for why. This config
//! only covers the knobs the scheduler genuinely takes at construction
//! time: the simulation's start clock and the deadlock-detection
//! parameters.

use std::fs;
use std::path::Path;

use agvsim_core::constants::{FALLBACK_ADVANCE_MIN, MAX_STUCK, SIM_START_MIN};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Scheduler-level knobs, overridable from a TOML file via `--config`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Simulation start time, in minutes since midnight. Defaults to
    /// [`SIM_START_MIN`] (08:00).
    pub sim_start_min: u32,
    /// Consecutive no-progress ticks tolerated before deadlock.
    pub max_stuck: u32,
    /// Fallback clock advance, in minutes, when no event is pending.
    pub fallback_advance_min: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sim_start_min: SIM_START_MIN,
            max_stuck: MAX_STUCK,
            fallback_advance_min: FALLBACK_ADVANCE_MIN,
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}
