//! Biology override configuration file support.
//!
//! This module provides utilities for reading species biology overrides from
//! TOML configuration files, so operations can tune cycle constants without
//! a rebuild. Every field is optional; anything unset falls back to the
//! built-in species defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::species::{CycleDefaults, Species};
use crate::error::EngineError;

/// Per-species biology overrides loaded from `species.toml`.
///
/// ```toml
/// [dog]
/// cycle_length_days = 210
///
/// [horse]
/// gestation_days = 335
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiologyConfig {
    #[serde(default)]
    pub dog: SpeciesOverride,
    #[serde(default)]
    pub cat: SpeciesOverride,
    #[serde(default)]
    pub horse: SpeciesOverride,
    #[serde(default)]
    pub other: SpeciesOverride,
}

/// Optional overrides for one species' cycle constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeciesOverride {
    #[serde(default)]
    pub cycle_length_days: Option<i64>,
    #[serde(default)]
    pub start_buffer_days: Option<i64>,
    #[serde(default)]
    pub ovulation_offset_days: Option<i64>,
    #[serde(default)]
    pub gestation_days: Option<i64>,
}

impl SpeciesOverride {
    /// Check that every set field is a usable cycle constant.
    ///
    /// Cycle length and gestation must be positive; the start buffer and
    /// ovulation offset must be non-negative.
    fn validate(&self, species: &str) -> Result<(), EngineError> {
        let check = |field: &str, value: Option<i64>, min: i64| match value {
            Some(v) if v < min => Err(EngineError::Configuration(format!(
                "[{}] {} must be at least {}, got {}",
                species, field, min, v
            ))),
            _ => Ok(()),
        };

        check("cycle_length_days", self.cycle_length_days, 1)?;
        check("start_buffer_days", self.start_buffer_days, 0)?;
        check("ovulation_offset_days", self.ovulation_offset_days, 0)?;
        check("gestation_days", self.gestation_days, 1)?;
        Ok(())
    }
}

impl BiologyConfig {
    /// Parse a configuration from a TOML string.
    ///
    /// Rejects overrides that would break the cycle arithmetic: cycle
    /// length and gestation must be positive, buffers and offsets
    /// non-negative.
    pub fn from_str(content: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| EngineError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every species section.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.dog.validate("dog")?;
        self.cat.validate("cat")?;
        self.horse.validate("horse")?;
        self.other.validate("other")?;
        Ok(())
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::Configuration(format!("Failed to read config file: {}", e))
        })?;
        Self::from_str(&content)
    }

    /// Load from the default location if present.
    ///
    /// Searches for `species.toml` in the current directory, then `engine/`,
    /// then the parent directory. A missing file is not an error: the engine
    /// simply runs on built-in constants.
    pub fn from_default_location() -> Result<Option<Self>, EngineError> {
        Self::from_search_paths(&[
            PathBuf::from("species.toml"),
            PathBuf::from("engine/species.toml"),
            PathBuf::from("../species.toml"),
        ])
    }

    /// Load from the first existing path in `paths`, or `None` when no
    /// candidate exists.
    pub fn from_search_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Option<Self>, EngineError> {
        for path in paths {
            let path = path.as_ref();
            if path.exists() {
                log::debug!("Loading biology overrides from {}", path.display());
                return Self::from_file(path).map(Some);
            }
        }

        Ok(None)
    }

    /// Overlay this configuration on top of built-in constants for one
    /// species.
    pub fn apply(&self, species: Species, base: CycleDefaults) -> CycleDefaults {
        let overrides = match species {
            Species::Dog => &self.dog,
            Species::Cat => &self.cat,
            Species::Horse => &self.horse,
            Species::Other => &self.other,
        };

        // Bypassing from_str (constructing a config directly) must still not
        // poison the cycle arithmetic; out-of-range values fall back to base.
        let merge = |field: &str, value: Option<i64>, min: i64, base: i64| match value {
            Some(v) if v >= min => v,
            Some(v) => {
                log::warn!(
                    "Ignoring {} = {} for {:?}: must be at least {}",
                    field,
                    v,
                    species,
                    min
                );
                base
            }
            None => base,
        };

        CycleDefaults {
            cycle_length_days: merge(
                "cycle_length_days",
                overrides.cycle_length_days,
                1,
                base.cycle_length_days,
            ),
            start_buffer_days: merge(
                "start_buffer_days",
                overrides.start_buffer_days,
                0,
                base.start_buffer_days,
            ),
            ovulation_offset_days: merge(
                "ovulation_offset_days",
                overrides.ovulation_offset_days,
                0,
                base.ovulation_offset_days,
            ),
            gestation_days: merge(
                "gestation_days",
                overrides.gestation_days,
                1,
                base.gestation_days,
            ),
        }
    }
}
