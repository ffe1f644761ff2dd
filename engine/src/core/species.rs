//! Species biology defaults.
//!
//! Every species maps to a fixed set of cycle constants through an
//! exhaustive match, so adding a species is a compile-time-checked case
//! rather than a silent string-lookup fallback. Operational overrides come
//! from [`crate::config::BiologyConfig`], layered on top of the built-ins.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::BiologyConfig;

/// Supported species. `Other` carries generic (canine-like) defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Species {
    Dog,
    Cat,
    Horse,
    Other,
}

impl Species {
    /// Built-in biology constants for this species.
    ///
    /// Sourced from standard reproduction references: canine interestrus
    /// interval ~6 months with ovulation ~day 12 of proestrus and gestation
    /// 63 days from ovulation; feline and equine cycles ~21 days; equine
    /// gestation ~340 days.
    pub fn defaults(&self) -> CycleDefaults {
        match self {
            Species::Dog => CycleDefaults {
                cycle_length_days: 180,
                start_buffer_days: 14,
                ovulation_offset_days: 12,
                gestation_days: 63,
            },
            Species::Cat => CycleDefaults {
                cycle_length_days: 21,
                start_buffer_days: 7,
                ovulation_offset_days: 4,
                gestation_days: 64,
            },
            Species::Horse => CycleDefaults {
                cycle_length_days: 21,
                start_buffer_days: 7,
                ovulation_offset_days: 5,
                gestation_days: 340,
            },
            Species::Other => CycleDefaults {
                cycle_length_days: 180,
                start_buffer_days: 14,
                ovulation_offset_days: 12,
                gestation_days: 63,
            },
        }
    }
}

/// Immutable cycle constants for one species.
///
/// # Fields
///
/// * `cycle_length_days` - Days between successive cycle starts
/// * `start_buffer_days` - Buffer added to "today" when seeding a projection
///   with no known history
/// * `ovulation_offset_days` - Days from cycle start to ovulation
/// * `gestation_days` - Days from ovulation to expected birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleDefaults {
    pub cycle_length_days: i64,
    pub start_buffer_days: i64,
    pub ovulation_offset_days: i64,
    pub gestation_days: i64,
}

static BUILTIN_TABLE: Lazy<BiologyTable> = Lazy::new(|| BiologyTable { config: None });

/// Species-to-defaults lookup with optional configuration overrides.
///
/// # Examples
///
/// ```
/// use breedcal_engine::core::species::{BiologyTable, Species};
///
/// let table = BiologyTable::builtin();
/// let dog = table.defaults_for(Species::Dog);
/// assert_eq!(dog.gestation_days, 63);
/// ```
#[derive(Debug, Clone)]
pub struct BiologyTable {
    config: Option<BiologyConfig>,
}

impl BiologyTable {
    /// Process-wide table using only the built-in constants.
    pub fn builtin() -> &'static BiologyTable {
        &BUILTIN_TABLE
    }

    /// Table with operational overrides layered over the built-ins.
    pub fn with_config(config: BiologyConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Table with overrides from the default `species.toml` location.
    ///
    /// Falls back to the built-in constants when no file exists.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Configuration`] when a file is
    /// found but cannot be read, parsed, or validated.
    pub fn from_environment() -> crate::error::Result<Self> {
        Ok(match BiologyConfig::from_default_location()? {
            Some(config) => Self::with_config(config),
            None => Self::builtin().clone(),
        })
    }

    /// Effective cycle constants for the given species.
    pub fn defaults_for(&self, species: Species) -> CycleDefaults {
        let base = species.defaults();
        match &self.config {
            Some(config) => config.apply(species, base),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_species_has_positive_constants() {
        for species in [Species::Dog, Species::Cat, Species::Horse, Species::Other] {
            let d = species.defaults();
            assert!(d.cycle_length_days > 0);
            assert!(d.start_buffer_days >= 0);
            assert!(d.ovulation_offset_days >= 0);
            assert!(d.gestation_days > 0);
        }
    }

    #[test]
    fn builtin_table_matches_species_defaults() {
        let table = BiologyTable::builtin();
        assert_eq!(table.defaults_for(Species::Horse), Species::Horse.defaults());
        assert_eq!(table.defaults_for(Species::Other), Species::Other.defaults());
    }

    #[test]
    fn environment_table_yields_usable_constants() {
        // With or without a species.toml present, the loaded table must
        // resolve positive cycle constants for every species.
        let table = BiologyTable::from_environment().unwrap();
        for species in [Species::Dog, Species::Cat, Species::Horse, Species::Other] {
            let d = table.defaults_for(species);
            assert!(d.cycle_length_days > 0);
            assert!(d.gestation_days > 0);
        }
    }

    #[test]
    fn dog_constants_are_canine_reference_values() {
        let dog = Species::Dog.defaults();
        assert_eq!(dog.cycle_length_days, 180);
        assert_eq!(dog.ovulation_offset_days, 12);
        assert_eq!(dog.gestation_days, 63);
    }
}
