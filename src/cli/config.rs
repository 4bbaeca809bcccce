//! TOML configuration file support.
//!
//! Settings that would otherwise need several flags can live in a file:
//!
//! ```toml
//! # extract.toml
//! [extraction]
//! event_cap = 50000
//! batch_size = 8192
//! byte_order = "little"
//!
//! [physics]
//! total_energy_in = 13600.0
//! ```
//!
//! Command-line flags take precedence over file values, which take precedence over
//! built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use collision_data::binary::Endianness;
use collision_data::collector::ExtractionConfig;
use collision_data::particles::ParticleCategory;

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Extraction settings.
    #[serde(default)]
    pub extraction: ExtractionSection,

    /// Physical constants.
    #[serde(default)]
    pub physics: PhysicsSection,
}

/// `[extraction]` table.
#[derive(Debug, Default, Deserialize)]
pub struct ExtractionSection {
    /// Global event cap.
    pub event_cap: Option<usize>,

    /// Events per record batch.
    pub batch_size: Option<usize>,

    /// Byte order of the numeric record fields.
    pub byte_order: Option<Endianness>,
}

/// `[physics]` table, all values in GeV.
///
/// `electron_mass`, `muon_mass` and `photon_mass` are shorthands for entries of
/// `[physics.rest_masses]`, which accepts any fixed-mass category by name.
#[derive(Debug, Default, Deserialize)]
pub struct PhysicsSection {
    pub total_energy_in: Option<f64>,
    pub electron_mass: Option<f64>,
    pub muon_mass: Option<f64>,
    pub photon_mass: Option<f64>,
    #[serde(default)]
    pub rest_masses: BTreeMap<ParticleCategory, f64>,
}

impl PhysicsSection {
    /// Every rest mass override, shorthands last
    fn overrides(&self) -> impl Iterator<Item = (ParticleCategory, f64)> + '_ {
        let shorthands = [
            (ParticleCategory::Electron, self.electron_mass),
            (ParticleCategory::Muon, self.muon_mass),
            (ParticleCategory::Photon, self.photon_mass),
        ];
        self.rest_masses
            .iter()
            .map(|(&category, &mass)| (category, mass))
            .chain(
                shorthands
                    .into_iter()
                    .filter_map(|(category, mass)| mass.map(|m| (category, m))),
            )
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Overlay the values present in this file onto `config`.
    pub fn apply(&self, mut config: ExtractionConfig) -> ExtractionConfig {
        let ext = &self.extraction;
        if let Some(cap) = ext.event_cap {
            config.event_cap = cap;
        }
        if let Some(batch_size) = ext.batch_size {
            config.reader.batch_size = batch_size;
        }
        if let Some(byte_order) = ext.byte_order {
            config.layout.byte_order = byte_order;
        }

        let phys = &self.physics;
        if let Some(v) = phys.total_energy_in {
            config.physics.total_energy_in_gev = v;
        }
        for (category, mass) in phys.overrides() {
            config.physics.set_rest_mass(category, mass);
        }
        config
    }
}
