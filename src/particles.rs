//! # Particle Categories
//!
//! The five outgoing-particle collections tracked per event and the constants used
//! to turn them into a rest-energy estimate.
//!
//! | Category | Kind | Energy contribution | Source column |
//! |----------|------|---------------------|---------------|
//! | electron | fixed | count x 0.000511 GeV | `AnalysisElectronsAuxDyn.pt` |
//! | muon | fixed | count x 0.10566 GeV | `AnalysisMuonsAuxDyn.pt` |
//! | photon | fixed | count x 0.0 GeV | `AnalysisPhotonsAuxDyn.pt` |
//! | jet | variable | sum(m) / 1000 | `AnalysisJetsAuxDyn.m` |
//! | tau | variable | sum(m) / 1000 | `AnalysisTauJetsAuxDyn.m` |
//!
//! Adding a category is a single entry in [`CATEGORY_TABLE`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::columns;

/// Electron rest mass in GeV
pub const ELECTRON_MASS_GEV: f64 = 0.000511;

/// Muon rest mass in GeV
pub const MUON_MASS_GEV: f64 = 0.10566;

/// Photon rest mass in GeV
pub const PHOTON_MASS_GEV: f64 = 0.0;

/// LHC Run 2 center-of-mass energy in GeV
pub const TOTAL_ENERGY_IN_GEV: f64 = 13_000.0;

/// Divisor converting MeV (detector units) to GeV
pub const MEV_PER_GEV: f64 = 1000.0;

/// Number of rows in [`CATEGORY_TABLE`]
pub const CATEGORY_COUNT: usize = 5;

/// Outgoing-particle category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleCategory {
    /// Electron (fixed mass)
    Electron,
    /// Muon (fixed mass)
    Muon,
    /// Photon (fixed mass)
    Photon,
    /// Hadronic jet (per-particle invariant mass)
    Jet,
    /// Tau jet (per-particle invariant mass)
    Tau,
}

impl ParticleCategory {
    /// All categories in output order
    pub const ALL: [ParticleCategory; CATEGORY_COUNT] = [
        ParticleCategory::Electron,
        ParticleCategory::Muon,
        ParticleCategory::Photon,
        ParticleCategory::Jet,
        ParticleCategory::Tau,
    ];

    /// Name written into the outgoing-particle string
    pub fn name(self) -> &'static str {
        match self {
            ParticleCategory::Electron => "electron",
            ParticleCategory::Muon => "muon",
            ParticleCategory::Photon => "photon",
            ParticleCategory::Jet => "jet",
            ParticleCategory::Tau => "tau",
        }
    }

    /// Position of this category in [`ParticleCategory::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Table entry describing this category
    pub fn spec(self) -> &'static CategorySpec {
        &CATEGORY_TABLE[self.index()]
    }
}

impl fmt::Display for ParticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParticleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParticleCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown particle category: {s}"))
    }
}

/// How a category contributes to the rest-energy sum
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MassKind {
    /// Known rest mass; only the particle count matters
    Fixed {
        /// Default rest mass in GeV
        rest_mass_gev: f64,
    },
    /// Each particle carries its own invariant mass in MeV
    Variable,
}

/// One row of the category table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySpec {
    /// The category this row describes
    pub category: ParticleCategory,
    /// Mass treatment
    pub kind: MassKind,
    /// Input column holding the per-particle values
    pub column: &'static str,
}

/// Closed category table, iterated in output order.
pub const CATEGORY_TABLE: [CategorySpec; CATEGORY_COUNT] = [
    CategorySpec {
        category: ParticleCategory::Electron,
        kind: MassKind::Fixed { rest_mass_gev: ELECTRON_MASS_GEV },
        column: columns::ELECTRON_PT,
    },
    CategorySpec {
        category: ParticleCategory::Muon,
        kind: MassKind::Fixed { rest_mass_gev: MUON_MASS_GEV },
        column: columns::MUON_PT,
    },
    CategorySpec {
        category: ParticleCategory::Photon,
        kind: MassKind::Fixed { rest_mass_gev: PHOTON_MASS_GEV },
        column: columns::PHOTON_PT,
    },
    CategorySpec {
        category: ParticleCategory::Jet,
        kind: MassKind::Variable,
        column: columns::JET_M,
    },
    CategorySpec {
        category: ParticleCategory::Tau,
        kind: MassKind::Variable,
        column: columns::TAU_M,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_category_order() {
        for (i, category) in ParticleCategory::ALL.into_iter().enumerate() {
            assert_eq!(CATEGORY_TABLE[i].category, category);
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_fixed_and_variable_split() {
        let fixed: Vec<_> = CATEGORY_TABLE
            .iter()
            .filter(|s| matches!(s.kind, MassKind::Fixed { .. }))
            .map(|s| s.category)
            .collect();
        assert_eq!(
            fixed,
            vec![ParticleCategory::Electron, ParticleCategory::Muon, ParticleCategory::Photon]
        );
        assert_eq!(ParticleCategory::Jet.spec().kind, MassKind::Variable);
        assert_eq!(ParticleCategory::Tau.spec().kind, MassKind::Variable);
    }

    #[test]
    fn test_name_roundtrip() {
        for category in ParticleCategory::ALL {
            assert_eq!(category.name().parse::<ParticleCategory>().unwrap(), category);
        }
        assert!("proton".parse::<ParticleCategory>().is_err());
    }
}
