//! # Event Aggregation
//!
//! Turns one event's raw per-particle arrays into an [`EventRecord`].
//!
//! - Fixed-mass categories contribute `count x rest mass`.
//! - Variable-mass categories contribute `sum(m) / 1000` (MeV to GeV).
//! - `efficiency = rest_energy_out / total_energy_in`, never clamped.
//!
//! Arithmetic is done in f64 GeV and cast to f32 only when the record is built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::particles::{
    MassKind, ParticleCategory, CATEGORY_COUNT, CATEGORY_TABLE, MEV_PER_GEV, TOTAL_ENERGY_IN_GEV,
};
use crate::record::EventRecord;
use crate::schema::{OUTGOING_WIDTH, PARTICLE_SEPARATOR};

/// Physical constants used by the aggregator.
///
/// Rest masses come from [`CATEGORY_TABLE`] unless overridden here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Total incoming energy per event in GeV
    pub total_energy_in_gev: f64,
    /// Rest mass overrides in GeV, fixed-mass categories only
    #[serde(default)]
    pub rest_mass_overrides: BTreeMap<ParticleCategory, f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            total_energy_in_gev: TOTAL_ENERGY_IN_GEV,
            rest_mass_overrides: BTreeMap::new(),
        }
    }
}

impl PhysicsConfig {
    /// Builder-style rest mass override
    pub fn with_rest_mass(mut self, category: ParticleCategory, rest_mass_gev: f64) -> Self {
        self.set_rest_mass(category, rest_mass_gev);
        self
    }

    /// Override the rest mass of `category`
    pub fn set_rest_mass(&mut self, category: ParticleCategory, rest_mass_gev: f64) {
        self.rest_mass_overrides.insert(category, rest_mass_gev);
    }

    /// Rest mass of a fixed-mass category, `None` for variable-mass ones
    pub fn rest_mass_gev(&self, category: ParticleCategory) -> Option<f64> {
        match category.spec().kind {
            MassKind::Variable => None,
            MassKind::Fixed { rest_mass_gev } => Some(
                self.rest_mass_overrides
                    .get(&category)
                    .copied()
                    .unwrap_or(rest_mass_gev),
            ),
        }
    }

    /// Check the constants are usable
    pub fn validate(&self) -> Result<(), String> {
        if !(self.total_energy_in_gev.is_finite() && self.total_energy_in_gev > 0.0) {
            return Err(format!(
                "total_energy_in_gev must be finite and positive, got {}",
                self.total_energy_in_gev
            ));
        }
        for (&category, &mass) in &self.rest_mass_overrides {
            if category.spec().kind == MassKind::Variable {
                return Err(format!(
                    "{category} has a per-particle mass and takes no rest mass override"
                ));
            }
            if !(mass.is_finite() && mass >= 0.0) {
                return Err(format!("{category} rest mass must be finite and >= 0, got {mass}"));
            }
        }
        Ok(())
    }
}

/// One event's raw per-particle values, indexed by category.
///
/// Fixed-mass categories hold transverse momenta (only the count is used);
/// variable-mass categories hold invariant masses in MeV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEvent {
    /// Source event number
    pub event_id: i32,
    collections: [Vec<f64>; CATEGORY_COUNT],
}

impl RawEvent {
    /// Create an event with every collection empty
    pub fn new(event_id: i32) -> Self {
        Self {
            event_id,
            collections: Default::default(),
        }
    }

    /// Builder-style setter for one collection
    pub fn with_collection(mut self, category: ParticleCategory, values: Vec<f64>) -> Self {
        self.collections[category.index()] = values;
        self
    }

    /// Values of one collection
    pub fn collection(&self, category: ParticleCategory) -> &[f64] {
        &self.collections[category.index()]
    }

    /// Mutable buffer of one collection, for reuse across events
    pub fn collection_mut(&mut self, category: ParticleCategory) -> &mut Vec<f64> {
        &mut self.collections[category.index()]
    }

    /// Reset for reuse without releasing buffers
    pub fn clear(&mut self, event_id: i32) {
        self.event_id = event_id;
        for values in &mut self.collections {
            values.clear();
        }
    }

    /// Total number of outgoing particles
    pub fn particle_count(&self) -> usize {
        self.collections.iter().map(Vec::len).sum()
    }
}

/// Aggregation result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedEvent {
    /// The finished record
    pub record: EventRecord,
    /// Efficiency (computed in f64) is above 1.0
    pub exceeds_unity: bool,
}

/// Computes outgoing composition and rest energy per event
#[derive(Debug, Clone, Default)]
pub struct EventAggregator {
    config: PhysicsConfig,
}

impl EventAggregator {
    /// Create an aggregator with the given constants
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }

    /// Constants in use
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Aggregate one event into a record
    pub fn aggregate(&self, event: &RawEvent) -> AggregatedEvent {
        let mut rest_energy_out = 0.0_f64;
        let mut outgoing = String::with_capacity(OUTGOING_WIDTH + 16);

        for spec in &CATEGORY_TABLE {
            let values = event.collection(spec.category);
            rest_energy_out += match self.config.rest_mass_gev(spec.category) {
                Some(rest_mass) => values.len() as f64 * rest_mass,
                None => values.iter().sum::<f64>() / MEV_PER_GEV,
            };

            for _ in 0..values.len() {
                // Bytes past the field width are dropped at encoding anyway.
                if outgoing.len() > OUTGOING_WIDTH {
                    break;
                }
                if !outgoing.is_empty() {
                    outgoing.push(PARTICLE_SEPARATOR);
                }
                outgoing.push_str(spec.category.name());
            }
        }

        let total_energy_in = self.config.total_energy_in_gev;
        let efficiency = rest_energy_out / total_energy_in;

        AggregatedEvent {
            record: EventRecord::new(
                event.event_id,
                &outgoing,
                total_energy_in as f32,
                rest_energy_out as f32,
                efficiency as f32,
            ),
            exceeds_unity: efficiency > 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn aggregate(event: &RawEvent) -> AggregatedEvent {
        EventAggregator::default().aggregate(event)
    }

    #[test]
    fn test_two_electrons() {
        let event = RawEvent::new(1)
            .with_collection(ParticleCategory::Electron, vec![25_000.0, 40_000.0]);
        let result = aggregate(&event);

        assert_eq!(result.record.rest_energy_out, (2.0 * 0.000511) as f32);
        assert_eq!(result.record.efficiency, (0.001022 / 13000.0) as f32);
        assert_eq!(result.record.kinetic_energy_in, 13000.0);
        assert_eq!(result.record.outgoing_particles.trimmed(), "electron,electron");
        assert!(!result.exceeds_unity);
    }

    #[test]
    fn test_jet_mass_converted_from_mev() {
        let event = RawEvent::new(2).with_collection(ParticleCategory::Jet, vec![50_000.0]);
        let result = aggregate(&event);
        assert_eq!(result.record.rest_energy_out, 50.0);
        assert_eq!(result.record.outgoing_particles.trimmed(), "jet");
    }

    #[test]
    fn test_mixed_event_order_and_sum() {
        let event = RawEvent::new(3)
            .with_collection(ParticleCategory::Tau, vec![1_777.0])
            .with_collection(ParticleCategory::Muon, vec![10_000.0])
            .with_collection(ParticleCategory::Photon, vec![5_000.0, 6_000.0])
            .with_collection(ParticleCategory::Jet, vec![20_000.0, 30_000.0]);
        let result = aggregate(&event);

        let expected = 0.10566 + 0.0 + 50.0 + 1.777;
        assert_eq!(result.record.rest_energy_out, expected as f32);
        assert_eq!(
            result.record.outgoing_particles.trimmed(),
            "muon,photon,photon,jet,jet,tau"
        );
    }

    #[test]
    fn test_empty_event() {
        let result = aggregate(&RawEvent::new(4));
        assert_eq!(result.record.rest_energy_out, 0.0);
        assert_eq!(result.record.efficiency, 0.0);
        assert_eq!(result.record.outgoing_particles.trimmed(), "");
    }

    #[test]
    fn test_efficiency_above_one_is_flagged_not_clamped() {
        let event = RawEvent::new(5).with_collection(ParticleCategory::Jet, vec![14_000_000.0]);
        let result = aggregate(&event);
        assert!(result.exceeds_unity);
        assert_eq!(result.record.rest_energy_out, 14_000.0);
        assert_eq!(result.record.efficiency, (14_000.0_f64 / 13_000.0) as f32);
        assert!(result.record.efficiency > 1.0);
    }

    #[test]
    fn test_long_particle_list_truncated() {
        let event = RawEvent::new(6).with_collection(ParticleCategory::Photon, vec![1.0; 100]);
        let result = aggregate(&event);
        let expected = vec!["photon"; 100].join(",");
        assert_eq!(
            &result.record.outgoing_particles.as_bytes()[..],
            &expected.as_bytes()[..256]
        );
    }

    #[test]
    fn test_overridden_constants() {
        let config = PhysicsConfig {
            total_energy_in_gev: 100.0,
            ..Default::default()
        }
        .with_rest_mass(ParticleCategory::Muon, 1.0);
        let event = RawEvent::new(7).with_collection(ParticleCategory::Muon, vec![0.0; 3]);
        let result = EventAggregator::new(config).aggregate(&event);
        assert_eq!(result.record.rest_energy_out, 3.0);
        assert_eq!(result.record.kinetic_energy_in, 100.0);
        assert_eq!(result.record.efficiency, 0.03_f64 as f32);
    }

    #[test]
    fn test_config_validation() {
        assert!(PhysicsConfig::default().validate().is_ok());
        let bad = PhysicsConfig {
            total_energy_in_gev: 0.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad_mass = PhysicsConfig::default().with_rest_mass(ParticleCategory::Electron, -1.0);
        assert!(bad_mass.validate().is_err());
        let variable = PhysicsConfig::default().with_rest_mass(ParticleCategory::Jet, 5.0);
        assert!(variable.validate().is_err());
    }

    #[test]
    fn test_table_mass_used_without_override() {
        let config = PhysicsConfig::default();
        for spec in &CATEGORY_TABLE {
            let expected = match spec.kind {
                MassKind::Fixed { rest_mass_gev } => Some(rest_mass_gev),
                MassKind::Variable => None,
            };
            assert_eq!(config.rest_mass_gev(spec.category), expected);
        }

        let overridden = config.with_rest_mass(ParticleCategory::Electron, 7.0);
        assert_eq!(overridden.rest_mass_gev(ParticleCategory::Electron), Some(7.0));
        assert_eq!(
            overridden.rest_mass_gev(ParticleCategory::Muon),
            Some(crate::particles::MUON_MASS_GEV)
        );
    }

    #[test]
    fn test_overrides_deserialize_by_category_name() {
        let config: PhysicsConfig = serde_json::from_str(
            r#"{"total_energy_in_gev": 13000.0, "rest_mass_overrides": {"photon": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(config.rest_mass_gev(ParticleCategory::Photon), Some(0.5));
        assert_eq!(config.rest_mass_gev(ParticleCategory::Tau), None);
    }

    #[test]
    fn test_raw_event_reuse() {
        let mut event = RawEvent::new(1).with_collection(ParticleCategory::Jet, vec![1.0, 2.0]);
        assert_eq!(event.particle_count(), 2);
        event.clear(9);
        assert_eq!(event.event_id, 9);
        assert_eq!(event.particle_count(), 0);
        event.collection_mut(ParticleCategory::Tau).push(3.0);
        assert_eq!(event.collection(ParticleCategory::Tau), &[3.0]);
    }

    proptest! {
        #[test]
        fn prop_efficiency_is_ratio(
            electrons in 0usize..8,
            jets in proptest::collection::vec(0.0f64..200_000.0, 0..12),
        ) {
            let event = RawEvent::new(0)
                .with_collection(ParticleCategory::Electron, vec![1.0; electrons])
                .with_collection(ParticleCategory::Jet, jets.clone());
            let record = aggregate(&event).record;

            prop_assert_eq!(record.kinetic_energy_in, 13000.0);
            let ratio = record.rest_energy_out / record.kinetic_energy_in;
            prop_assert!((record.efficiency - ratio).abs() <= 4.0 * f32::EPSILON * ratio.max(1e-12));
            prop_assert_eq!(record.outgoing_names().count(), electrons + jets.len());
        }
    }
}
