//! # Record Queries
//!
//! Lookups over decoded records, ordered by rest energy.
//!
//! ```rust
//! use collision_data::query::EventIndex;
//! use collision_data::record::EventRecord;
//!
//! let index = EventIndex::new(vec![
//!     EventRecord::new(1, "jet", 13000.0, 120.0, 120.0 / 13000.0),
//!     EventRecord::new(2, "muon", 13000.0, 0.10566, 0.10566 / 13000.0),
//! ]);
//! assert_eq!(index.range(100.0, 200.0).len(), 1);
//! assert_eq!(index.max_efficiency().map(|r| r.event_id), Some(1));
//! ```

use std::collections::BTreeMap;

use crate::particles::ParticleCategory;
use crate::record::EventRecord;

/// Records sorted by ascending `rest_energy_out`
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    records: Vec<EventRecord>,
}

impl EventIndex {
    /// Build an index; equal energies keep their input order
    pub fn new(mut records: Vec<EventRecord>) -> Self {
        records.sort_by(|a, b| a.rest_energy_out.total_cmp(&b.rest_energy_out));
        Self { records }
    }

    /// Number of indexed records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in energy order
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Records with `min <= rest_energy_out <= max`, in energy order
    pub fn range(&self, min: f32, max: f32) -> &[EventRecord] {
        if min > max || min.is_nan() || max.is_nan() {
            return &[];
        }
        let start = self.records.partition_point(|r| r.rest_energy_out < min);
        let end = self.records.partition_point(|r| r.rest_energy_out <= max);
        &self.records[start..end.max(start)]
    }

    /// Record with the highest efficiency; the first one wins ties
    pub fn max_efficiency(&self) -> Option<&EventRecord> {
        self.records.iter().reduce(|best, r| {
            if r.efficiency.total_cmp(&best.efficiency).is_gt() {
                r
            } else {
                best
            }
        })
    }

    /// Record with the highest rest energy
    pub fn max_rest_energy(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    /// Per-category particle counts of one record; unknown names are ignored
    pub fn particle_counts(record: &EventRecord) -> BTreeMap<ParticleCategory, usize> {
        let mut counts = BTreeMap::new();
        for name in record.outgoing_names() {
            if let Ok(category) = name.parse::<ParticleCategory>() {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Particle counts summed over every indexed record
    pub fn total_particle_counts(&self) -> BTreeMap<ParticleCategory, usize> {
        let mut totals = BTreeMap::new();
        for record in &self.records {
            for (category, count) in Self::particle_counts(record) {
                *totals.entry(category).or_insert(0) += count;
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, outgoing: &str, rest: f32, eff: f32) -> EventRecord {
        EventRecord::new(id, outgoing, 13000.0, rest, eff)
    }

    fn index() -> EventIndex {
        EventIndex::new(vec![
            record(1, "jet", 120.0, 0.009),
            record(2, "muon", 0.10566, 0.000008),
            record(3, "jet,jet", 300.0, 0.023),
            record(4, "tau", 120.0, 0.03),
            record(5, "", 0.0, 0.0),
        ])
    }

    #[test]
    fn test_sorted_by_rest_energy() {
        let ids: Vec<_> = index().records().iter().map(|r| r.event_id).collect();
        assert_eq!(ids, vec![5, 2, 1, 4, 3]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let idx = index();
        let ids: Vec<_> = idx.range(120.0, 300.0).iter().map(|r| r.event_id).collect();
        assert_eq!(ids, vec![1, 4, 3]);
        assert_eq!(idx.range(0.0, 0.0).len(), 1);
        assert!(idx.range(500.0, 600.0).is_empty());
        assert!(idx.range(300.0, 100.0).is_empty());
    }

    #[test]
    fn test_max_efficiency() {
        assert_eq!(index().max_efficiency().map(|r| r.event_id), Some(4));
        assert!(EventIndex::default().max_efficiency().is_none());
        assert_eq!(index().max_rest_energy().map(|r| r.event_id), Some(3));
    }

    #[test]
    fn test_particle_counts() {
        let r = record(9, "electron,jet,jet,graviton,tau", 1.0, 0.0);
        let counts = EventIndex::particle_counts(&r);
        assert_eq!(counts.get(&ParticleCategory::Jet), Some(&2));
        assert_eq!(counts.get(&ParticleCategory::Electron), Some(&1));
        assert_eq!(counts.get(&ParticleCategory::Muon), None);
        assert_eq!(counts.values().sum::<usize>(), 4);

        let totals = index().total_particle_counts();
        assert_eq!(totals.get(&ParticleCategory::Jet), Some(&3));
        assert_eq!(totals.get(&ParticleCategory::Tau), Some(&1));
    }
}
