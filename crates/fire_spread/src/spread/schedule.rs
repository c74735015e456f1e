//! The immutable result of a spread scheduling run.
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::spread::SpreadStats;

/// Ignition time assigned to one entity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IgnitionRecord {
    /// Entity that ignites.
    pub entity: EntityId,
    /// Simulated time at which the entity starts burning.
    pub time: f32,
    /// Entity that ignited it; `None` for the seed.
    pub source: Option<EntityId>,
}

impl IgnitionRecord {
    pub fn new(entity: impl Into<EntityId>, time: f32, source: Option<EntityId>) -> Self {
        Self {
            entity: entity.into(),
            time,
            source,
        }
    }

    /// Whether this record belongs to the seed entity.
    pub fn is_seed(&self) -> bool {
        self.source.is_none()
    }
}

/// Mapping from entity id to [`IgnitionRecord`]. Entities that never ignite are absent.
///
/// Records are stored in ignition order: ascending time, ties in the order the
/// scheduler finalised them. The seed is always first.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    records: Vec<IgnitionRecord>,
    index: HashMap<EntityId, usize>,
    stats: SpreadStats,
}

impl Schedule {
    pub(crate) fn from_ordered(records: Vec<IgnitionRecord>, stats: SpreadStats) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.entity.clone(), i))
            .collect();
        Self {
            records,
            index,
            stats,
        }
    }

    /// Record for `id`, if it ignites.
    pub fn get(&self, id: &str) -> Option<&IgnitionRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Ignition time for `id`, if it ignites.
    pub fn time_of(&self, id: &str) -> Option<f32> {
        self.get(id).map(|r| r.time)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The seed record.
    pub fn seed(&self) -> Option<&IgnitionRecord> {
        self.records.first()
    }

    /// Records in ignition order.
    pub fn iter(&self) -> impl Iterator<Item = &IgnitionRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[IgnitionRecord] {
        &self.records
    }

    /// Records already burning at `time` (ignition time `<= time`).
    pub fn burning_at(&self, time: f32) -> &[IgnitionRecord] {
        let end = self.records.partition_point(|r| r.time <= time);
        &self.records[..end]
    }

    /// Chain of entity ids from the seed to `id`, following recorded sources.
    pub fn path_to(&self, id: &str) -> Option<Vec<EntityId>> {
        let mut path = Vec::new();
        let mut current = self.get(id)?;
        loop {
            path.push(current.entity.clone());
            match &current.source {
                Some(source) => current = self.get(source)?,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }

    /// Plain id to ignition time mapping, as handed to a scene.
    pub fn ignition_times(&self) -> HashMap<EntityId, f32> {
        self.records
            .iter()
            .map(|r| (r.entity.clone(), r.time))
            .collect()
    }

    /// Latest ignition time in the schedule.
    pub fn last_ignition_time(&self) -> Option<f32> {
        self.records.last().map(|r| r.time)
    }

    pub fn stats(&self) -> SpreadStats {
        self.stats
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a IgnitionRecord;
    type IntoIter = std::slice::Iter<'a, IgnitionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        Schedule::from_ordered(
            vec![
                IgnitionRecord::new("a", 1.0, None),
                IgnitionRecord::new("b", 6.0, Some("a".into())),
                IgnitionRecord::new("c", 6.0, Some("a".into())),
                IgnitionRecord::new("d", 9.5, Some("b".into())),
            ],
            SpreadStats::default(),
        )
    }

    #[test]
    fn lookups_by_id() {
        let schedule = sample();
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule.time_of("b"), Some(6.0));
        assert!(schedule.contains("d"));
        assert!(!schedule.contains("zzz"));
        assert_eq!(schedule.time_of("zzz"), None);
        assert!(schedule.seed().is_some_and(IgnitionRecord::is_seed));
    }

    #[test]
    fn burning_at_includes_boundary() {
        let schedule = sample();
        assert!(schedule.burning_at(0.5).is_empty());
        assert_eq!(schedule.burning_at(1.0).len(), 1);
        assert_eq!(schedule.burning_at(6.0).len(), 3);
        assert_eq!(schedule.burning_at(100.0).len(), 4);
    }

    #[test]
    fn path_follows_sources_back_to_seed() {
        let schedule = sample();
        assert_eq!(
            schedule.path_to("d"),
            Some(vec!["a".to_string(), "b".to_string(), "d".to_string()])
        );
        assert_eq!(schedule.path_to("a"), Some(vec!["a".to_string()]));
        assert_eq!(schedule.path_to("missing"), None);
    }

    #[test]
    fn ignition_times_map_matches_records() {
        let times = sample().ignition_times();
        assert_eq!(times.len(), 4);
        assert_eq!(times["c"], 6.0);
        assert_eq!(sample().last_ignition_time(), Some(9.5));
    }
}
