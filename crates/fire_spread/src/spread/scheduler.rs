//! Distance-weighted breadth-first spread scheduler.
//!
//! Entities are finalised in ascending ignition time. When an entity is
//! finalised it scans every entity that is not yet finalised; each one closer
//! than `radius` receives the candidate time `time + distance * speed` unless
//! that reaches `max_time` or it already holds an equal or earlier candidate.
//!
//! Each finalisation scans all entities, so a run is O(V²) in the entity count.
//! That is fine for a few thousand trees and needs no spatial index.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, info, warn};

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::events::{EventSink, SpreadEvent, SpreadEventKind};
use crate::spread::schedule::{IgnitionRecord, Schedule};
use crate::spread::{SpreadConfig, SpreadStats};

/// Computes schedules for a fixed, validated [`SpreadConfig`].
#[derive(Debug, Clone)]
pub struct SpreadScheduler {
    /// Configuration applied to every run.
    pub config: SpreadConfig,
}

impl SpreadScheduler {
    pub fn try_new(config: SpreadConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Schedules ignition times for `entities`, starting at `seed`.
    pub fn schedule(&self, entities: &[Entity], seed: &str) -> Result<Schedule> {
        schedule_spread(entities, seed, &self.config)
    }

    pub fn schedule_with_events(
        &self,
        entities: &[Entity],
        seed: &str,
        sink: &mut dyn EventSink,
    ) -> Result<Schedule> {
        schedule_spread_with_events(entities, seed, &self.config, sink)
    }
}

/// Schedules ignition times for `entities`, starting at `seed`.
///
/// Fails with [`Error::InvalidParameter`] for an invalid config or non-finite
/// position, [`Error::DuplicateEntity`] for repeated ids and
/// [`Error::InvalidSeed`] when `seed` is not among `entities`. Entities that
/// cannot be reached before `config.max_time` are simply absent.
pub fn schedule_spread(entities: &[Entity], seed: &str, config: &SpreadConfig) -> Result<Schedule> {
    schedule_spread_with_events(entities, seed, config, &mut ())
}

pub fn schedule_spread_with_events(
    entities: &[Entity],
    seed: &str,
    config: &SpreadConfig,
    sink: &mut dyn EventSink,
) -> Result<Schedule> {
    config.validate()?;
    let seed_index = validate_entities(entities, seed)?;

    info!(
        "Scheduling spread from '{}' over {} entities.",
        seed,
        entities.len()
    );
    if sink.wants(SpreadEventKind::ScheduleStarted) {
        sink.send(SpreadEvent::ScheduleStarted {
            config: *config,
            entity_count: entities.len(),
            seed: seed.to_owned(),
        });
    }

    if config.max_time <= config.start_time {
        warn!(
            "max_time {} <= start_time {}; only the seed '{}' ignites.",
            config.max_time, config.start_time, seed
        );
        if sink.wants(SpreadEventKind::Warning) {
            sink.send(SpreadEvent::Warning {
                context: format!("seed:{seed}"),
                message: "max_time does not exceed start_time; only the seed ignites".into(),
            });
        }
    }

    let n = entities.len();
    // Best candidate so far per entity: (time, index of source).
    let mut tentative: Vec<Option<(f32, Option<usize>)>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut pending = PendingQueue::default();
    let mut records: Vec<IgnitionRecord> = Vec::new();
    let mut rejected_by_horizon = 0usize;

    tentative[seed_index] = Some((config.start_time, None));
    pending.push(config.start_time, seed_index);

    while let Some((time, index)) = pending.pop() {
        if finalized[index] {
            continue;
        }
        finalized[index] = true;

        let current = &entities[index];
        let source = tentative[index].and_then(|(_, s)| s);
        let record = IgnitionRecord::new(
            current.id.clone(),
            time,
            source.map(|s| entities[s].id.clone()),
        );
        debug!("'{}' ignites at {:.3}.", record.entity, record.time);
        if sink.wants(SpreadEventKind::EntityIgnited) {
            sink.send(SpreadEvent::EntityIgnited {
                record: record.clone(),
            });
        }
        records.push(record);

        for (j, neighbor) in entities.iter().enumerate() {
            if finalized[j] {
                continue;
            }
            let distance = current.planar_distance(neighbor);
            if distance >= config.radius {
                continue;
            }

            let candidate = time + distance * config.speed;
            if candidate >= config.max_time {
                rejected_by_horizon += 1;
                if sink.wants(SpreadEventKind::CandidateBeyondHorizon) {
                    sink.send(SpreadEvent::CandidateBeyondHorizon {
                        entity: neighbor.id.clone(),
                        source: current.id.clone(),
                        time: candidate,
                    });
                }
                continue;
            }
            if tentative[j].is_some_and(|(best, _)| best <= candidate) {
                continue;
            }

            tentative[j] = Some((candidate, Some(index)));
            pending.push(candidate, j);
        }
    }

    let stats = SpreadStats {
        entities_considered: n,
        ignited: records.len(),
        unreached: n - records.len(),
        rejected_by_horizon,
    };
    info!(
        "Spread finished: {} ignited, {} unreached.",
        stats.ignited, stats.unreached
    );
    if sink.wants(SpreadEventKind::ScheduleFinished) {
        sink.send(SpreadEvent::ScheduleFinished { stats });
    }

    Ok(Schedule::from_ordered(records, stats))
}

/// Checks positions and id uniqueness, returning the index of the seed.
fn validate_entities(entities: &[Entity], seed: &str) -> Result<usize> {
    let mut ids: HashMap<&str, usize> = HashMap::with_capacity(entities.len());
    for (i, entity) in entities.iter().enumerate() {
        if !entity.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "entity '{}' has a non-finite position {}",
                entity.id, entity.position
            )));
        }
        if ids.insert(entity.id.as_str(), i).is_some() {
            return Err(Error::DuplicateEntity {
                id: entity.id.clone(),
            });
        }
    }

    ids.get(seed).copied().ok_or_else(|| Error::InvalidSeed {
        id: seed.to_owned(),
    })
}

/// Min-queue of `(time, entity index)`; equal times pop in insertion order.
#[derive(Default)]
struct PendingQueue {
    heap: BinaryHeap<Pending>,
    next_seq: u64,
}

impl PendingQueue {
    fn push(&mut self, time: f32, index: usize) {
        self.heap.push(Pending {
            time,
            seq: self.next_seq,
            index,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<(f32, usize)> {
        self.heap.pop().map(|p| (p.time, p.index))
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    time: f32,
    seq: u64,
    index: usize,
}

impl Ord for Pending {
    // Reversed so the max-heap yields the earliest time, then the lowest sequence.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}
