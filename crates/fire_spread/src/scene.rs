//! Boundary between the scheduler and whatever hosts the trees.
//!
//! A [`Scene`] hands out a snapshot of entity positions and receives the
//! resulting ignition times. How the host animates them is its own business.
use std::collections::HashMap;

use glam::Vec3;

use crate::entity::{Entity, EntityId};
use crate::error::Result;
use crate::events::EventSink;
use crate::spread::schedule::Schedule;
use crate::spread::scheduler::schedule_spread_with_events;
use crate::spread::SpreadConfig;

/// Source of entity positions and consumer of ignition times.
pub trait Scene {
    /// Current entity positions. Called once per scheduling run.
    fn snapshot(&self) -> Vec<Entity>;

    /// Receives `id -> ignition time` for every entity that ignites.
    fn apply_ignition_times(&mut self, times: &HashMap<EntityId, f32>);
}

/// Snapshot `scene`, schedule the spread from `seed` and hand the times back.
pub fn run_on_scene<S: Scene + ?Sized>(
    scene: &mut S,
    seed: &str,
    config: &SpreadConfig,
) -> Result<Schedule> {
    run_on_scene_with_events(scene, seed, config, &mut ())
}

pub fn run_on_scene_with_events<S: Scene + ?Sized>(
    scene: &mut S,
    seed: &str,
    config: &SpreadConfig,
    sink: &mut dyn EventSink,
) -> Result<Schedule> {
    let entities = scene.snapshot();
    let schedule = schedule_spread_with_events(&entities, seed, config, sink)?;
    scene.apply_ignition_times(&schedule.ignition_times());
    Ok(schedule)
}

/// Simple in-memory [`Scene`] holding world positions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScene {
    objects: Vec<(EntityId, Vec3)>,
    ignition_times: HashMap<EntityId, f32>,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object at a world position.
    pub fn insert(&mut self, id: impl Into<EntityId>, position: impl Into<Vec3>) {
        self.objects.push((id.into(), position.into()));
    }

    pub fn with_object(mut self, id: impl Into<EntityId>, position: impl Into<Vec3>) -> Self {
        self.insert(id, position);
        self
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Ignition time last applied to `id`.
    pub fn ignition_time(&self, id: &str) -> Option<f32> {
        self.ignition_times.get(id).copied()
    }
}

impl Scene for InMemoryScene {
    fn snapshot(&self) -> Vec<Entity> {
        self.objects
            .iter()
            .map(|(id, p)| Entity::from_world(id.clone(), *p))
            .collect()
    }

    fn apply_ignition_times(&mut self, times: &HashMap<EntityId, f32>) {
        self.ignition_times = times.clone();
    }
}
