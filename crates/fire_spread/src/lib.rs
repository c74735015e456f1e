#![forbid(unsafe_code)]
//! fire_spread: distance-weighted fire spread scheduling between point entities.
//!
//! Modules:
//! - entity: point-like entities with planar (x, z) positions
//! - spread: configuration, scheduler and the resulting schedule
//! - keyframes: per-entity emitter on/off tracks baked from a schedule
//! - scene: the snapshot/apply boundary to a host scene
//! - events: observing scheduling runs
//! - fixtures: seeded random forests (feature `fixtures`)
//!
//! For examples, see the `fire_spread_examples` crate.
pub mod entity;
pub mod error;
pub mod events;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod keyframes;
pub mod scene;
pub mod spread;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

/// Convenient re-exports for common types. Import with `use fire_spread::prelude::*;`.
pub mod prelude {
    pub use crate::entity::{Entity, EntityId};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, MultiSink, SpreadEvent, SpreadEventKind, VecSink};
    pub use crate::keyframes::{bake_emitter_tracks, EmitterTrack, Keyframe, KeyframeConfig};
    pub use crate::scene::{run_on_scene, run_on_scene_with_events, InMemoryScene, Scene};
    pub use crate::spread::schedule::{IgnitionRecord, Schedule};
    pub use crate::spread::scheduler::{
        schedule_spread, schedule_spread_with_events, SpreadScheduler,
    };
    pub use crate::spread::{SpreadConfig, SpreadStats};
}
