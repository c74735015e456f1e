//! Fire spread scheduling: configuration, the scheduler and its result.
//!
//! Fire starts at a seed entity and jumps to every entity within `radius`,
//! arriving `distance * speed` time units later. The scheduler expands
//! reachable entities in ascending ignition time until nothing new can be
//! ignited before `max_time`.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod schedule;
pub mod scheduler;

/// Configuration for computing a spread schedule.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpreadConfig {
    /// Ignition time of the seed entity.
    pub start_time: f32,
    /// Time units per distance unit.
    pub speed: f32,
    /// Maximum planar distance over which one entity ignites another directly.
    pub radius: f32,
    /// Exclusive horizon; nothing ignites at or after this time.
    pub max_time: f32,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self {
            start_time: 1.0,
            speed: 1.9,
            radius: 15.0,
            max_time: 300.0,
        }
    }
}

impl SpreadConfig {
    /// Creates a new [`SpreadConfig`] with the given speed and radius.
    pub fn new(speed: f32, radius: f32) -> Self {
        Self {
            speed,
            radius,
            ..Default::default()
        }
    }

    /// Sets the seed ignition time.
    pub fn with_start_time(mut self, start_time: f32) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the propagation speed.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the direct propagation radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the time horizon. Use `f32::INFINITY` for no horizon.
    pub fn with_max_time(mut self, max_time: f32) -> Self {
        self.max_time = max_time;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "speed must be finite and > 0, got {}",
                self.speed
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if !self.start_time.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "start_time must be finite, got {}",
                self.start_time
            )));
        }
        if self.max_time.is_nan() {
            return Err(Error::InvalidParameter("max_time must not be NaN".into()));
        }

        Ok(())
    }
}

/// Counters describing a finished schedule.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpreadStats {
    /// Entities in the input snapshot.
    pub entities_considered: usize,
    /// Entities that received an ignition time, seed included.
    pub ignited: usize,
    /// Entities absent from the schedule.
    pub unreached: usize,
    /// Within-radius candidates dropped because they reached the horizon.
    pub rejected_by_horizon: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_baked_scene_settings() {
        let config = SpreadConfig::default();
        assert_eq!(config.start_time, 1.0);
        assert_eq!(config.speed, 1.9);
        assert_eq!(config.radius, 15.0);
        assert_eq!(config.max_time, 300.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let config = SpreadConfig::new(2.0, 10.0)
            .with_start_time(5.0)
            .with_max_time(50.0);
        assert_eq!(config.speed, 2.0);
        assert_eq!(config.radius, 10.0);
        assert_eq!(config.start_time, 5.0);
        assert_eq!(config.max_time, 50.0);
    }

    #[test]
    fn rejects_non_positive_speed_and_radius() {
        for config in [
            SpreadConfig::new(0.0, 10.0),
            SpreadConfig::new(-1.0, 10.0),
            SpreadConfig::new(1.0, 0.0),
            SpreadConfig::new(1.0, -3.0),
            SpreadConfig::new(f32::NAN, 10.0),
            SpreadConfig::new(1.0, f32::INFINITY),
        ] {
            assert!(
                matches!(config.validate(), Err(Error::InvalidParameter(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_nan_times_but_allows_unbounded_horizon() {
        let nan_start = SpreadConfig::default().with_start_time(f32::NAN);
        assert!(matches!(
            nan_start.validate(),
            Err(Error::InvalidParameter(_))
        ));

        let nan_horizon = SpreadConfig::default().with_max_time(f32::NAN);
        assert!(matches!(
            nan_horizon.validate(),
            Err(Error::InvalidParameter(_))
        ));

        let unbounded = SpreadConfig::default().with_max_time(f32::INFINITY);
        assert!(unbounded.validate().is_ok());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<SpreadConfig>();
        assert_send_sync::<SpreadStats>();
        assert_send_sync::<schedule::Schedule>();
        assert_send_sync::<schedule::IgnitionRecord>();
        assert_send_sync::<scheduler::SpreadScheduler>();
        assert_send_sync::<crate::entity::Entity>();
        assert_send_sync::<crate::keyframes::EmitterTrack>();
        assert_send_sync::<crate::keyframes::KeyframeConfig>();
    }
}
