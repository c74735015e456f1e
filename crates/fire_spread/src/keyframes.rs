//! Emitter rate keyframes baked from a [`Schedule`].
//!
//! Every entity owns one particle emitter. Emitters start switched off; an
//! ignited entity's emitter is keyed off one `lead` before its ignition time
//! and on at the ignition time, so a stepped animation curve flips exactly at
//! ignition.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};
use crate::error::{Error, Result};
use crate::spread::schedule::Schedule;

/// Rates and timing used when baking emitter tracks.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyframeConfig {
    /// Emission rate while not burning.
    pub off_rate: f32,
    /// Emission rate once burning.
    pub on_rate: f32,
    /// Offset before ignition at which the off key is placed.
    pub lead: f32,
}

impl Default for KeyframeConfig {
    fn default() -> Self {
        Self {
            off_rate: 0.0,
            on_rate: 150.0,
            lead: 1.0,
        }
    }
}

impl KeyframeConfig {
    pub fn new(on_rate: f32) -> Self {
        Self {
            on_rate,
            ..Default::default()
        }
    }

    pub fn with_off_rate(mut self, off_rate: f32) -> Self {
        self.off_rate = off_rate;
        self
    }

    pub fn with_lead(mut self, lead: f32) -> Self {
        self.lead = lead;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.lead.is_finite() || self.lead <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "lead must be finite and > 0, got {}",
                self.lead
            )));
        }
        if !self.on_rate.is_finite() || !self.off_rate.is_finite() {
            return Err(Error::InvalidParameter("rates must be finite".into()));
        }
        Ok(())
    }
}

/// A single rate key.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keyframe {
    pub time: f32,
    pub rate: f32,
}

/// Ordered rate keys for one entity's emitter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmitterTrack {
    pub entity: EntityId,
    pub keys: Vec<Keyframe>,
    /// Rate before the first key.
    pub initial_rate: f32,
    /// Scheduled ignition time, `None` if the entity is never reached.
    pub ignition_time: Option<f32>,
}

impl EmitterTrack {
    /// Whether the entity ignites, independent of the configured rates.
    pub fn ignites(&self) -> bool {
        self.ignition_time.is_some()
    }

    /// Stepped evaluation: the rate of the last key at or before `time`.
    pub fn rate_at(&self, time: f32) -> f32 {
        let end = self.keys.partition_point(|k| k.time <= time);
        match end {
            0 => self.initial_rate,
            n => self.keys[n - 1].rate,
        }
    }
}

/// Bakes one track per entity, in `entities` order.
///
/// Entities absent from `schedule` get a single off key at the seed's off time,
/// which keeps them dark for the whole animation.
pub fn bake_emitter_tracks(
    entities: &[Entity],
    schedule: &Schedule,
    config: &KeyframeConfig,
) -> Result<Vec<EmitterTrack>> {
    config.validate()?;
    let start = schedule.seed().map_or(0.0, |s| s.time);

    let tracks = entities
        .iter()
        .map(|entity| {
            let ignition_time = schedule.time_of(&entity.id);
            let keys = match ignition_time {
                Some(t) => vec![
                    Keyframe {
                        time: t - config.lead,
                        rate: config.off_rate,
                    },
                    Keyframe {
                        time: t,
                        rate: config.on_rate,
                    },
                ],
                None => vec![Keyframe {
                    time: start - config.lead,
                    rate: config.off_rate,
                }],
            };
            EmitterTrack {
                entity: entity.id.clone(),
                keys,
                initial_rate: config.off_rate,
                ignition_time,
            }
        })
        .collect();

    Ok(tracks)
}
