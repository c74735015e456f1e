//! Event types and sinks for observing spread scheduling runs.
//!
//! This module defines [`SpreadEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while computing a schedule via
//! [`crate::spread::scheduler::SpreadScheduler`] or
//! [`crate::spread::scheduler::schedule_spread_with_events`].
use crate::entity::EntityId;
use crate::spread::schedule::IgnitionRecord;
use crate::spread::{SpreadConfig, SpreadStats};

/// Describes events emitted while scheduling.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SpreadEvent {
    /// Emitted once parameters are validated and scheduling begins.
    ScheduleStarted {
        /// The configuration used.
        config: SpreadConfig,
        /// Number of entities in the snapshot.
        entity_count: usize,
        /// Id of the seed entity.
        seed: EntityId,
    },

    /// Emitted when an entity is finalised with its ignition time.
    EntityIgnited {
        /// The finalised record.
        record: IgnitionRecord,
    },

    /// Emitted when a within-radius candidate reaches or passes the time horizon.
    CandidateBeyondHorizon {
        /// Entity that would have been ignited.
        entity: EntityId,
        /// Entity it would have been ignited from.
        source: EntityId,
        /// Candidate ignition time that was rejected.
        time: f32,
    },

    /// Emitted when scheduling completes.
    ScheduleFinished {
        /// Aggregated counters for the run.
        stats: SpreadStats,
    },

    /// Non-fatal warning generated during scheduling.
    Warning {
        /// Context string (e.g. entity id).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl SpreadEvent {
    /// Returns the discriminant of this event.
    pub fn kind(&self) -> SpreadEventKind {
        match self {
            SpreadEvent::ScheduleStarted { .. } => SpreadEventKind::ScheduleStarted,
            SpreadEvent::EntityIgnited { .. } => SpreadEventKind::EntityIgnited,
            SpreadEvent::CandidateBeyondHorizon { .. } => SpreadEventKind::CandidateBeyondHorizon,
            SpreadEvent::ScheduleFinished { .. } => SpreadEventKind::ScheduleFinished,
            SpreadEvent::Warning { .. } => SpreadEventKind::Warning,
        }
    }
}

/// Payload-free discriminant of [`SpreadEvent`], used for sink filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpreadEventKind {
    ScheduleStarted,
    EntityIgnited,
    CandidateBeyondHorizon,
    ScheduleFinished,
    Warning,
}

/// A generic event sink that accepts [`SpreadEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SpreadEvent);

    /// Whether the sink is interested in events of `kind`. Emitters skip building
    /// events a sink does not want.
    #[inline]
    fn wants(&self, _kind: SpreadEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SpreadEvent) {}

    #[inline]
    fn wants(&self, _kind: SpreadEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SpreadEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SpreadEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SpreadEvent),
{
    #[inline]
    fn send(&mut self, event: SpreadEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SpreadEvent>,
    only: Option<Vec<SpreadEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Collect only events whose kind is in `kinds`.
    pub fn only(kinds: impl IntoIterator<Item = SpreadEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<SpreadEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SpreadEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SpreadEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    #[inline]
    fn wants(&self, kind: SpreadEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SpreadEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: SpreadEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(context: &str) -> SpreadEvent {
        SpreadEvent::Warning {
            context: context.into(),
            message: "m".into(),
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::with_capacity(2);
        assert!(sink.is_empty());
        sink.send(warning("a"));
        sink.send(warning("b"));
        assert_eq!(sink.len(), 2);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn filtered_vec_sink_drops_unwanted_kinds() {
        let mut sink = VecSink::only([SpreadEventKind::ScheduleFinished]);
        assert!(!sink.wants(SpreadEventKind::Warning));
        assert!(sink.wants(SpreadEventKind::ScheduleFinished));
        sink.send(warning("ignored"));
        sink.send(SpreadEvent::ScheduleFinished {
            stats: SpreadStats::default(),
        });
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.as_slice()[0].kind(), SpreadEventKind::ScheduleFinished);
    }

    #[test]
    fn unit_sink_wants_nothing() {
        assert!(!().wants(SpreadEventKind::EntityIgnited));
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(warning("ctx"));
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.sinks[0].len(), 1);
        assert_eq!(multi.sinks[1].len(), 1);
        assert!(matches!(
            multi.sinks[0].as_slice()[0],
            SpreadEvent::Warning { .. }
        ));
    }

    #[test]
    fn multi_sink_respects_member_filters() {
        let mut multi = MultiSink::new();
        multi.push(VecSink::only([SpreadEventKind::EntityIgnited]));
        multi.push(VecSink::new());
        multi.send(warning("ctx"));
        assert_eq!(multi.sinks[0].len(), 0);
        assert_eq!(multi.sinks[1].len(), 1);
        assert!(multi.wants(SpreadEventKind::Warning));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(warning("ctx"));
        assert_eq!(count, 1);
    }
}
