//! Event types and sinks for observing a generation run.
//!
//! [`crate::sampling::PoissonDisc::generate_with_events`] reports its progress as
//! [`SamplingEvent`]s. Sinks decide which kinds they want through [`EventSink::wants`], so
//! per-point events cost nothing when nobody listens.
use glam::IVec2;

use crate::geometry::MapDimensions;
use crate::section::MapSection;

/// Describes events emitted while generating points.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingEvent {
    /// Emitted after validation, before the first point is placed.
    Started {
        map: MapDimensions,
        minimum_distance: f32,
        /// Grid size in cells (width, height).
        grid_size: (usize, usize),
        max_points: Option<usize>,
    },

    /// Emitted for the synthesized first point or each caller-supplied seed.
    Seeded {
        point: IVec2,
        /// `true` for the random first point, which is also part of the output.
        synthesized: bool,
    },

    /// Emitted when a candidate passes the bounds and spacing checks.
    PointAccepted {
        point: IVec2,
        /// The active point the candidate was thrown around.
        around: IVec2,
    },

    /// Emitted once when the point cap stops generation.
    CapReached { max_points: usize },

    /// Emitted after an excluded section was applied to the output.
    SectionApplied {
        index: usize,
        section: MapSection,
        removed: usize,
    },

    /// Non-fatal warning, e.g. a section that could not be applied.
    Warning { context: String, message: String },

    /// Emitted when the run completes.
    Finished {
        accepted: usize,
        returned: usize,
        candidates_tried: usize,
    },
}

/// Discriminant of [`SamplingEvent`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingEventKind {
    Started,
    Seeded,
    PointAccepted,
    CapReached,
    SectionApplied,
    Warning,
    Finished,
}

impl SamplingEvent {
    pub fn kind(&self) -> SamplingEventKind {
        match self {
            SamplingEvent::Started { .. } => SamplingEventKind::Started,
            SamplingEvent::Seeded { .. } => SamplingEventKind::Seeded,
            SamplingEvent::PointAccepted { .. } => SamplingEventKind::PointAccepted,
            SamplingEvent::CapReached { .. } => SamplingEventKind::CapReached,
            SamplingEvent::SectionApplied { .. } => SamplingEventKind::SectionApplied,
            SamplingEvent::Warning { .. } => SamplingEventKind::Warning,
            SamplingEvent::Finished { .. } => SamplingEventKind::Finished,
        }
    }
}

/// A generic event sink that accepts [`SamplingEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SamplingEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&mut self, _kind: SamplingEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SamplingEvent) {}

    #[inline]
    fn wants(&mut self, _kind: SamplingEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    #[inline]
    fn send(&mut self, event: SamplingEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally only some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SamplingEvent>,
    only: Option<Vec<SamplingEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects only the listed kinds.
    pub fn only(kinds: &[SamplingEventKind]) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.to_vec()),
        }
    }

    pub fn into_inner(self) -> Vec<SamplingEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SamplingEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of collected events of `kind`.
    pub fn count(&self, kind: SamplingEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SamplingEvent) {
        self.events.push(event);
    }

    fn wants(&mut self, kind: SamplingEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}
