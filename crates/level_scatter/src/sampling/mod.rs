//! Poisson-disc point generation.
//!
//! [`PoissonDisc`] throws darts around active points: every active point gets a fixed
//! number of candidates in the annulus `[d, 2d)` around it, and a candidate is kept when it
//! lies on the map and no kept point (or seed) is closer than `d`. An acceleration grid
//! limits the spacing check to a small neighborhood. Excluded sections are carved out of
//! the result afterwards.
use std::collections::VecDeque;
use std::f32::consts::PI;

use glam::IVec2;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::events::{EventSink, SamplingEvent, SamplingEventKind};
use crate::geometry::MapDimensions;
use crate::random::RandomRange;
use crate::section::{exclude_region, MapSection};

mod grid;

use grid::AccelerationGrid;

/// Candidates thrown around each active point before it is retired.
pub const DEFAULT_ATTEMPTS_PER_POINT: usize = 30;

/// How a capped run walks the active points.
///
/// Only consulted when [`PoissonDisc::max_points`] is set; uncapped runs are always
/// breadth-first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CappedExpansion {
    /// Retire the front point after its attempts, like an uncapped run.
    #[default]
    BreadthFirst,
    /// Keep throwing around the front point, one accepted point per round, until a whole
    /// round fails. With seeds this grows the cap around the first seed.
    AnchorFirst,
}

/// Poisson-disc sampling parameters.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoissonDisc {
    /// Minimum distance between points in tiles.
    pub minimum_distance: f32,
    /// Generation bounds.
    pub map: MapDimensions,
    /// Sections whose points are removed after generation, applied in order.
    pub excluded_sections: Vec<MapSection>,
    /// Repulsion anchors. They seed the search but are never returned.
    pub existing_points: Vec<IVec2>,
    /// Stop once this many points were accepted. `None` runs until the queue drains.
    /// A synthesized first point counts, seeds do not.
    pub max_points: Option<usize>,
    /// Candidates per active point.
    pub attempts_per_point: usize,
    /// Queue policy for capped runs.
    pub capped_expansion: CappedExpansion,
}

impl PoissonDisc {
    /// Creates an uncapped sampler without seeds or exclusions.
    pub fn new(minimum_distance: f32, map: impl Into<MapDimensions>) -> Self {
        Self {
            minimum_distance,
            map: map.into(),
            excluded_sections: Vec::new(),
            existing_points: Vec::new(),
            max_points: None,
            attempts_per_point: DEFAULT_ATTEMPTS_PER_POINT,
            capped_expansion: CappedExpansion::default(),
        }
    }

    /// Replaces the excluded sections.
    pub fn with_excluded_sections(mut self, sections: impl IntoIterator<Item = MapSection>) -> Self {
        self.excluded_sections = sections.into_iter().collect();
        self
    }

    /// Appends one excluded section.
    pub fn with_excluded_section(mut self, section: MapSection) -> Self {
        self.excluded_sections.push(section);
        self
    }

    /// Replaces the seed points.
    pub fn with_existing_points(mut self, points: impl IntoIterator<Item = IVec2>) -> Self {
        self.existing_points = points.into_iter().collect();
        self
    }

    /// Caps the number of accepted points.
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = Some(max_points);
        self
    }

    /// Sets the number of candidates per active point.
    pub fn with_attempts_per_point(mut self, attempts: usize) -> Self {
        self.attempts_per_point = attempts;
        self
    }

    /// Sets the queue policy used when a cap is set.
    pub fn with_capped_expansion(mut self, policy: CappedExpansion) -> Self {
        self.capped_expansion = policy;
        self
    }

    /// Validates the parameters, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.minimum_distance.is_finite() || self.minimum_distance <= 0.0 {
            return Err(Error::invalid(format!(
                "minimum_distance must be finite and > 0, got {}",
                self.minimum_distance
            )));
        }
        self.map.validate()?;
        if self.max_points == Some(0) {
            return Err(Error::invalid("max_points must be > 0"));
        }
        if self.attempts_per_point == 0 {
            return Err(Error::invalid("attempts_per_point must be > 0"));
        }
        if let Some(p) = self.existing_points.iter().find(|p| !self.map.contains(**p)) {
            return Err(Error::invalid(format!(
                "existing point ({}, {}) lies outside the {}x{} map",
                p.x, p.y, self.map.width, self.map.height
            )));
        }
        Ok(())
    }

    /// Generates points with the given random source.
    pub fn generate<R>(&self, rng: &mut R) -> Result<Vec<IVec2>>
    where
        R: RandomRange + ?Sized,
    {
        self.generate_with_events(rng, &mut ())
    }

    /// Generates points, reporting progress to `sink`.
    pub fn generate_with_events<R>(&self, rng: &mut R, sink: &mut dyn EventSink) -> Result<Vec<IVec2>>
    where
        R: RandomRange + ?Sized,
    {
        self.validate()?;

        let d = self.minimum_distance;
        let cap = self.max_points.unwrap_or(usize::MAX);
        let anchor_first =
            self.max_points.is_some() && self.capped_expansion == CappedExpansion::AnchorFirst;

        let mut grid = AccelerationGrid::new(d, self.map);
        let mut queue: VecDeque<IVec2> = VecDeque::new();
        let mut output: Vec<IVec2> = Vec::new();

        if sink.wants(SamplingEventKind::Started) {
            sink.send(SamplingEvent::Started {
                map: self.map,
                minimum_distance: d,
                grid_size: grid.size(),
                max_points: self.max_points,
            });
        }

        if self.existing_points.is_empty() {
            let first = self.first_point(rng);
            queue.push_back(first);
            output.push(first);
            grid.insert(first);
            if sink.wants(SamplingEventKind::Seeded) {
                sink.send(SamplingEvent::Seeded {
                    point: first,
                    synthesized: true,
                });
            }
        } else {
            for &seed in &self.existing_points {
                queue.push_back(seed);
                if let Some(displaced) = grid.insert(seed) {
                    debug!(
                        "Seed ({}, {}) shares a grid cell with ({}, {}); keeping both as anchors.",
                        seed.x, seed.y, displaced.x, displaced.y
                    );
                }
                if sink.wants(SamplingEventKind::Seeded) {
                    sink.send(SamplingEvent::Seeded {
                        point: seed,
                        synthesized: false,
                    });
                }
            }
        }

        // The synthesized first point is returned, so it counts toward the cap.
        let mut accepted = output.len();
        let mut tried = 0usize;

        while let Some(&active) = queue.front() {
            if accepted >= cap {
                break;
            }

            let mut spawned = false;
            for _ in 0..self.attempts_per_point {
                if accepted >= cap {
                    break;
                }

                let candidate = random_point_around(rng, active, d);
                tried += 1;

                if self.map.contains(candidate) && !grid.in_neighborhood(candidate, d) {
                    queue.push_back(candidate);
                    output.push(candidate);
                    grid.insert(candidate);
                    accepted += 1;
                    spawned = true;

                    if sink.wants(SamplingEventKind::PointAccepted) {
                        sink.send(SamplingEvent::PointAccepted {
                            point: candidate,
                            around: active,
                        });
                    }

                    if anchor_first {
                        break;
                    }
                }
            }

            if !(anchor_first && spawned) {
                queue.pop_front();
            }
        }

        if let Some(max_points) = self.max_points {
            if accepted >= max_points && sink.wants(SamplingEventKind::CapReached) {
                sink.send(SamplingEvent::CapReached { max_points });
            }
        }

        let before_exclusion = output.len();
        for (index, section) in self.excluded_sections.iter().enumerate() {
            match exclude_region(&mut output, section) {
                Ok(removed) => {
                    if sink.wants(SamplingEventKind::SectionApplied) {
                        sink.send(SamplingEvent::SectionApplied {
                            index,
                            section: *section,
                            removed,
                        });
                    }
                }
                Err(err) => {
                    warn!("Excluded section {} skipped: {}.", index, err);
                    if sink.wants(SamplingEventKind::Warning) {
                        sink.send(SamplingEvent::Warning {
                            context: format!("excluded_sections[{index}]"),
                            message: err.to_string(),
                        });
                    }
                }
            }
        }

        info!(
            "Poisson disc: {} accepted, {} returned, {} removed by exclusions, {} candidates.",
            accepted,
            output.len(),
            before_exclusion - output.len(),
            tried,
        );

        if sink.wants(SamplingEventKind::Finished) {
            sink.send(SamplingEvent::Finished {
                accepted,
                returned: output.len(),
                candidates_tried: tried,
            });
        }

        Ok(output)
    }

    /// Random first point in the central 20% x 20% of the map.
    fn first_point<R: RandomRange + ?Sized>(&self, rng: &mut R) -> IVec2 {
        let (w, h) = (self.map.width as f32, self.map.height as f32);
        IVec2::new(
            rng.range_i32((w * 0.4) as i32, (w * 0.6) as i32),
            rng.range_i32((h * 0.4) as i32, (h * 0.6) as i32),
        )
    }
}

/// Random point at a distance in `[d, 2d)` from `center`, truncated toward zero.
fn random_point_around<R: RandomRange + ?Sized>(rng: &mut R, center: IVec2, d: f32) -> IVec2 {
    let distance = d * (1.0 + rng.range_f32(0.0, 1.0));
    let angle = 2.0 * PI * rng.range_f32(0.0, 1.0);

    IVec2::new(
        (center.x as f32 + distance * angle.cos()) as i32,
        (center.y as f32 + distance * angle.sin()) as i32,
    )
}

/// One-call form: generate points with optional exclusions, seeds and cap.
pub fn generate_points<R>(
    minimum_distance: f32,
    map: impl Into<MapDimensions>,
    excluded_sections: &[MapSection],
    existing_points: &[IVec2],
    max_points: Option<usize>,
    rng: &mut R,
) -> Result<Vec<IVec2>>
where
    R: RandomRange + ?Sized,
{
    let mut sampler = PoissonDisc::new(minimum_distance, map)
        .with_excluded_sections(excluded_sections.iter().copied())
        .with_existing_points(existing_points.iter().copied());
    sampler.max_points = max_points;
    sampler.generate(rng)
}
