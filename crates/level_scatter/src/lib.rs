#![forbid(unsafe_code)]
//! level_scatter: Poisson-disc placement of level objects on a tile map.
//!
//! Modules:
//! - sampling: dart-throwing generator with an acceleration grid, seeds and point caps
//! - section: excluded map sections and the shape-test extension point
//! - events: observing a generation run
//! - layout: mapping generated points onto tiles, clustered scatters
//!
//! Points are integer map coordinates ([`glam::IVec2`]) inside `[0, width) x [0, height)`.
pub mod error;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod random;
pub mod sampling;
pub mod section;

/// Convenient re-exports for common types. Import with `use level_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, SamplingEvent, SamplingEventKind, VecSink};
    pub use crate::geometry::MapDimensions;
    pub use crate::layout::{scatter_cluster, TileOccupancy};
    pub use crate::random::RandomRange;
    pub use crate::sampling::{
        generate_points, CappedExpansion, PoissonDisc, DEFAULT_ATTEMPTS_PER_POINT,
    };
    pub use crate::section::{exclude_region, ExclusionRegion, MapSection, SectionShape};
}
