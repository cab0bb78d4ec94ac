use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Full-map runs at small distances take tens of milliseconds; keep the sample count low.
pub const FULL_MAP_SAMPLES: usize = 10;
pub const CAPPED_SAMPLES: usize = 50;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const FULL_MAP_MEASUREMENT: Duration = Duration::from_secs(4);
pub const CAPPED_MEASUREMENT: Duration = Duration::from_secs(2);

pub fn full_map_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(FULL_MAP_SAMPLES)
        .warm_up_time(WARM_UP)
        .measurement_time(FULL_MAP_MEASUREMENT)
}

pub fn capped_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(CAPPED_SAMPLES)
        .warm_up_time(WARM_UP)
        .measurement_time(CAPPED_MEASUREMENT)
}

/// Accepted points per iteration, never zero so criterion can report a rate.
pub fn points_throughput(points: usize) -> Throughput {
    Throughput::Elements(points.max(1) as u64)
}

/// Deterministic RNG for one benchmark case.
pub fn bench_rng(group_tag: u64, case: u64) -> StdRng {
    StdRng::seed_from_u64(group_tag.rotate_left(17) ^ case)
}
