//! Renders an uncapped Poisson-disc run with an excluded section, plus the same run's
//! event statistics, to `samplers-poisson-disc.png`.
use glam::{IVec2, UVec2};
use level_scatter::prelude::*;
use level_scatter_examples::{init_tracing, render_points_to_png, PointStyle, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let map = MapDimensions::new(200, 200);
    let lake = MapSection::rectangle(IVec2::new(120, 80), UVec2::new(50, 30));
    let mut rng = StdRng::seed_from_u64(42);

    let mut sink = VecSink::only(&[SamplingEventKind::Finished, SamplingEventKind::Warning]);
    let points = PoissonDisc::new(6.0, map)
        .with_excluded_section(lake)
        .generate_with_events(&mut rng, &mut sink)?;

    for event in sink.as_slice() {
        println!("{event:?}");
    }

    let config = RenderConfig::new((800, 800), map).with_section(lake, [40, 90, 200]);
    render_points_to_png(
        &[(points.as_slice(), PointStyle::new([34, 110, 34], 4))],
        &config,
        "samplers-poisson-disc.png",
    )
}
