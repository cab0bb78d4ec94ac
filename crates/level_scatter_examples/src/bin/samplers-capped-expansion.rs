//! Compares the two capped expansion policies on the same seeds and writes one PNG each.
use glam::IVec2;
use level_scatter::prelude::*;
use level_scatter_examples::{init_tracing, render_points_to_png, PointStyle, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let map = MapDimensions::new(100, 100);
    let seeds = [IVec2::new(25, 25), IVec2::new(75, 75)];
    let config = RenderConfig::new((600, 600), map);

    for (policy, out) in [
        (CappedExpansion::BreadthFirst, "samplers-capped-breadth-first.png"),
        (CappedExpansion::AnchorFirst, "samplers-capped-anchor-first.png"),
    ] {
        let mut rng = StdRng::seed_from_u64(7);
        let points = PoissonDisc::new(4.0, map)
            .with_existing_points(seeds)
            .with_max_points(40)
            .with_capped_expansion(policy)
            .generate(&mut rng)?;

        println!("{policy:?}: {} points", points.len());
        render_points_to_png(
            &[
                (seeds.as_slice(), PointStyle::new([200, 40, 40], 6)),
                (points.as_slice(), PointStyle::new([30, 30, 30], 3)),
            ],
            &config,
            out,
        )?;
    }

    Ok(())
}
