//! Builds a small level (a forest around a cleared base, gold clusters around two nodes)
//! and prints the tile occupancy to the console.
use glam::{IVec2, UVec2};
use level_scatter::prelude::*;
use level_scatter_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let map = MapDimensions::new(60, 30);
    let base = MapSection::rectangle(IVec2::new(30, 15), UVec2::new(14, 10));
    let mut rng = StdRng::seed_from_u64(2018);

    let gold_nodes = [IVec2::new(8, 6), IVec2::new(52, 24)];
    let mut gold = Vec::new();
    for (i, &node) in gold_nodes.iter().enumerate() {
        let others: Vec<IVec2> = gold_nodes
            .iter()
            .copied()
            .filter(|&n| n != node)
            .chain(gold.iter().copied())
            .collect();
        let cluster = scatter_cluster(node, &others, 2.0, map, 5, &mut rng)?;
        tracing::info!("Gold node {} at ({}, {}): {} deposits.", i, node.x, node.y, cluster.len());
        gold.push(node);
        gold.extend(cluster);
    }

    let trees = PoissonDisc::new(3.0, map)
        .with_excluded_section(base)
        .with_existing_points(gold.iter().copied())
        .generate(&mut rng)?;

    let mut occupancy = TileOccupancy::from_points(map, &trees);
    for &g in &gold {
        occupancy.occupy(g);
    }

    println!(
        "{} trees, {} gold tiles, {} occupied of {}:",
        trees.len(),
        gold.len(),
        occupancy.occupied_count(),
        map.area()
    );
    print!("{occupancy}");
    Ok(())
}
