//! Level layout helpers built on top of the sampler.
//!
//! [`TileOccupancy`] maps generated points onto the map's tiles, the way a level builder
//! places one object per tile, and prints the result as a `1`/`0` grid for debugging.
//! [`scatter_cluster`] grows a capped group of points around one anchor, e.g. a resource
//! field around a node, while keeping clear of other anchors.
use std::fmt;

use glam::IVec2;

use crate::error::Result;
use crate::geometry::MapDimensions;
use crate::random::RandomRange;
use crate::sampling::{CappedExpansion, PoissonDisc};

/// One flag per map tile, row-major from `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileOccupancy {
    map: MapDimensions,
    tiles: Vec<bool>,
}

impl TileOccupancy {
    /// Empty occupancy for `map`.
    pub fn new(map: MapDimensions) -> Self {
        Self {
            map,
            tiles: vec![false; map.area()],
        }
    }

    /// Marks the tile of every point. Points off the map are ignored.
    pub fn from_points(map: MapDimensions, points: &[IVec2]) -> Self {
        let mut occupancy = Self::new(map);
        for &p in points {
            occupancy.occupy(p);
        }
        occupancy
    }

    /// Marks the tile at `point`. Returns `false` when the point is off the map.
    pub fn occupy(&mut self, point: IVec2) -> bool {
        match self.index(point) {
            Some(idx) => {
                self.tiles[idx] = true;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, point: IVec2) -> bool {
        self.index(point).is_some_and(|idx| self.tiles[idx])
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t).count()
    }

    pub fn map(&self) -> MapDimensions {
        self.map
    }

    /// Occupied tiles in row-major order.
    pub fn occupied_tiles(&self) -> impl Iterator<Item = IVec2> + '_ {
        let width = self.map.width as usize;
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, &t)| t)
            .map(move |(i, _)| IVec2::new((i % width) as i32, (i / width) as i32))
    }

    /// Text rows, highest `y` first so the grid reads like the map seen from above.
    pub fn rows(&self) -> Vec<String> {
        let width = self.map.width as usize;
        if width == 0 {
            return Vec::new();
        }
        self.tiles
            .chunks(width)
            .rev()
            .map(|row| row.iter().map(|&t| if t { '1' } else { '0' }).collect())
            .collect()
    }

    #[inline]
    fn index(&self, point: IVec2) -> Option<usize> {
        self.map
            .contains(point)
            .then(|| point.y as usize * self.map.width as usize + point.x as usize)
    }
}

impl fmt::Display for TileOccupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Generates up to `count` points around `anchor`, at least `minimum_distance` from the
/// anchor, from every point in `others`, and from each other.
///
/// The anchor and `others` are not part of the result.
pub fn scatter_cluster<R>(
    anchor: IVec2,
    others: &[IVec2],
    minimum_distance: f32,
    map: impl Into<MapDimensions>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<IVec2>>
where
    R: RandomRange + ?Sized,
{
    PoissonDisc::new(minimum_distance, map)
        .with_existing_points(std::iter::once(anchor).chain(others.iter().copied()))
        .with_max_points(count)
        .with_capped_expansion(CappedExpansion::AnchorFirst)
        .generate(rng)
}
