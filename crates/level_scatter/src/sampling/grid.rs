//! Acceleration grid for neighborhood queries.
//!
//! Cells are `minimum_distance / sqrt(2)` wide, so a cell's diagonal equals the minimum
//! distance and two accepted points can never share a cell. Any point closer than the
//! minimum distance to a candidate then sits in the 5x5 block of cells around the
//! candidate's cell. The four corner cells of that block are skipped: a point there is at
//! least one full cell away on both axes, i.e. at least `minimum_distance` away.
use glam::IVec2;

use crate::geometry::MapDimensions;

/// Offsets of the 5x5 neighborhood without its corners, row by row.
const NEIGHBORHOOD: [(i32, i32); 21] = {
    let mut out = [(0, 0); 21];
    let mut n = 0;
    let mut dy: i32 = -2;
    while dy <= 2 {
        let mut dx: i32 = -2;
        while dx <= 2 {
            if !(dx.abs() == 2 && dy.abs() == 2) {
                out[n] = (dx, dy);
                n += 1;
            }
            dx += 1;
        }
        dy += 1;
    }
    out
};

/// Sparse point occupancy over the map, one optional point per cell.
///
/// Seeds closer than a cell diagonal can land in the same cell. The earlier one moves to
/// `displaced`, which every neighborhood query scans as well.
#[derive(Debug, Clone)]
pub(crate) struct AccelerationGrid {
    cell_size: f32,
    width: usize,
    height: usize,
    cells: Vec<Option<IVec2>>,
    displaced: Vec<IVec2>,
}

impl AccelerationGrid {
    pub(crate) fn new(minimum_distance: f32, map: MapDimensions) -> Self {
        let cell_size = minimum_distance / std::f32::consts::SQRT_2;
        let (width, height) = Self::dimensions_for(minimum_distance, map);

        Self {
            cell_size,
            width,
            height,
            cells: vec![None; width * height],
            displaced: Vec::new(),
        }
    }

    /// Grid size in cells: `ceil(map / cell_size)` per axis, at least one cell.
    pub(crate) fn dimensions_for(minimum_distance: f32, map: MapDimensions) -> (usize, usize) {
        let cell_size = minimum_distance / std::f32::consts::SQRT_2;
        let width = ((map.width as f32 / cell_size).ceil() as usize).max(1);
        let height = ((map.height as f32 / cell_size).ceil() as usize).max(1);
        (width, height)
    }

    #[inline]
    pub(crate) fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell containing `point`. Coordinates are truncated toward zero and clamped into the grid.
    #[inline]
    pub(crate) fn cell_of(&self, point: IVec2) -> (usize, usize) {
        let x = ((point.x.max(0) as f32 / self.cell_size) as usize).min(self.width - 1);
        let y = ((point.y.max(0) as f32 / self.cell_size) as usize).min(self.height - 1);
        (x, y)
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> Option<IVec2> {
        self.cells[self.index(x, y)]
    }

    /// Stores `point` in its cell and returns the point it displaced, if any.
    ///
    /// A displaced point keeps repelling candidates.
    pub(crate) fn insert(&mut self, point: IVec2) -> Option<IVec2> {
        let (x, y) = self.cell_of(point);
        let idx = self.index(x, y);
        let displaced = self.cells[idx].replace(point);
        if let Some(old) = displaced {
            self.displaced.push(old);
        }
        displaced
    }

    /// Whether a stored point lies closer than `minimum_distance` to `point`.
    pub(crate) fn in_neighborhood(&self, point: IVec2, minimum_distance: f32) -> bool {
        let (cx, cy) = self.cell_of(point);
        let p = point.as_vec2();

        for &(dx, dy) in NEIGHBORHOOD.iter() {
            let x = cx as isize + dx as isize;
            let y = cy as isize + dy as isize;
            if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
                continue;
            }
            if let Some(other) = self.get(x as usize, y as usize) {
                if other.as_vec2().distance(p) < minimum_distance {
                    return true;
                }
            }
        }

        self.displaced
            .iter()
            .any(|other| other.as_vec2().distance(p) < minimum_distance)
    }
}
