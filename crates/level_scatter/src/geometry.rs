//! Integer map geometry shared by the sampler, the exclusion sections and the layout helpers.
use glam::{IVec2, UVec2};
use mint::Vector2;

use crate::error::{Error, Result};

/// Size of the generation area in tiles. The area spans `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns an error unless both dimensions are non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid(format!(
                "map dimensions must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Whether `point` lies on the map.
    #[inline]
    pub fn contains(&self, point: IVec2) -> bool {
        inside_rectangle(point, IVec2::ZERO, self.as_uvec2())
    }

    #[inline]
    pub fn as_uvec2(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Number of tiles on the map.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl From<UVec2> for MapDimensions {
    fn from(value: UVec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<(u32, u32)> for MapDimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl From<Vector2<u32>> for MapDimensions {
    fn from(value: Vector2<u32>) -> Self {
        Self::new(value.x, value.y)
    }
}

/// Half-open containment: `offset.x <= x < offset.x + width`, same for y.
///
/// Computed in `i64` so sections hanging over the `i32` range cannot overflow.
#[inline]
pub fn inside_rectangle(point: IVec2, offset: IVec2, dimensions: UVec2) -> bool {
    let (px, py) = (point.x as i64, point.y as i64);
    let (ox, oy) = (offset.x as i64, offset.y as i64);
    px >= ox && px < ox + dimensions.x as i64 && py >= oy && py < oy + dimensions.y as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(MapDimensions::new(0, 10).validate().is_err());
        assert!(MapDimensions::new(10, 0).validate().is_err());
        assert!(MapDimensions::new(1, 1).validate().is_ok());
    }

    #[test]
    fn contains_uses_exclusive_upper_bound() {
        let map = MapDimensions::new(100, 50);
        assert!(map.contains(IVec2::new(0, 0)));
        assert!(map.contains(IVec2::new(99, 49)));
        assert!(!map.contains(IVec2::new(100, 10)));
        assert!(!map.contains(IVec2::new(10, 50)));
        assert!(!map.contains(IVec2::new(-1, 10)));
    }

    #[test]
    fn inside_rectangle_respects_offset() {
        let offset = IVec2::new(40, 40);
        let dims = UVec2::new(20, 20);
        assert!(inside_rectangle(IVec2::new(40, 40), offset, dims));
        assert!(inside_rectangle(IVec2::new(59, 59), offset, dims));
        assert!(!inside_rectangle(IVec2::new(60, 45), offset, dims));
        assert!(!inside_rectangle(IVec2::new(39, 45), offset, dims));
    }

    #[test]
    fn conversions_agree() {
        let a = MapDimensions::from(UVec2::new(3, 4));
        let b = MapDimensions::from((3, 4));
        let c = MapDimensions::from(Vector2 { x: 3u32, y: 4u32 });
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.area(), 12);
    }
}
