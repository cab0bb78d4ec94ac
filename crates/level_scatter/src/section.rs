//! Excluded map sections.
//!
//! A [`MapSection`] removes generated points after sampling. Only rectangles have a
//! containment test today; ellipses are carried in the data model and report
//! [`Error::UnsupportedShape`]. Other shapes plug in through [`ExclusionRegion`].
use glam::{IVec2, UVec2};

use crate::error::{Error, Result};
use crate::geometry::inside_rectangle;

/// Shape tag of a [`MapSection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionShape {
    Rectangle,
    Ellipse,
}

/// A sub-region of the map, described by a shape, a center tile and its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSection {
    pub shape: SectionShape,
    pub center: IVec2,
    pub dimensions: UVec2,
}

impl MapSection {
    pub fn new(shape: SectionShape, center: IVec2, dimensions: UVec2) -> Self {
        Self {
            shape,
            center,
            dimensions,
        }
    }

    pub fn rectangle(center: IVec2, dimensions: UVec2) -> Self {
        Self::new(SectionShape::Rectangle, center, dimensions)
    }

    pub fn ellipse(center: IVec2, dimensions: UVec2) -> Self {
        Self::new(SectionShape::Ellipse, center, dimensions)
    }

    /// Lower-left corner: `center - dimensions / 2`, halves rounded down.
    pub fn offset(&self) -> IVec2 {
        let half = self.dimensions / 2;
        IVec2::new(
            (self.center.x as i64 - half.x as i64) as i32,
            (self.center.y as i64 - half.y as i64) as i32,
        )
    }
}

/// Shape test used when carving points out of the generated set.
pub trait ExclusionRegion {
    /// Whether `point` lies inside the region. Errors when the region cannot be tested.
    fn contains(&self, point: IVec2) -> Result<bool>;
}

impl ExclusionRegion for MapSection {
    fn contains(&self, point: IVec2) -> Result<bool> {
        match self.shape {
            SectionShape::Rectangle => Ok(inside_rectangle(point, self.offset(), self.dimensions)),
            SectionShape::Ellipse => Err(Error::UnsupportedShape { shape: self.shape }),
        }
    }
}

impl<F> ExclusionRegion for F
where
    F: Fn(IVec2) -> bool,
{
    fn contains(&self, point: IVec2) -> Result<bool> {
        Ok(self(point))
    }
}

/// Removes every point inside `region`, keeping the order of the rest.
///
/// Returns how many points were removed. On error `points` is left untouched.
pub fn exclude_region<R>(points: &mut Vec<IVec2>, region: &R) -> Result<usize>
where
    R: ExclusionRegion + ?Sized,
{
    let inside = points
        .iter()
        .map(|&p| region.contains(p))
        .collect::<Result<Vec<bool>>>()?;

    let before = points.len();
    *points = points
        .iter()
        .zip(&inside)
        .filter(|(_, &inside)| !inside)
        .map(|(&p, _)| p)
        .collect();
    Ok(before - points.len())
}
