use geo::{Area, BooleanOps};
use geo_types::{MultiPolygon, Polygon};
use itertools::Itertools;

use crate::geometry::AREA_TOLERANCE;
use crate::geometry::primitives::{Point, Rect};

/// A (possibly disconnected) planar region, the result of boolean operations between polygons.
///
/// Boolean operations in [`geo`] always yield a [`MultiPolygon`], which is normalised into
/// one of the three variants. Components without meaningful area are dropped.
#[derive(Clone, Debug, Default)]
pub enum Region {
    #[default]
    Empty,
    Single(Polygon<f64>),
    Multi(Vec<Polygon<f64>>),
}

impl Region {
    /// Union of all polygons produced by `polygons`
    pub fn union_all(polygons: impl IntoIterator<Item = Polygon<f64>>) -> Region {
        polygons
            .into_iter()
            .fold(Region::Empty, |acc, p| acc.union(&Region::Single(p)))
    }

    pub fn union(&self, other: &Region) -> Region {
        match (self, other) {
            (Region::Empty, r) | (r, Region::Empty) => r.clone(),
            _ => self.to_multi().union(&other.to_multi()).into(),
        }
    }

    pub fn intersection(&self, other: &Region) -> Region {
        match (self, other) {
            (Region::Empty, _) | (_, Region::Empty) => Region::Empty,
            _ => self.to_multi().intersection(&other.to_multi()).into(),
        }
    }

    pub fn difference(&self, other: &Region) -> Region {
        match (self, other) {
            (Region::Empty, _) => Region::Empty,
            (r, Region::Empty) => r.clone(),
            _ => self.to_multi().difference(&other.to_multi()).into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Region::Empty)
    }

    pub fn area(&self) -> f64 {
        self.polygons().map(|p| p.unsigned_area()).sum()
    }

    /// All constituent polygons, regardless of the variant
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon<f64>> {
        let slice: &[Polygon<f64>] = match self {
            Region::Empty => &[],
            Region::Single(p) => std::slice::from_ref(p),
            Region::Multi(ps) => ps.as_slice(),
        };
        slice.iter()
    }

    /// All vertices on the boundary of the region (outer rings and holes)
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.polygons().flat_map(|p| {
            std::iter::once(p.exterior())
                .chain(p.interiors())
                .flat_map(|ring| ring.coords().map(|c| Point::from(*c)))
        })
    }

    pub fn bbox(&self) -> Option<Rect> {
        Rect::bounding(self.vertices())
    }

    pub fn to_multi(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.polygons().cloned().collect())
    }
}

impl From<MultiPolygon<f64>> for Region {
    fn from(mp: MultiPolygon<f64>) -> Self {
        let total_area = mp.unsigned_area();
        let mut polygons = mp
            .into_iter()
            .filter(|p| p.unsigned_area() > AREA_TOLERANCE * total_area.max(1.0))
            .collect_vec();

        match polygons.len() {
            0 => Region::Empty,
            1 => Region::Single(polygons.remove(0)),
            _ => Region::Multi(polygons),
        }
    }
}

impl From<Polygon<f64>> for Region {
    fn from(p: Polygon<f64>) -> Self {
        Region::from(MultiPolygon::new(vec![p]))
    }
}

impl From<Rect> for Region {
    fn from(r: Rect) -> Self {
        match r.is_degenerate() {
            true => Region::Empty,
            false => Region::Single(r.to_polygon()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, side: f64) -> Region {
        Rect::try_new(x, y, x + side, y + side).unwrap().into()
    }

    #[test]
    fn disjoint_union_is_multi() {
        let region = square(0.0, 0.0, 1.0).union(&square(5.0, 5.0, 1.0));
        assert!(matches!(region, Region::Multi(ref ps) if ps.len() == 2));
        assert!((region.area() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn overlapping_union_is_single() {
        let region = square(0.0, 0.0, 2.0).union(&square(1.0, 1.0, 2.0));
        assert!(matches!(region, Region::Single(_)));
        assert!((region.area() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn touching_squares_have_empty_intersection() {
        let region = square(0.0, 0.0, 1.0).intersection(&square(1.0, 0.0, 1.0));
        assert!(region.is_empty());
    }

    #[test]
    fn difference_removes_area() {
        let frame: Region = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap().into();
        let free = frame.difference(&square(0.0, 0.0, 5.0));
        assert!((free.area() - 75.0).abs() < 1e-6);
        assert!(free.difference(&frame).is_empty());
    }

    #[test]
    fn vertices_cover_all_components() {
        let region = square(4.0, 1.0, 1.0).union(&square(2.0, 1.0, 1.0));
        let anchors = Point::sorted_lowest_leftmost(region.vertices(), 1e-9);
        assert_eq!(anchors.len(), 8);
        assert_eq!(anchors.first(), Some(&Point(2.0, 1.0)));
        assert_eq!(anchors.last(), Some(&Point(5.0, 2.0)));
    }

    #[test]
    fn empty_region_has_no_vertices() {
        assert_eq!(Region::Empty.vertices().count(), 0);
        assert!(Region::Empty.bbox().is_none());
    }
}
