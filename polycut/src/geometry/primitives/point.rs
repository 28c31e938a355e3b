use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    /// Point reflected through the origin: (x, y) -> (-x, -y)
    pub fn negated(&self) -> Point {
        Point(-self.0, -self.1)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point(self.0 + dx, self.1 + dy)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    /// Orders `points` lowest-leftmost: by y, then by x.
    ///
    /// Points whose y lies within `tolerance` of the lowest point of their row share that row and are
    /// ordered by x alone, so rounding noise never decides between two points at the same height.
    /// Points of a row closer than `tolerance` in x are considered duplicates, the first one is kept.
    pub fn sorted_lowest_leftmost(
        points: impl IntoIterator<Item = Point>,
        tolerance: f64,
    ) -> Vec<Point> {
        let mut points = points.into_iter().collect::<Vec<_>>();
        points.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut rows: Vec<Vec<Point>> = vec![];
        for p in points {
            match rows.last_mut() {
                Some(row) if p.1 - row[0].1 <= tolerance => row.push(p),
                _ => rows.push(vec![p]),
            }
        }

        rows.into_iter()
            .flat_map(|mut row| {
                row.sort_by(|a, b| a.0.total_cmp(&b.0));
                row.dedup_by(|next, kept| next.0 - kept.0 <= tolerance);
                row
            })
            .collect()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
        self.1.to_bits().hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl From<geo_types::Coord<f64>> for Point {
    fn from(c: geo_types::Coord<f64>) -> Self {
        Point(c.x, c.y)
    }
}

impl From<Point> for geo_types::Coord<f64> {
    fn from(p: Point) -> Self {
        geo_types::coord! { x: p.0, y: p.1 }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_in_y_does_not_decide_the_order() {
        let points = [
            Point(75.0, 8.660000009),
            Point(65.0, 8.660000027),
            Point(0.0, 8.66),
            Point(30.0, 0.0),
            Point(10.0, 1e-12),
        ];
        let sorted = Point::sorted_lowest_leftmost(points, 1e-6);
        let xs = sorted.iter().map(|p| p.0).collect::<Vec<_>>();
        assert_eq!(xs, vec![10.0, 30.0, 0.0, 65.0, 75.0]);
    }

    #[test]
    fn near_duplicates_are_removed() {
        let points = [
            Point(1.0, 1.0),
            Point(1.0 + 1e-9, 1.0 - 1e-9),
            Point(1.0, 1.0),
            Point(2.0, 1.0),
        ];
        let sorted = Point::sorted_lowest_leftmost(points, 1e-6);
        assert_eq!(sorted.len(), 2);
        assert!(sorted[0].distance(&Point(1.0, 1.0)) < 1e-6);
        assert_eq!(sorted[1], Point(2.0, 1.0));
    }

    #[test]
    fn rows_further_apart_than_the_tolerance_stay_separate() {
        let sorted = Point::sorted_lowest_leftmost([Point(5.0, 0.0), Point(0.0, 1e-3)], 1e-6);
        assert_eq!(sorted, vec![Point(5.0, 0.0), Point(0.0, 1e-3)]);
    }
}
