use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use geo::{Area, BooleanOps};
use geo_types::{LineString, Polygon};
use itertools::Itertools;

use crate::NestError;
use crate::geometry::AREA_TOLERANCE;
use crate::geometry::primitives::{Point, Rect};
use crate::util::FPA;

/// A named simple polygon to be nested.
///
/// Pieces are values: every transformation returns a new [`Piece`], placed geometry is never mutated.
/// The polygon is assumed to be simple (non self-intersecting), this is not validated.
#[derive(Clone, Debug)]
pub struct Piece {
    name: String,
    /// Ring of vertices, without a closing duplicate
    vertices: Vec<Point>,
    polygon: Polygon<f64>,
    /// Unsigned area
    area: f64,
    bbox: Rect,
}

impl Piece {
    /// Creates a new piece from a ring of vertices.
    /// A trailing vertex equal to the first one is treated as an explicit closing of the ring and dropped.
    pub fn new(name: impl Into<String>, mut vertices: Vec<Point>) -> Result<Self> {
        let name = name.into();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        ensure!(
            vertices.iter().all(|p| p.0.is_finite() && p.1.is_finite()),
            NestError::InvalidGeometry(format!("piece {name} has non-finite vertices"))
        );
        let n_distinct = vertices.iter().unique().count();
        ensure!(
            n_distinct >= 3,
            NestError::InvalidGeometry(format!(
                "piece {name} needs at least 3 distinct vertices, got {n_distinct}"
            ))
        );

        let bbox = Rect::bounding(vertices.iter().copied())
            .expect("ring has at least 3 vertices");
        ensure!(
            !FPA(bbox.width()).is_zero() && !FPA(bbox.height()).is_zero(),
            NestError::InvalidGeometry(format!(
                "piece {name} is degenerate, bounding box: {} x {}",
                bbox.width(),
                bbox.height()
            ))
        );

        let area = Piece::calculate_area(&vertices).abs();
        ensure!(
            !FPA(area).is_zero(),
            NestError::InvalidGeometry(format!("piece {name} has no area"))
        );

        Ok(Piece::from_ring(name, vertices, area))
    }

    /// Builds a piece from a ring already known to be valid
    fn from_ring(name: String, vertices: Vec<Point>, area: f64) -> Self {
        let bbox = Rect::bounding(vertices.iter().copied()).expect("ring should not be empty");
        let polygon = Polygon::new(
            LineString::from(vertices.iter().map(|p| (p.0, p.1)).collect_vec()),
            vec![],
        );
        Piece {
            name,
            vertices,
            polygon,
            area,
            bbox,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Returns a copy with every vertex shifted by (`dx`, `dy`).
    pub fn translate(&self, dx: f64, dy: f64) -> Piece {
        let vertices = self.vertices.iter().map(|p| p.translated(dx, dy)).collect();
        Piece::from_ring(self.name.clone(), vertices, self.area)
    }

    /// Returns a copy with every vertex reflected through the origin: (x, y) -> (-x, -y).
    pub fn reflect(&self) -> Piece {
        let vertices = self.vertices.iter().map(Point::negated).collect();
        Piece::from_ring(self.name.clone(), vertices, self.area)
    }

    /// Returns a copy scaled so that the largest side of its bounding box becomes 1,
    /// with the bounding box minimum moved to the origin.
    pub fn scale_to_unit(&self) -> Piece {
        let factor = 1.0 / self.bbox.width().max(self.bbox.height());
        self.scale_from_bbox_min(factor)
    }

    /// Returns a copy fitted inside a `target_width` x `target_height` box, anchored at the origin.
    ///
    /// A single uniform factor `min(target_width / width, target_height / height)` is applied to both axes:
    /// the aspect ratio is preserved and the result touches the requested size on (at least) one axis only.
    pub fn scale_to_size(&self, target_width: f64, target_height: f64) -> Result<Piece> {
        ensure!(
            target_width.is_finite() && target_height.is_finite(),
            NestError::InvalidGeometry(format!(
                "target size of {} is not finite: {target_width} x {target_height}",
                self.name
            ))
        );
        ensure!(
            target_width > 0.0 && target_height > 0.0,
            NestError::InvalidGeometry(format!(
                "target size of {} must be positive: {target_width} x {target_height}",
                self.name
            ))
        );
        let factor = f64::min(
            target_width / self.bbox.width(),
            target_height / self.bbox.height(),
        );
        Ok(self.scale_from_bbox_min(factor))
    }

    fn scale_from_bbox_min(&self, factor: f64) -> Piece {
        let Rect { x_min, y_min, .. } = self.bbox;
        let vertices = self
            .vertices
            .iter()
            .map(|p| Point((p.0 - x_min) * factor, (p.1 - y_min) * factor))
            .collect();
        Piece::from_ring(self.name.clone(), vertices, self.area * factor * factor)
    }

    /// True if the intersection of both pieces has a positive area. Touching boundaries do not overlap.
    pub fn overlaps(&self, other: &Piece) -> bool {
        if !self.bbox.overlaps(&other.bbox) {
            return false;
        }
        let shared_area = self.polygon.intersection(&other.polygon).unsigned_area();
        shared_area > AREA_TOLERANCE * f64::min(self.area, other.area)
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{} vertices, area: {:.3}]",
            self.name,
            self.vertices.len(),
            self.area
        )
    }
}
