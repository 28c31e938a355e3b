use crate::NestError;
use crate::geometry::primitives::Point;
use crate::util::FPA;
use anyhow::{Result, ensure};
use geo_types::{Polygon, coord};

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            NestError::InvalidGeometry(format!(
                "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
            ))
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Smallest rectangle enclosing all `points`, [`None`] if there are none.
    /// The result may have zero width or height.
    pub fn bounding(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, Point(x, y)| match acc {
            None => Some(Rect {
                x_min: x,
                y_min: y,
                x_max: x,
                y_max: y,
            }),
            Some(r) => Some(Rect {
                x_min: r.x_min.min(x),
                y_min: r.y_min.min(y),
                x_max: r.x_max.max(x),
                y_max: r.y_max.max(y),
            }),
        })
    }

    /// Rectangle of all translations that keep `inner` inside `outer` (touching allowed).
    /// Can be degenerate (a segment or a point) when `inner` fits exactly along an axis.
    /// Returns [`None`] when `inner` is larger than `outer` along some axis.
    pub fn inner_fit(outer: &Rect, inner: &Rect) -> Option<Self> {
        let x_min = outer.x_min - inner.x_min;
        let y_min = outer.y_min - inner.y_min;
        let mut x_max = outer.x_max - inner.x_max;
        let mut y_max = outer.y_max - inner.y_max;

        if FPA(x_max) < FPA(x_min) || FPA(y_max) < FPA(y_min) {
            return None;
        }
        //snap rounding noise away
        x_max = x_max.max(x_min);
        y_max = y_max.max(y_min);

        Some(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn is_degenerate(&self) -> bool {
        FPA(self.width()).is_zero() || FPA(self.height()).is_zero()
    }

    pub fn bottom_left(&self) -> Point {
        Point(self.x_min, self.y_min)
    }

    /// Corners in counterclockwise order, starting at the bottom left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    /// Closed containment check, with a tolerance for floating point noise.
    pub fn encloses(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }

    /// True if the interiors of both rectangles share some area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        FPA(self.x_min) < FPA(other.x_max)
            && FPA(other.x_min) < FPA(self.x_max)
            && FPA(self.y_min) < FPA(other.y_max)
            && FPA(other.y_min) < FPA(self.y_max)
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point(
            p.0.clamp(self.x_min, self.x_max),
            p.1.clamp(self.y_min, self.y_max),
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(
            self.corners()
                .iter()
                .map(|p| coord! { x: p.0, y: p.1 })
                .collect::<Vec<_>>()
                .into(),
            vec![],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_fit_of_smaller_rect() {
        let outer = Rect::try_new(0.0, 0.0, 100.0, 60.0).unwrap();
        let inner = Rect::try_new(0.0, 0.0, 20.0, 10.0).unwrap();
        let ifr = Rect::inner_fit(&outer, &inner).unwrap();
        assert_eq!(ifr, Rect::try_new(0.0, 0.0, 80.0, 50.0).unwrap());
    }

    #[test]
    fn inner_fit_is_degenerate_on_exact_width() {
        let outer = Rect::try_new(0.0, 0.0, 100.0, 60.0).unwrap();
        let inner = Rect::try_new(5.0, 0.0, 105.0, 10.0).unwrap();
        let ifr = Rect::inner_fit(&outer, &inner).unwrap();
        assert!(ifr.is_degenerate());
        assert_eq!(ifr.bottom_left(), Point(-5.0, 0.0));
    }

    #[test]
    fn inner_fit_of_larger_rect() {
        let outer = Rect::try_new(0.0, 0.0, 100.0, 60.0).unwrap();
        let inner = Rect::try_new(0.0, 0.0, 101.0, 10.0).unwrap();
        assert!(Rect::inner_fit(&outer, &inner).is_none());
    }

    #[test]
    fn inverted_rect_is_rejected() {
        let err = Rect::try_new(1.0, 0.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NestError>(),
            Some(NestError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::try_new(10.0, 0.0, 20.0, 10.0).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::try_new(9.0, 9.0, 20.0, 20.0).unwrap()));
    }
}
