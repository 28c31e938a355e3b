use anyhow::{Result, ensure};

use crate::NestError;
use crate::geometry::primitives::{Point, Rect};
use crate::geometry::{Piece, Region};

/// Rectangular stock sheet with corners (0,0)-(width,0)-(width,height)-(0,height).
///
/// Frames never change after construction. Material used by placed pieces is tracked through
/// the [`Placement`](crate::entities::Placement)s referring to the frame, not by the frame itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: f64,
    height: f64,
    rect: Rect,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            NestError::InvalidGeometry(format!(
                "frame dimensions must be positive, got {width} x {height}"
            ))
        );
        let rect = Rect::try_new(0.0, 0.0, width, height)?;
        Ok(Frame {
            width,
            height,
            rect,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn bottom_left(&self) -> Point {
        self.rect.bottom_left()
    }

    /// The full frame as a region
    pub fn region(&self) -> Region {
        Region::from(self.rect)
    }

    /// True iff the piece lies entirely inside the frame, touching the boundary is allowed.
    pub fn contains(&self, piece: &Piece) -> bool {
        //for an axis-aligned rectangle, containment of the bounding box is equivalent
        self.rect.encloses(&piece.bbox())
    }

    /// Translations of `piece` which keep it inside the frame, see [`Rect::inner_fit`].
    pub fn inner_fit(&self, piece: &Piece) -> Option<Rect> {
        Rect::inner_fit(&self.rect, &piece.bbox())
    }

    /// An independent frame with identical dimensions
    pub fn copy(&self) -> Frame {
        self.clone()
    }
}
