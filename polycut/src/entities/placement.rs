use crate::geometry::Piece;
use crate::geometry::primitives::Point;

/// A piece committed to a frame. Immutable once created.
#[derive(Clone, Debug)]
pub struct Placement {
    /// The piece, already translated into frame coordinates
    pub piece: Piece,
    /// Index of the frame in the [`Instance`](crate::entities::Instance)
    pub frame_index: usize,
    /// Translation applied to the original vertex ring
    pub anchor: Point,
}

impl Placement {
    /// Translates `piece` to `anchor` and binds it to the frame at `frame_index`.
    pub fn new(piece: &Piece, frame_index: usize, anchor: Point) -> Self {
        Placement {
            piece: piece.translate(anchor.0, anchor.1),
            frame_index,
            anchor,
        }
    }

    pub fn name(&self) -> &str {
        self.piece.name()
    }
}
