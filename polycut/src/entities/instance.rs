use crate::entities::Frame;
use crate::geometry::Piece;

/// The input of the nesting problem: the available frames and the (individual) pieces to place.
#[derive(Clone, Debug)]
pub struct Instance {
    pub frames: Vec<Frame>,
    pub pieces: Vec<Piece>,
}

impl Instance {
    pub fn new(frames: Vec<Frame>, pieces: Vec<Piece>) -> Self {
        Instance { frames, pieces }
    }

    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index]
    }

    pub fn total_frame_area(&self) -> f64 {
        self.frames.iter().map(|f| f.area()).sum()
    }

    pub fn total_piece_area(&self) -> f64 {
        self.pieces.iter().map(|p| p.area()).sum()
    }

    /// Nothing can be placed without frames or pieces
    pub fn is_trivial(&self) -> bool {
        self.frames.is_empty() || self.pieces.is_empty()
    }
}
