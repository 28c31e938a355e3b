use crate::entities::{Instance, Placement};
use crate::geometry::Piece;

/// Outcome of a single construction: committed placements, pieces which did not fit and the resulting waste.
#[derive(Clone, Debug)]
pub struct Solution {
    pub placements: Vec<Placement>,
    /// Original, untransformed pieces which could not be placed in any frame
    pub not_placed: Vec<Piece>,
    /// Total frame area minus the total area of all placed pieces
    pub waste: f64,
}

impl Solution {
    /// Builds a solution, deriving the waste from the frames of `instance`.
    pub fn new(instance: &Instance, placements: Vec<Placement>, not_placed: Vec<Piece>) -> Self {
        let waste = Solution::calculate_waste(instance, &placements);
        Solution {
            placements,
            not_placed,
            waste,
        }
    }

    /// `Σ(frame areas) − Σ(placed piece areas)`
    pub fn calculate_waste(instance: &Instance, placements: &[Placement]) -> f64 {
        instance.total_frame_area() - placements.iter().map(|p| p.piece.area()).sum::<f64>()
    }

    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    pub fn placed_area(&self) -> f64 {
        self.placements.iter().map(|p| p.piece.area()).sum()
    }

    /// Fraction of the total frame area covered by placed pieces
    pub fn density(&self, instance: &Instance) -> f64 {
        let total = instance.total_frame_area();
        if total > 0.0 {
            self.placed_area() / total
        } else {
            0.0
        }
    }

    /// Placements bound to the frame at `frame_index`, in order of placement
    pub fn placements_in(&self, frame_index: usize) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |p| p.frame_index == frame_index)
    }
}
