use std::time::Instant;

use itertools::Itertools;

use crate::entities::{Instance, Placement, Solution};
use crate::geometry::Piece;
use crate::io::ext_repr::{ExtPiece, ExtPlacement, ExtSolution};

/// Exports a solution out of the library
pub fn export(instance: &Instance, solution: &Solution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        placements: solution.placements.iter().map(export_placement).collect(),
        not_placed: solution.not_placed.iter().map(export_piece).collect(),
        waste: solution.waste,
        placed_count: solution.placed_count(),
        density: solution.density(instance),
        run_time_sec: epoch.elapsed().as_secs(),
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        piece: placement.name().to_string(),
        vertices: placement
            .piece
            .vertices()
            .iter()
            .map(|&p| p.into())
            .collect_vec(),
        frame_index: placement.frame_index,
        anchor: placement.anchor.into(),
    }
}

pub fn export_piece(piece: &Piece) -> ExtPiece {
    ExtPiece {
        name: piece.name().to_string(),
        vertices: piece.vertices().iter().map(|&p| p.into()).collect_vec(),
        demand: 1,
        size: None,
    }
}
