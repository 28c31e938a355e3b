//Various checks to verify correctness of a solution
//Used in debug_assert!() blocks and tests

use float_cmp::approx_eq;
use log::error;

use crate::entities::{Instance, Solution};

/// Every placed piece lies inside its frame
pub fn placements_contained(instance: &Instance, solution: &Solution) -> bool {
    solution.placements.iter().all(|p| {
        let contained = instance.frame(p.frame_index).contains(&p.piece);
        if !contained {
            error!(
                "{} at {} is not contained in frame {}",
                p.piece, p.anchor, p.frame_index
            );
        }
        contained
    })
}

/// No two placements sharing a frame have an intersection with positive area
pub fn placements_disjoint(solution: &Solution) -> bool {
    let placements = &solution.placements;
    placements.iter().enumerate().all(|(i, a)| {
        placements[i + 1..]
            .iter()
            .filter(|b| b.frame_index == a.frame_index)
            .all(|b| {
                let overlapping = a.piece.overlaps(&b.piece);
                if overlapping {
                    error!(
                        "{} at {} overlaps {} at {} in frame {}",
                        a.piece, a.anchor, b.piece, b.anchor, a.frame_index
                    );
                }
                !overlapping
            })
    })
}

/// `waste == Σ(frame areas) − Σ(placed piece areas)`
pub fn waste_conserved(instance: &Instance, solution: &Solution) -> bool {
    let expected = instance.total_frame_area() - solution.placed_area();
    approx_eq!(f64, solution.waste, expected, epsilon = 1e-6)
}

/// Every piece of the instance is either placed or reported as not placed
pub fn pieces_accounted_for(instance: &Instance, solution: &Solution) -> bool {
    solution.placed_count() + solution.not_placed.len() == instance.pieces.len()
}

pub fn solution_is_valid(instance: &Instance, solution: &Solution) -> bool {
    placements_contained(instance, solution)
        && placements_disjoint(solution)
        && waste_conserved(instance, solution)
        && pieces_accounted_for(instance, solution)
}
