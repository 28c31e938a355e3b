use std::cmp::Reverse;

use itertools::Itertools;
use log::{debug, trace};
use ordered_float::NotNan;
use polycut::entities::{Instance, Placement, Solution};
use polycut::feasibility::find_anchor;
use polycut::geometry::Piece;
use polycut::nfp::NfpStrategy;
use rand::Rng;

/// Builds a single complete solution by randomized-greedy construction.
///
/// While pieces remain, one is drawn uniformly from the restricted candidate list (the `rcl_size`
/// largest remaining pieces) and placed in the first frame which has a feasible anchor for it.
/// Pieces without any feasible anchor end up in [`Solution::not_placed`].
pub fn construct(
    instance: &Instance,
    rcl_size: usize,
    nfp_strategy: NfpStrategy,
    rng: &mut impl Rng,
) -> Solution {
    assert!(rcl_size > 0, "restricted candidate list cannot be empty");
    let mut remaining = (0..instance.pieces.len()).collect_vec();
    let mut placements: Vec<Placement> = Vec::with_capacity(instance.pieces.len());
    let mut not_placed = vec![];

    while !remaining.is_empty() {
        let rcl_len = restricted_candidate_list(&instance.pieces, &mut remaining, rcl_size).len();
        let piece_id = remaining.remove(rng.random_range(0..rcl_len));
        let piece = &instance.pieces[piece_id];

        match search_frames(instance, &placements, piece, nfp_strategy) {
            Some(placement) => {
                trace!(
                    "[CONSTR] placed {} at {} in frame {}",
                    piece.name(),
                    placement.anchor,
                    placement.frame_index
                );
                placements.push(placement);
            }
            None => {
                debug!("[CONSTR] {} does not fit in any frame", piece.name());
                not_placed.push(piece.clone());
            }
        }
    }

    Solution::new(instance, placements, not_placed)
}

/// Orders `remaining` (indices into `pieces`) by descending area and returns the restricted candidate list:
/// the first `min(rcl_size, remaining.len())` entries. The order among pieces of equal area is preserved.
pub fn restricted_candidate_list<'a>(
    pieces: &[Piece],
    remaining: &'a mut [usize],
    rcl_size: usize,
) -> &'a [usize] {
    remaining.sort_by_cached_key(|&i| {
        Reverse(NotNan::new(pieces[i].area()).expect("piece area is NaN"))
    });
    let len = usize::min(rcl_size, remaining.len());
    &remaining[..len]
}

/// Tries the frames in order and returns a placement in the first one with a feasible anchor.
fn search_frames(
    instance: &Instance,
    placements: &[Placement],
    piece: &Piece,
    nfp_strategy: NfpStrategy,
) -> Option<Placement> {
    instance
        .frames
        .iter()
        .enumerate()
        .find_map(|(frame_index, frame)| {
            let placed = placements
                .iter()
                .filter(|p| p.frame_index == frame_index)
                .map(|p| &p.piece)
                .collect_vec();
            let anchor = find_anchor(frame, &placed, piece, nfp_strategy)?;
            Some(Placement::new(piece, frame_index, anchor))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycut::geometry::primitives::Point;
    use test_case::test_case;

    fn squares(sides: &[f64]) -> Vec<Piece> {
        sides
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                Piece::new(
                    format!("sq{i}"),
                    vec![Point(0.0, 0.0), Point(s, 0.0), Point(s, s), Point(0.0, s)],
                )
                .unwrap()
            })
            .collect()
    }

    #[test_case(3, 6, 3; "larger pool")]
    #[test_case(3, 2, 2; "smaller pool")]
    #[test_case(1, 4, 1; "pure greedy")]
    #[test_case(10, 10, 10; "pure random")]
    fn rcl_is_bounded_and_holds_the_largest(rcl_size: usize, n_pieces: usize, expected: usize) {
        let sides = [3.0, 9.0, 1.0, 7.0, 5.0, 2.0, 8.0, 4.0, 6.0, 10.0];
        let pieces = squares(&sides[..n_pieces]);
        let mut remaining = (0..n_pieces).rev().collect_vec();

        let largest = (0..n_pieces)
            .max_by(|&a, &b| pieces[a].area().total_cmp(&pieces[b].area()))
            .unwrap();
        let rcl = restricted_candidate_list(&pieces, &mut remaining, rcl_size);

        assert_eq!(rcl.len(), expected);
        assert_eq!(rcl[0], largest);
        assert!(
            rcl.windows(2)
                .all(|w| pieces[w[0]].area() >= pieces[w[1]].area())
        );
    }

    #[test]
    fn greedy_construction_fills_bottom_row_first() {
        use polycut::entities::Frame;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let instance = Instance::new(
            vec![Frame::new(30.0, 20.0).unwrap()],
            squares(&[10.0, 10.0, 10.0, 20.0]),
        );
        let solution = construct(
            &instance,
            1,
            NfpStrategy::VertexTranslation,
            &mut SmallRng::seed_from_u64(0),
        );

        //largest first, then the equal squares in their original order until the frame is full
        let order = solution.placements.iter().map(|p| p.name()).collect_vec();
        assert_eq!(order, vec!["sq3", "sq0", "sq1"]);
        assert!(solution.placements[0].anchor.distance(&Point(0.0, 0.0)) < 1e-6);
        assert!(solution.placements[1].anchor.distance(&Point(20.0, 0.0)) < 1e-6);
        assert!(solution.placements[2].anchor.distance(&Point(20.0, 10.0)) < 1e-6);
        assert_eq!(solution.not_placed.len(), 1);
        assert_eq!(solution.not_placed[0].name(), "sq2");
    }

    #[test]
    fn rcl_keeps_order_of_equal_areas() {
        let pieces = squares(&[2.0, 2.0, 2.0]);
        let mut remaining = vec![2, 0, 1];
        let rcl = restricted_candidate_list(&pieces, &mut remaining, 2);
        assert_eq!(rcl.to_vec(), vec![2, 0]);
    }
}
