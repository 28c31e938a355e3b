use itertools::Itertools;
use log::trace;

use crate::entities::Frame;
use crate::geometry::primitives::{Point, Rect};
use crate::geometry::{AREA_TOLERANCE, Piece, Region};
use crate::nfp::NfpStrategy;

/// Relative (to the largest frame dimension) distance below which two candidate anchors share
/// a row or coincide. Absorbs the rounding noise of the boolean operations.
pub const ANCHOR_TOLERANCE: f64 = 1e-8;

/// Searches the lowest-leftmost anchor at which `candidate` can be placed in `frame`,
/// next to the pieces already `placed` there.
///
/// * The first piece in an empty frame goes to the frame's bottom-left corner.
/// * Otherwise, the free area `frame − ∪ placed` must at least be able to hold the candidate.
///   The feasible anchors are the translations keeping the candidate inside the frame (inner-fit rectangle),
///   minus the union of the NFPs of the candidate around every placed piece.
/// * The boundary vertices of the feasible region are visited lowest-leftmost first, together with
///   the corners of the inner-fit rectangle and the vertices where it meets the NFPs (exact fits).
///   Because the NFP may under-approximate the true collision zone, every candidate is verified
///   against the actual geometry and the first collision-free one is returned.
///
/// Returns [`None`] if the piece cannot be placed in this frame.
pub fn find_anchor(
    frame: &Frame,
    placed: &[&Piece],
    candidate: &Piece,
    strategy: NfpStrategy,
) -> Option<Point> {
    if placed.is_empty() {
        let corner = frame.bottom_left();
        if is_valid_anchor(frame, placed, candidate, corner) {
            return Some(corner);
        }
    }

    let inner_fit = frame.inner_fit(candidate)?;

    if !placed.is_empty() {
        let occupied = Region::union_all(placed.iter().map(|p| p.polygon().clone()));
        let available = frame.region().difference(&occupied);
        if available.area() < candidate.area() * (1.0 - AREA_TOLERANCE) {
            trace!(
                "[FEAS] {}: not enough free area left ({:.3} < {:.3})",
                candidate.name(),
                available.area(),
                candidate.area()
            );
            return None;
        }
    }

    let nfp_union = placed
        .iter()
        .fold(Region::Empty, |acc, p| acc.union(&strategy.nfp(p, candidate)));

    //degenerate inner-fit rectangles (exact fit along an axis) become an empty region
    let inner_fit_region = Region::from(inner_fit);
    let feasible = inner_fit_region.difference(&nfp_union);

    //an exact fit between placed pieces only leaves a feasible segment, which boolean operations discard.
    //its endpoints are vertices of the part of the inner-fit rectangle covered by the NFPs.
    let tolerance = ANCHOR_TOLERANCE * f64::max(frame.width(), frame.height());
    let grid = AnchorGrid::new(placed, candidate, inner_fit, tolerance);
    let anchors = Point::sorted_lowest_leftmost(
        feasible
            .vertices()
            .chain(inner_fit_region.intersection(&nfp_union).vertices())
            .chain(inner_fit.corners())
            .map(|a| inner_fit.clamp(grid.snap(a))),
        tolerance,
    );

    trace!(
        "[FEAS] {}: {} candidate anchor(s), feasible area {:.3}",
        candidate.name(),
        anchors.len(),
        feasible.area()
    );

    anchors
        .into_iter()
        .find(|a| is_valid_anchor(frame, placed, candidate, *a))
}

/// Coordinates an anchor takes when it lies on an NFP vertex (a placed vertex minus a candidate vertex)
/// or on the inner-fit rectangle. Candidates within the tolerance of such a coordinate are moved onto it,
/// undoing the rounding of the boolean operations.
struct AnchorGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    tolerance: f64,
}

impl AnchorGrid {
    fn new(placed: &[&Piece], candidate: &Piece, inner_fit: Rect, tolerance: f64) -> Self {
        let offsets = placed
            .iter()
            .flat_map(|p| p.vertices())
            .cartesian_product(candidate.vertices())
            .map(|(v, w)| (v.0 - w.0, v.1 - w.1))
            .collect_vec();

        let sorted = |values: Vec<f64>| {
            values
                .into_iter()
                .sorted_by(f64::total_cmp)
                .dedup()
                .collect_vec()
        };

        let xs = offsets
            .iter()
            .map(|o| o.0)
            .chain([inner_fit.x_min, inner_fit.x_max])
            .collect_vec();
        let ys = offsets
            .iter()
            .map(|o| o.1)
            .chain([inner_fit.y_min, inner_fit.y_max])
            .collect_vec();

        AnchorGrid {
            xs: sorted(xs),
            ys: sorted(ys),
            tolerance,
        }
    }

    fn snap(&self, p: Point) -> Point {
        Point(
            snap_to(p.0, &self.xs, self.tolerance),
            snap_to(p.1, &self.ys, self.tolerance),
        )
    }
}

/// Nearest of the sorted `targets` if it lies within `tolerance` of `value`, `value` otherwise.
fn snap_to(value: f64, targets: &[f64], tolerance: f64) -> f64 {
    let i = targets.partition_point(|&t| t < value);
    [i.checked_sub(1), Some(i)]
        .into_iter()
        .flatten()
        .filter_map(|j| targets.get(j).copied())
        .min_by(|a, b| (a - value).abs().total_cmp(&(b - value).abs()))
        .filter(|t| (t - value).abs() <= tolerance)
        .unwrap_or(value)
}

/// Checks the actual geometry: the translated candidate must lie inside the frame and
/// must not overlap any placed piece.
pub fn is_valid_anchor(frame: &Frame, placed: &[&Piece], candidate: &Piece, anchor: Point) -> bool {
    let moved = candidate.translate(anchor.0, anchor.1);
    frame.contains(&moved) && placed.iter().all(|p| !p.overlaps(&moved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn rect(name: &str, w: f64, h: f64) -> Piece {
        Piece::new(
            name,
            vec![Point(0.0, 0.0), Point(w, 0.0), Point(w, h), Point(0.0, h)],
        )
        .unwrap()
    }

    fn resolve(frame: &Frame, placed: &[Piece], candidate: &Piece) -> Option<Point> {
        let placed = placed.iter().collect_vec();
        find_anchor(frame, &placed, candidate, NfpStrategy::VertexTranslation)
    }

    #[test]
    fn empty_frame_uses_bottom_left_corner() {
        let frame = Frame::new(100.0, 60.0).unwrap();
        assert_eq!(
            resolve(&frame, &[], &rect("a", 20.0, 10.0)),
            Some(Point(0.0, 0.0))
        );
    }

    #[test]
    fn oversized_piece_has_no_anchor() {
        let frame = Frame::new(100.0, 60.0).unwrap();
        assert_eq!(resolve(&frame, &[], &rect("wide", 101.0, 10.0)), None);
    }

    #[test]
    fn piece_of_exact_frame_width_fits() {
        let frame = Frame::new(100.0, 60.0).unwrap();
        let placed = [rect("bottom", 100.0, 20.0)];
        let anchor = resolve(&frame, &placed, &rect("top", 100.0, 40.0)).unwrap();
        assert!(anchor.distance(&Point(0.0, 20.0)) < 1e-6);
    }

    #[test]
    fn second_piece_goes_lowest_leftmost() {
        let frame = Frame::new(100.0, 60.0).unwrap();
        let placed = [rect("a", 10.0, 10.0)];
        let anchor = resolve(&frame, &placed, &rect("b", 10.0, 10.0)).unwrap();
        assert!(anchor.distance(&Point(10.0, 0.0)) < 1e-6, "got {anchor}");
    }

    #[test]
    fn full_frame_has_no_anchor() {
        let frame = Frame::new(100.0, 60.0).unwrap();
        let placed = [rect("a", 55.0, 55.0)];
        assert_eq!(resolve(&frame, &placed, &rect("b", 55.0, 55.0)), None);
    }

    #[test]
    fn anchors_inside_the_approximation_gap_are_rejected() {
        //the vertex copies of the plate leave a gap in its NFP between y = 10 and y = 20,
        //the anchors in that gap collide with the plate and must be skipped
        let frame = Frame::new(30.0, 60.0).unwrap();
        let placed = [
            rect("floor", 30.0, 5.0),
            rect("plate", 20.0, 10.0).translate(0.0, 20.0),
        ];
        let bar = rect("bar", 20.0, 20.0);

        let refs = placed.iter().collect_vec();
        assert!(!is_valid_anchor(&frame, &refs, &bar, Point(0.0, 10.0)));

        let anchor = resolve(&frame, &placed, &bar).unwrap();
        assert!(anchor.distance(&Point(0.0, 30.0)) < 1e-6, "got {anchor}");
        assert!(is_valid_anchor(&frame, &refs, &bar, anchor));
    }

    #[test]
    fn exact_fit_next_to_placed_piece() {
        let frame = Frame::new(30.0, 20.0).unwrap();
        let placed = [rect("big", 20.0, 20.0)];
        let anchor = resolve(&frame, &placed, &rect("small", 10.0, 10.0)).unwrap();
        assert!(anchor.distance(&Point(20.0, 0.0)) < 1e-6, "got {anchor}");
    }

    fn hexagon(width: f64) -> Piece {
        let h = 0.866 * width;
        Piece::new(
            "hexagon",
            vec![
                Point(0.25 * width, 0.0),
                Point(0.75 * width, 0.0),
                Point(width, 0.5 * h),
                Point(0.75 * width, h),
                Point(0.25 * width, h),
                Point(0.0, 0.5 * h),
            ],
        )
        .unwrap()
    }

    #[test]
    fn second_row_starts_at_the_left() {
        let frame = Frame::new(100.0, 100.0).unwrap();
        let hexagon = hexagon(10.0);

        let mut placed: Vec<Piece> = vec![];
        for i in 0..10 {
            let anchor = resolve(&frame, &placed, &hexagon).unwrap();
            assert!(anchor.1.abs() < 1e-6, "hexagon {i} left the bottom row: {anchor}");
            placed.push(hexagon.translate(anchor.0, anchor.1));
        }

        let anchor = resolve(&frame, &placed, &hexagon).unwrap();
        assert!(anchor.distance(&Point(0.0, 8.66)) < 1e-6, "got {anchor}");
    }

    #[test_case(1.0; "unit frame")]
    #[test_case(1000.0; "large frame")]
    fn tiny_piece_goes_next_to_the_first(scale: f64) {
        let frame = Frame::new(100.0 * scale, 60.0 * scale).unwrap();
        let side = 1e-3 * scale;
        let placed = [rect("a", side, side)];
        let anchor = resolve(&frame, &placed, &rect("b", side, side)).unwrap();
        assert!(anchor.distance(&Point(side, 0.0)) < 1e-3 * side, "got {anchor}");
    }

    #[test]
    fn successive_anchors_never_overlap() {
        let frame = Frame::new(50.0, 30.0).unwrap();
        let shapes = [
            rect("r1", 12.0, 7.0),
            Piece::new(
                "tri",
                vec![Point(0.0, 0.0), Point(10.0, 0.0), Point(5.0, 9.0)],
            )
            .unwrap(),
            rect("r2", 6.0, 14.0),
            Piece::new(
                "l-shape",
                vec![
                    Point(0.0, 0.0),
                    Point(10.0, 0.0),
                    Point(10.0, 4.0),
                    Point(4.0, 4.0),
                    Point(4.0, 10.0),
                    Point(0.0, 10.0),
                ],
            )
            .unwrap(),
            rect("r3", 9.0, 9.0),
        ];

        let mut placed: Vec<Piece> = vec![];
        for shape in shapes.iter().cycle().take(12) {
            if let Some(anchor) = resolve(&frame, &placed, shape) {
                placed.push(shape.translate(anchor.0, anchor.1));
            }
        }

        assert!(placed.len() >= 5);
        for (i, a) in placed.iter().enumerate() {
            assert!(frame.contains(a), "{a} is not contained");
            for b in placed.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
        }
    }
}
