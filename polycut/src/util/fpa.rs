use std::cmp::Ordering;

use float_cmp::approx_eq;

/// Coordinate or extent compared with a fixed absolute tolerance of [`FPA::EPSILON`] (or 4 ulps).
///
/// Used wherever geometry is compared with closed semantics: touching boundaries,
/// exact fits and degenerate extents.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    pub const EPSILON: f64 = 1e-9;

    /// True for values indistinguishable from zero, e.g. the width of a degenerate rectangle
    pub fn is_zero(self) -> bool {
        self == FPA(0.0)
    }
}

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        approx_eq!(f64, self.0, other.0, epsilon = FPA::EPSILON, ulps = 4)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}
