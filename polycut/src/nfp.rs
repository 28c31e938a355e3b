use log::trace;
use serde::{Deserialize, Serialize};

use crate::geometry::{Piece, Region};

/// Algorithm used to derive No-Fit Polygons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NfpStrategy {
    /// Union of copies of the fixed piece translated to every vertex of the reflected moving piece.
    /// This samples the Minkowski sum at the vertices only: it is exact when the copies tile
    /// the sum (e.g. two axis-aligned rectangles) and otherwise under-approximates it.
    #[default]
    VertexTranslation,
}

impl NfpStrategy {
    /// Region of translations of `moving` which make it overlap `fixed`.
    pub fn nfp(&self, fixed: &Piece, moving: &Piece) -> Region {
        match self {
            NfpStrategy::VertexTranslation => compute_nfp(fixed, moving),
        }
    }
}

/// Approximates the Minkowski sum `fixed ⊕ moving` by translating `fixed` to every vertex of
/// `moving` and taking the union of all copies.
pub fn minkowski_sum(fixed: &Piece, moving: &Piece) -> Region {
    Region::union_all(
        moving
            .vertices()
            .iter()
            .map(|v| fixed.translate(v.0, v.1).polygon().clone()),
    )
}

/// No-Fit Polygon of `moving` around `fixed`: `fixed ⊕ (−moving)`.
///
/// Translating `moving` by any anchor inside this region makes it overlap `fixed`,
/// anchors outside of it are collision-free against `fixed`.
pub fn compute_nfp(fixed: &Piece, moving: &Piece) -> Region {
    let nfp = minkowski_sum(fixed, &moving.reflect());
    trace!(
        "[NFP] {} around {}: {} component(s), area {:.3}",
        moving.name(),
        fixed.name(),
        nfp.polygons().count(),
        nfp.area()
    );
    nfp
}
