/// Basic geometric primitives
pub mod primitives;

mod piece;
mod region;

#[doc(inline)]
pub use piece::Piece;
#[doc(inline)]
pub use region::Region;

/// Relative tolerance used when deciding whether an intersection has positive area
/// or whether a boolean result is degenerate.
pub const AREA_TOLERANCE: f64 = 1e-6;
