use thiserror::Error;

/// Errors which are surfaced to the caller before any search is performed.
///
/// Library functions return [`anyhow::Result`], these variants are raised through it and can be
/// recovered with [`anyhow::Error::downcast_ref`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NestError {
    /// A piece or frame with zero/negative extent, or a vertex ring with fewer than 3 points
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Solver configuration which cannot be run
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
