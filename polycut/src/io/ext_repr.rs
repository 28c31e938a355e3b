use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Stock frames, in the order in which they are tried
    pub frames: Vec<ExtFrame>,
    /// Piece templates
    pub pieces: Vec<ExtPiece>,
}

/// External representation of a [`Frame`](crate::entities::Frame).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtFrame {
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`Piece`](crate::geometry::Piece) template.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPiece {
    pub name: String,
    /// Vertex ring of the outer boundary, without closing duplicate
    pub vertices: Vec<(f64, f64)>,
    /// Number of copies to place
    #[serde(default = "default_demand")]
    pub demand: usize,
    /// If defined, the piece is fitted inside this box before nesting (aspect ratio is preserved)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<ExtSize>,
}

fn default_demand() -> usize {
    1
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtSize {
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    /// Name of the placed piece
    pub piece: String,
    /// Vertices of the piece in frame coordinates
    pub vertices: Vec<(f64, f64)>,
    /// Index of the frame in the instance
    pub frame_index: usize,
    /// Translation applied to the original vertices
    pub anchor: (f64, f64),
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub placements: Vec<ExtPlacement>,
    /// Pieces which could not be placed, with their original geometry
    pub not_placed: Vec<ExtPiece>,
    /// Frame area not covered by any placed piece
    pub waste: f64,
    pub placed_count: usize,
    /// Fraction of the frame area covered by placed pieces
    pub density: f64,
    /// Seconds between the start of the program and the creation of the solution
    pub run_time_sec: u64,
}
