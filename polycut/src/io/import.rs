use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;

use crate::entities::{Frame, Instance};
use crate::geometry::Piece;
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{ExtFrame, ExtInstance, ExtPiece};

/// Imports an instance into the library.
/// Every piece template is expanded into `demand` individual pieces.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let frames = ext_instance
        .frames
        .iter()
        .enumerate()
        .map(|(i, ext_frame)| import_frame(ext_frame).with_context(|| format!("frame {i}")))
        .collect::<Result<Vec<Frame>>>()?;

    let pieces = ext_instance
        .pieces
        .iter()
        .map(|ext_piece| {
            let piece = import_piece(ext_piece)
                .with_context(|| format!("piece {}", ext_piece.name))?;
            Ok::<_, anyhow::Error>(std::iter::repeat_n(piece, ext_piece.demand))
        })
        .flatten_ok()
        .collect::<Result<Vec<Piece>>>()?;

    debug!(
        "imported instance {} with {} frame(s) and {} piece(s)",
        ext_instance.name,
        frames.len(),
        pieces.len()
    );

    Ok(Instance::new(frames, pieces))
}

pub fn import_frame(ext_frame: &ExtFrame) -> Result<Frame> {
    Frame::new(ext_frame.width, ext_frame.height)
}

/// Imports a single piece, fitted to its target size if one is defined
pub fn import_piece(ext_piece: &ExtPiece) -> Result<Piece> {
    let vertices = ext_piece.vertices.iter().map(|&v| Point::from(v)).collect_vec();
    let piece = Piece::new(ext_piece.name.clone(), vertices)?;
    match ext_piece.size {
        Some(size) => piece.scale_to_size(size.width, size.height),
        None => Ok(piece),
    }
}
