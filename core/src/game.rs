use rand::Rng;

use crate::grid::PieceGeometry;
use crate::piece::{Piece, PieceId};

pub const SNAP_DISTANCE_RATIO: f32 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

pub fn snap_distance(geometry: PieceGeometry) -> f32 {
    geometry.piece_width * SNAP_DISTANCE_RATIO
}

/// Half extents of the rectangle a piece centre may scatter into so the whole
/// piece stays inside the play area. Areas that are too small, negative or
/// non-finite collapse to the origin.
pub fn scatter_extent(area: PlayArea, geometry: PieceGeometry) -> (f32, f32) {
    let usable = |half: f32| if half.is_finite() && half > 0.0 { half } else { 0.0 };
    (
        usable(area.width * 0.5 - geometry.piece_width * 0.5),
        usable(area.height * 0.5 - geometry.piece_height * 0.5),
    )
}

pub fn scatter_position<R: Rng + ?Sized>(rng: &mut R, extent: (f32, f32)) -> (f32, f32) {
    let (half_x, half_y) = extent;
    let x = rng.random_range(-half_x..=half_x);
    let y = rng.random_range(-half_y..=half_y);
    (x, y)
}

pub fn bring_to_front(order: &mut Vec<PieceId>, id: PieceId) {
    if let Some(idx) = order.iter().position(|entry| *entry == id) {
        order.remove(idx);
        order.push(id);
    }
}

/// Topmost interactive piece under `point`, walking `draw_order` from the top.
pub fn pick_piece_at(
    point: (f32, f32),
    pieces: &[Piece],
    draw_order: &[PieceId],
    geometry: PieceGeometry,
) -> Option<PieceId> {
    if geometry.piece_width <= 0.0 || geometry.piece_height <= 0.0 {
        return None;
    }
    for &piece_id in draw_order.iter().rev() {
        let Some(piece) = pieces.get(piece_id) else {
            continue;
        };
        if !piece.is_interactive() {
            continue;
        }
        if piece.contains(point, geometry) {
            return Some(piece_id);
        }
    }
    None
}
