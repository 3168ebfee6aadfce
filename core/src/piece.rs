use crate::grid::{target_position, uv_rect, GridDimensions, PieceGeometry, UvRect};

pub type PieceId = usize;

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub id: PieceId,
    pub col: u32,
    pub row: u32,
    pub target: (f32, f32),
    pub position: (f32, f32),
    pub uv: UvRect,
    pub locked: bool,
}

impl Piece {
    pub fn new(id: PieceId, dims: GridDimensions, geometry: PieceGeometry) -> Self {
        let (col, row) = dims.col_row(id);
        let target = target_position(col, row, dims, geometry);
        Self {
            id,
            col,
            row,
            target,
            position: target,
            uv: uv_rect(col, row, dims),
            locked: false,
        }
    }

    /// Locked pieces drop out of hit testing for the rest of the session.
    pub fn is_interactive(&self) -> bool {
        !self.locked
    }

    pub fn contains(&self, point: (f32, f32), geometry: PieceGeometry) -> bool {
        let half_width = geometry.piece_width * 0.5;
        let half_height = geometry.piece_height * 0.5;
        let dx = (point.0 - self.position.0).abs();
        let dy = (point.1 - self.position.1).abs();
        dx <= half_width && dy <= half_height
    }

    pub fn distance_to(&self, point: (f32, f32)) -> f32 {
        let dx = self.position.0 - point.0;
        let dy = self.position.1 - point.1;
        (dx * dx + dy * dy).sqrt()
    }
}
