use log::{debug, info, trace};
use rand::Rng;

use crate::error::PuzzleError;
use crate::game::{
    bring_to_front, pick_piece_at, scatter_extent, scatter_position, snap_distance, PlayArea,
};
use crate::grid::{
    border_outline, compute_dimensions, compute_geometry, target_position, GridDimensions,
    ImageDescriptor, PieceGeometry,
};
use crate::piece::{Piece, PieceId};
use crate::progression::ProgressionGate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Playing,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    NoDrag,
    Missed { piece_id: PieceId },
    Locked { piece_id: PieceId },
    Completed { piece_id: PieceId },
}

impl DropOutcome {
    pub fn locked(self) -> bool {
        matches!(self, DropOutcome::Locked { .. } | DropOutcome::Completed { .. })
    }
}

#[derive(Clone, Debug)]
struct Board {
    image: ImageDescriptor,
    dims: GridDimensions,
    geometry: PieceGeometry,
    // Row-major by id; snap evaluation recovers the slot from the index.
    pieces: Vec<Piece>,
    draw_order: Vec<PieceId>,
    dragging: Option<PieceId>,
    locked_count: usize,
}

impl Board {
    fn is_complete(&self) -> bool {
        self.locked_count == self.pieces.len()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PuzzleSession {
    board: Option<Board>,
}

impl PuzzleSession {
    pub fn new() -> Self {
        Self { board: None }
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.board {
            None => SessionPhase::Idle,
            Some(board) if board.is_complete() => SessionPhase::Complete,
            Some(_) => SessionPhase::Playing,
        }
    }

    pub fn start_game<R: Rng + ?Sized>(
        &mut self,
        image: ImageDescriptor,
        difficulty: u32,
        play_area: PlayArea,
        rng: &mut R,
    ) -> Result<(), PuzzleError> {
        if self.phase() == SessionPhase::Playing {
            debug!("start ignored: session still in progress");
            return Err(PuzzleError::SessionActive);
        }
        let dims = compute_dimensions(image, difficulty)?;
        let geometry = compute_geometry(image, dims);
        let total = dims.total();
        let pieces: Vec<Piece> = (0..total)
            .map(|id| Piece::new(id, dims, geometry))
            .collect();
        self.board = Some(Board {
            image,
            dims,
            geometry,
            pieces,
            draw_order: (0..total).collect(),
            dragging: None,
            locked_count: 0,
        });
        self.scatter(play_area, rng);
        info!(
            "puzzle started: {}x{} image, {}x{} grid, {} pieces",
            image.width, image.height, dims.cols, dims.rows, total
        );
        Ok(())
    }

    pub fn scatter<R: Rng + ?Sized>(&mut self, play_area: PlayArea, rng: &mut R) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let extent = scatter_extent(play_area, board.geometry);
        for piece in board.pieces.iter_mut().filter(|piece| !piece.locked) {
            piece.position = scatter_position(rng, extent);
        }
    }

    /// Default hit test over the current draw order.
    pub fn pick_piece_at(&self, point: (f32, f32)) -> Option<PieceId> {
        let board = self.board.as_ref()?;
        pick_piece_at(point, &board.pieces, &board.draw_order, board.geometry)
    }

    /// Starts dragging `hit` unless a drag is already active or the piece is
    /// locked or unknown.
    pub fn begin_drag(&mut self, hit: Option<PieceId>) -> Option<PieceId> {
        let board = self.board.as_mut()?;
        if board.dragging.is_some() {
            return None;
        }
        let piece_id = hit?;
        let piece = board.pieces.get(piece_id)?;
        if !piece.is_interactive() {
            return None;
        }
        board.dragging = Some(piece_id);
        bring_to_front(&mut board.draw_order, piece_id);
        trace!("drag began on piece {piece_id}");
        Some(piece_id)
    }

    pub fn update_drag(&mut self, pointer: (f32, f32)) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let Some(piece_id) = board.dragging else {
            return;
        };
        if let Some(piece) = board.pieces.get_mut(piece_id) {
            piece.position = pointer;
        }
    }

    pub fn end_drag(&mut self, gate: &mut ProgressionGate) -> DropOutcome {
        let Some(board) = self.board.as_mut() else {
            return DropOutcome::NoDrag;
        };
        let Some(piece_id) = board.dragging.take() else {
            return DropOutcome::NoDrag;
        };
        let cols = board.dims.cols as usize;
        let col = (piece_id % cols) as u32;
        let row = (piece_id / cols) as u32;
        let target = target_position(col, row, board.dims, board.geometry);
        let threshold = snap_distance(board.geometry);
        let Some(piece) = board.pieces.get_mut(piece_id) else {
            return DropOutcome::NoDrag;
        };
        let distance = piece.distance_to(target);
        if distance >= threshold {
            debug!("piece {piece_id} dropped {distance:.4} from its slot (threshold {threshold:.4})");
            return DropOutcome::Missed { piece_id };
        }
        piece.position = target;
        piece.locked = true;
        board.locked_count += 1;
        debug!(
            "piece {piece_id} locked ({}/{})",
            board.locked_count,
            board.pieces.len()
        );
        if board.is_complete() {
            gate.record_level_beaten();
            info!(
                "puzzle complete: {} pieces, {} levels beaten",
                board.pieces.len(),
                gate.levels_beaten()
            );
            return DropOutcome::Completed { piece_id };
        }
        DropOutcome::Locked { piece_id }
    }

    pub fn restart(&mut self) -> bool {
        let discarded = self.board.take();
        if let Some(board) = &discarded {
            info!(
                "puzzle discarded with {}/{} pieces locked",
                board.locked_count,
                board.pieces.len()
            );
        }
        discarded.is_some()
    }

    pub fn pieces(&self) -> &[Piece] {
        self.board
            .as_ref()
            .map(|board| board.pieces.as_slice())
            .unwrap_or(&[])
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().get(id)
    }

    /// Bottom to top; the dragged piece is last.
    pub fn draw_order(&self) -> &[PieceId] {
        self.board
            .as_ref()
            .map(|board| board.draw_order.as_slice())
            .unwrap_or(&[])
    }

    pub fn dragging(&self) -> Option<PieceId> {
        self.board.as_ref().and_then(|board| board.dragging)
    }

    pub fn locked_count(&self) -> usize {
        self.board
            .as_ref()
            .map(|board| board.locked_count)
            .unwrap_or(0)
    }

    pub fn total_pieces(&self) -> usize {
        self.pieces().len()
    }

    pub fn image(&self) -> Option<ImageDescriptor> {
        self.board.as_ref().map(|board| board.image)
    }

    pub fn dimensions(&self) -> Option<GridDimensions> {
        self.board.as_ref().map(|board| board.dims)
    }

    pub fn geometry(&self) -> Option<PieceGeometry> {
        self.board.as_ref().map(|board| board.geometry)
    }

    pub fn snap_threshold(&self) -> Option<f32> {
        self.geometry().map(snap_distance)
    }

    pub fn border_outline(&self) -> Option<[(f32, f32); 4]> {
        self.board
            .as_ref()
            .map(|board| border_outline(board.dims, board.geometry))
    }
}
