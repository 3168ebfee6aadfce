use crate::game::PlayArea;
use crate::piece::PieceId;
use crate::session::PuzzleSession;

/// Rendering, audio and UI side of a running game.
pub trait SessionHost {
    fn visible_play_area(&self) -> PlayArea;

    fn hit_test(&self, session: &PuzzleSession, point: (f32, f32)) -> Option<PieceId> {
        session.pick_piece_at(point)
    }

    fn play_snap_sound(&mut self) {}

    fn show_completion(&mut self) {}

    fn hide_completion(&mut self) {}

    fn show_level_select(&mut self) {}

    fn hide_level_select(&mut self) {}
}
