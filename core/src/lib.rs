pub mod action;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod game;
pub mod grid;
pub mod host;
pub mod piece;
pub mod progression;
pub mod rules;
pub mod session;

pub use action::InputBatch;
pub use catalog::{LevelCatalog, LevelEntry, BUILTIN_LEVELS, DEFAULT_LEVEL_SLUG};
pub use controller::{LevelSlot, SessionController};
pub use error::{ConfigError, PuzzleError};
pub use game::{PlayArea, SNAP_DISTANCE_RATIO};
pub use grid::{
    compute_dimensions, compute_geometry, target_position, uv_rect, GridDimensions,
    ImageDescriptor, PieceGeometry, UvRect, DIFFICULTY_DEFAULT, DIFFICULTY_MAX, DIFFICULTY_MIN,
    MAX_PIECES,
};
pub use host::SessionHost;
pub use piece::{Piece, PieceId};
pub use progression::ProgressionGate;
pub use rules::GameRules;
pub use session::{DropOutcome, PuzzleSession, SessionPhase};
