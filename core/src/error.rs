#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("difficulty {0} outside {min}..={max}", min = crate::grid::DIFFICULTY_MIN, max = crate::grid::DIFFICULTY_MAX)]
    Difficulty(u32),
    #[error("invalid image dimensions {width}x{height}")]
    ImageSize { width: u32, height: u32 },
    #[error("{cols}x{rows} grid exceeds {max} pieces", max = crate::grid::MAX_PIECES)]
    GridTooLarge { cols: u64, rows: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("unknown level {0}")]
    UnknownLevel(usize),
    #[error("level {0} is locked")]
    LevelLocked(usize),
    #[error("a puzzle session is already in progress")]
    SessionActive,
}
