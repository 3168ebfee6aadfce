use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PuzzleError};

pub const DIFFICULTY_MIN: u32 = 2;
pub const DIFFICULTY_MAX: u32 = 10;
pub const DIFFICULTY_DEFAULT: u32 = 10;
/// Upper bound on pieces per board; extreme aspect ratios past it are rejected.
pub const MAX_PIECES: u64 = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub width: u32,
    pub height: u32,
}

impl ImageDescriptor {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDimensions {
    pub cols: u32,
    pub rows: u32,
}

impl GridDimensions {
    pub fn total(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Row-major slot of a piece index.
    pub fn col_row(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((index % cols) as u32, (index / cols) as u32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceGeometry {
    pub piece_width: f32,
    pub piece_height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRect {
    pub corners: [(f32, f32); 4],
}

pub fn validate_config(image: ImageDescriptor, difficulty: u32) -> Result<(), PuzzleError> {
    if image.width == 0 || image.height == 0 {
        return Err(ConfigError::ImageSize {
            width: image.width,
            height: image.height,
        }
        .into());
    }
    if !(DIFFICULTY_MIN..=DIFFICULTY_MAX).contains(&difficulty) {
        return Err(ConfigError::Difficulty(difficulty).into());
    }
    Ok(())
}

/// The shorter image side gets exactly `difficulty` divisions. Square images
/// take the landscape branch.
pub fn compute_dimensions(
    image: ImageDescriptor,
    difficulty: u32,
) -> Result<GridDimensions, PuzzleError> {
    validate_config(image, difficulty)?;
    let width = u64::from(image.width);
    let height = u64::from(image.height);
    let short = u64::from(difficulty);
    let (cols, rows) = if width < height {
        (short, short * height / width)
    } else {
        (short * width / height, short)
    };
    let too_large = ConfigError::GridTooLarge { cols, rows };
    if cols.saturating_mul(rows) > MAX_PIECES {
        return Err(too_large.into());
    }
    match (u32::try_from(cols), u32::try_from(rows)) {
        (Ok(cols), Ok(rows)) => Ok(GridDimensions { cols, rows }),
        _ => Err(too_large.into()),
    }
}

pub fn compute_geometry(image: ImageDescriptor, dims: GridDimensions) -> PieceGeometry {
    let piece_height = 1.0 / dims.rows as f32;
    let piece_width = image.aspect() / dims.cols as f32;
    PieceGeometry {
        piece_width,
        piece_height,
    }
}

pub fn target_position(
    col: u32,
    row: u32,
    dims: GridDimensions,
    geometry: PieceGeometry,
) -> (f32, f32) {
    let PieceGeometry {
        piece_width: width,
        piece_height: height,
    } = geometry;
    (
        (-width * dims.cols as f32 / 2.0) + (width * col as f32) + (width / 2.0),
        (-height * dims.rows as f32 / 2.0) + (height * row as f32) + (height / 2.0),
    )
}

pub fn uv_rect(col: u32, row: u32, dims: GridDimensions) -> UvRect {
    let step_x = 1.0 / dims.cols as f32;
    let step_y = 1.0 / dims.rows as f32;
    let (col, row) = (col as f32, row as f32);
    UvRect {
        corners: [
            (step_x * col, step_y * row),
            (step_x * (col + 1.0), step_y * row),
            (step_x * col, step_y * (row + 1.0)),
            (step_x * (col + 1.0), step_y * (row + 1.0)),
        ],
    }
}

/// Corners of the assembled puzzle, clockwise from top-left.
pub fn border_outline(dims: GridDimensions, geometry: PieceGeometry) -> [(f32, f32); 4] {
    let half_width = geometry.piece_width * dims.cols as f32 / 2.0;
    let half_height = geometry.piece_height * dims.rows as f32 / 2.0;
    [
        (-half_width, half_height),
        (half_width, half_height),
        (half_width, -half_height),
        (-half_width, -half_height),
    ]
}
