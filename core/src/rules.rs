use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PuzzleError};
use crate::grid::{DIFFICULTY_DEFAULT, DIFFICULTY_MAX, DIFFICULTY_MIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub difficulty: u32,
    pub seed: Option<u64>,
}

impl GameRules {
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if !(DIFFICULTY_MIN..=DIFFICULTY_MAX).contains(&self.difficulty) {
            return Err(ConfigError::Difficulty(self.difficulty).into());
        }
        Ok(())
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            difficulty: DIFFICULTY_DEFAULT,
            seed: None,
        }
    }
}
