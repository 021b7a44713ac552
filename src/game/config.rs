//! Session configuration

use crate::core::{GameError, WordList};
use crate::wordlists::{MAX_ROUNDS, SCORE_INCREASE};

/// Settings for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rounds before the game ends
    pub max_rounds: u32,
    /// Points awarded for each correct guess
    pub score_increase: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_rounds: u32, score_increase: u32) -> Self {
        Self {
            max_rounds,
            score_increase,
        }
    }

    /// Check that a session with these settings can be played on `words`
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` for a zero setting, or
    /// `GameError::WordListTooSmall` when there are fewer words than rounds.
    pub fn validate(&self, words: &WordList) -> Result<(), GameError> {
        if self.max_rounds == 0 {
            return Err(GameError::InvalidConfig("max rounds must be at least 1"));
        }
        if self.score_increase == 0 {
            return Err(GameError::InvalidConfig("score increase must be at least 1"));
        }
        if words.len() < self.max_rounds as usize {
            return Err(GameError::WordListTooSmall {
                available: words.len(),
                required: self.max_rounds,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_ROUNDS, SCORE_INCREASE)
    }
}
