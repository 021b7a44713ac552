//! Observable game state snapshot

/// Snapshot of everything the presentation layer may see
///
/// A `GameState` is never edited in place by the engine. Each transition builds
/// a new value and replaces the previous one, so observers always receive a
/// consistent snapshot. The unscrambled word is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Letters of the secret word in scrambled order
    pub current_scrambled_word: String,
    /// 1-based index of the round in progress
    pub current_word_count: u32,
    pub score: u32,
    /// Set after a guess that did not match, cleared on the next correct guess or skip
    pub is_guessed_word_wrong: bool,
    pub is_game_over: bool,
}

impl GameState {
    /// State at the start of a session showing `scrambled`
    #[must_use]
    pub fn first_round(scrambled: impl Into<String>) -> Self {
        Self {
            current_scrambled_word: scrambled.into(),
            ..Self::default()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_scrambled_word: String::new(),
            current_word_count: 1,
            score: 0,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }
}
