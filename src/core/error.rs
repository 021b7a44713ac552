//! Error type for word list and game configuration failures

use std::fmt;

/// Errors raised when a word list or game configuration cannot support a session
///
/// Every variant is a precondition violation. A wrong guess is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word list contains no words
    EmptyWordList,
    /// The word list has fewer words than rounds to play
    WordListTooSmall { available: usize, required: u32 },
    /// The same word appears twice in the list
    DuplicateWord(String),
    /// A word is empty or contains characters other than lowercase letters
    InvalidWord(String),
    /// A word has only one arrangement of its letters, so it cannot be scrambled
    UnscramblableWord(String),
    /// A configuration value is out of range
    InvalidConfig(&'static str),
    /// Every word in the list has already been used this session
    WordListExhausted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::WordListTooSmall {
                available,
                required,
            } => write!(
                f,
                "Word list has {available} words but {required} rounds need distinct words"
            ),
            Self::DuplicateWord(word) => write!(f, "Word '{word}' appears more than once"),
            Self::InvalidWord(word) => {
                write!(f, "Word '{word}' must contain only lowercase letters")
            }
            Self::UnscramblableWord(word) => {
                write!(f, "Word '{word}' has no scrambled arrangement")
            }
            Self::InvalidConfig(reason) => write!(f, "Invalid game configuration: {reason}"),
            Self::WordListExhausted => write!(f, "All words have already been used"),
        }
    }
}

impl std::error::Error for GameError {}
