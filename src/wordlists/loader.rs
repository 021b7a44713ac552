//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from text already in memory.

use crate::core::{GameError, WordList};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error returned when a word list file cannot be turned into a `WordList`
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Invalid(GameError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Could not read word list: {e}"),
            Self::Invalid(e) => write!(f, "Invalid word list: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GameError> for LoadError {
    fn from(e: GameError) -> Self {
        Self::Invalid(e)
    }
}

/// Load a word list from a file
///
/// One word per line. Lines are trimmed and lowercased; blank lines and lines
/// starting with `#` are ignored.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Invalid`
/// if the remaining words do not form a valid `WordList`.
///
/// # Examples
/// ```no_run
/// use unscramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content).inspect_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "rejected word list");
    })?;

    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse word list text using the same rules as [`load_from_file`]
///
/// # Errors
///
/// Returns `GameError` if the parsed words do not form a valid `WordList`.
///
/// # Examples
/// ```
/// use unscramble::wordlists::loader::parse_words;
///
/// let words = parse_words("# fruit\nLemon\n\n  melon \n").unwrap();
/// assert_eq!(words.words(), &["lemon", "melon"]);
/// ```
pub fn parse_words(content: &str) -> Result<WordList, GameError> {
    WordList::new(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase),
    )
}
