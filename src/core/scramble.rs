//! Letter scrambling
//!
//! Produces a uniformly random permutation of a word's characters that is
//! guaranteed to differ from the word itself.

use super::GameError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of fresh permutations drawn before falling back to a fixed swap
///
/// A word with two distinct letters shuffles back to itself with probability
/// at most 1/2, so reaching this bound is vanishingly rare.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Whether `word` has at least one arrangement other than itself
///
/// True exactly when the word contains two different characters.
#[must_use]
pub fn has_scrambled_arrangement(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|first| chars.any(|c| c != first))
}

/// Scramble the letters of `word`
///
/// The result is always an anagram of `word` and never equal to it.
///
/// # Errors
/// Returns `GameError::UnscramblableWord` if the word has a single arrangement,
/// i.e. it is empty, one character long or made of one repeated character.
///
/// # Examples
/// ```
/// use unscramble::core::shuffle_word;
///
/// let scrambled = shuffle_word("animal", &mut rand::rng()).unwrap();
/// assert_ne!(scrambled, "animal");
///
/// let mut letters: Vec<char> = scrambled.chars().collect();
/// letters.sort_unstable();
/// assert_eq!(letters, ['a', 'a', 'i', 'l', 'm', 'n']);
///
/// assert!(shuffle_word("aaa", &mut rand::rng()).is_err());
/// ```
pub fn shuffle_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<String, GameError> {
    if !has_scrambled_arrangement(word) {
        return Err(GameError::UnscramblableWord(word.to_string()));
    }

    let original: Vec<char> = word.chars().collect();
    let mut letters = original.clone();

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        letters.shuffle(rng);
        if letters != original {
            return Ok(letters.into_iter().collect());
        }
    }

    // Swap the first letter with the first one that differs from it
    letters.clone_from(&original);
    if let Some(pos) = letters.iter().position(|&c| c != letters[0]) {
        letters.swap(0, pos);
    }
    Ok(letters.into_iter().collect())
}
