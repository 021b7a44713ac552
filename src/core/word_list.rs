//! Validated word list

use super::GameError;
use super::scramble::has_scrambled_arrangement;
use rustc_hash::FxHashSet;

/// An immutable, ordered list of distinct lowercase words
///
/// Every word is guaranteed to have at least one arrangement different from
/// itself, so the engine can always present a scrambled form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list, validating every entry
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - The list is empty
    /// - A word is empty or contains anything but lowercase letters
    /// - A word appears twice
    /// - A word cannot be scrambled (e.g. `"a"` or `"zzz"`)
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::{GameError, WordList};
    ///
    /// let words = WordList::new(["animal", "auto", "anillo"]).unwrap();
    /// assert_eq!(words.len(), 3);
    ///
    /// assert_eq!(WordList::new(Vec::<String>::new()), Err(GameError::EmptyWordList));
    /// assert!(WordList::new(["auto", "auto"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for word in &words {
            if word.is_empty() || !word.chars().all(|c| c.is_alphabetic() && c.is_lowercase()) {
                return Err(GameError::InvalidWord(word.clone()));
            }
            if !seen.insert(word.as_str()) {
                return Err(GameError::DuplicateWord(word.clone()));
            }
            if !has_scrambled_arrangement(word) {
                return Err(GameError::UnscramblableWord(word.clone()));
            }
        }

        Ok(Self { words })
    }

    /// The word list embedded in the binary
    ///
    /// # Errors
    /// Returns `GameError` only if the embedded list itself is malformed.
    pub fn builtin() -> Result<Self, GameError> {
        Self::new(crate::wordlists::WORDS.iter().copied())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a constructed list, provided for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Build a list without validation, for exercising invalid-word paths
    #[cfg(test)]
    pub(crate) fn unchecked(words: Vec<String>) -> Self {
        Self { words }
    }
}
