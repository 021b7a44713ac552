//! Word lists and game constants
//!
//! Provides the embedded default word list and the default session settings.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

/// Default number of rounds in a session
pub const MAX_ROUNDS: u32 = 10;

/// Default points awarded for each correctly unscrambled word
pub const SCORE_INCREASE: u32 = 20;
