//! Core domain types for the unscramble game
//!
//! This module contains the pure domain types: the validated word list, the
//! immutable state snapshot, the scrambling algorithm and the error type.
//! Nothing here performs I/O.

mod error;
pub mod scramble;
mod state;
mod word_list;

pub use error::GameError;
pub use scramble::shuffle_word;
pub use state::GameState;
pub use word_list::WordList;
