//! Unscramble
//!
//! State engine for a single-player word unscramble game: it draws unused
//! words from a list, scrambles their letters, checks guesses, keeps score and
//! publishes immutable state snapshots to whatever presentation layer observes it.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::core::WordList;
//! use unscramble::game::{GameConfig, GameEngine};
//!
//! let words = WordList::builtin().unwrap();
//! let mut engine = GameEngine::new(words, GameConfig::default()).unwrap();
//!
//! engine.subscribe(|state| {
//!     println!("Round {}: {}", state.current_word_count, state.current_scrambled_word);
//! });
//!
//! engine.set_user_guess("guess");
//! engine.check_user_guess().unwrap();
//! engine.skip_word().unwrap();
//! ```

// Core domain types
pub mod core;

// Session engine and observable state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
