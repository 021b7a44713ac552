//! Terminal output formatting
//!
//! Display utilities for the line-mode game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_final_score, print_round, print_welcome};
