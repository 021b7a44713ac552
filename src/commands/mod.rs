//! Command implementations

pub mod simple;

pub use simple::{Transition, TransitionTracker, classify, run_simple};
