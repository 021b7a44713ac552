//! Game session management
//!
//! The engine that runs a session, its configuration and the observable state
//! stream handed to the presentation layer.

mod config;
mod engine;
mod observer;

pub use config::GameConfig;
pub use engine::{GameEngine, GuessOutcome, MAX_PICK_ATTEMPTS};
pub use observer::{StateStream, SubscriptionId};
