//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, InputMode, MAX_GUESS_LEN, Message, MessageStyle, Statistics, run_tui};
pub use rendering::ui;
