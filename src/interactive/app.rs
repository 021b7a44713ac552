//! TUI application state and logic

use crate::core::GameError;
use crate::game::{GameEngine, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest guess the input box accepts
pub const MAX_GUESS_LEN: usize = 32;

/// Application state
pub struct App<R: Rng = ThreadRng> {
    pub engine: GameEngine<R>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals across every game played in this process
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
    pub words_guessed: usize,
    pub words_skipped: usize,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: GameEngine<R>) -> Self {
        let config = *engine.config();

        Self {
            engine,
            messages: vec![
                Message {
                    text: format!(
                        "Welcome! Unscramble {} words, {} points each.",
                        config.max_rounds, config.score_increase
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your guess and press Enter. TAB skips the word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.engine.state().is_game_over {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        }
    }

    pub fn push_char(&mut self, c: char) {
        let guess = self.engine.user_guess();
        if guess.chars().count() < MAX_GUESS_LEN {
            let mut guess = guess.to_string();
            guess.push(c);
            self.engine.set_user_guess(guess);
        }
    }

    pub fn pop_char(&mut self) {
        let mut guess = self.engine.user_guess().to_string();
        if guess.pop().is_some() {
            self.engine.set_user_guess(guess);
        }
    }

    /// Check the typed guess
    ///
    /// # Errors
    /// Returns `GameError` if the engine cannot draw the next word.
    pub fn submit_guess(&mut self) -> Result<(), GameError> {
        if self.engine.user_guess().trim().is_empty() {
            self.add_message("Type a word first!", MessageStyle::Error);
            return Ok(());
        }

        let guess = self.engine.user_guess().trim().to_uppercase();
        match self.engine.check_user_guess()? {
            GuessOutcome::Correct => {
                self.stats.words_guessed += 1;
                self.add_message(
                    &format!(
                        "✅ {guess} is right! +{} points",
                        self.engine.config().score_increase
                    ),
                    MessageStyle::Success,
                );
                self.finish_if_over();
            }
            GuessOutcome::Incorrect => {
                self.add_message(
                    &format!("❌ {guess} is not the word, try again"),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::GameOver => {}
        }
        Ok(())
    }

    /// Skip the current word
    ///
    /// # Errors
    /// Returns `GameError` if the engine cannot draw the next word.
    pub fn skip_word(&mut self) -> Result<(), GameError> {
        if self.input_mode() == InputMode::GameOver {
            return Ok(());
        }

        self.engine.skip_word()?;
        self.stats.words_skipped += 1;
        self.add_message("⏭  Word skipped", MessageStyle::Info);
        self.finish_if_over();
        Ok(())
    }

    /// Start a new game
    ///
    /// # Errors
    /// Returns `GameError` if the engine cannot draw the first word.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.engine.reset_game()?;
        self.add_message("🔄 New game started!", MessageStyle::Info);
        Ok(())
    }

    fn finish_if_over(&mut self) {
        if !self.engine.state().is_game_over {
            return;
        }

        let score = self.engine.state().score;
        self.stats.games_played += 1;
        let new_best = score > self.stats.best_score;
        self.stats.best_score = self.stats.best_score.max(score);

        let celebration = if new_best {
            format!("🎉 Game over! New best score: {score}")
        } else {
            format!("🎊 Game over! Final score: {score}")
        };
        self.add_message(&celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode() {
                    InputMode::GameOver => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') | KeyCode::Enter => {
                            app.new_game()?;
                        }
                        _ => {
                            // Game is over, ignore other keys
                        }
                    },
                    InputMode::Guessing => match key.code {
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Tab => {
                            app.skip_word()?;
                        }
                        KeyCode::Enter => {
                            app.submit_guess()?;
                        }
                        KeyCode::Backspace => {
                            app.pop_char();
                        }
                        KeyCode::Char(c) if c.is_alphabetic() => {
                            app.push_char(c);
                        }
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::game::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: [&str; 3] = ["animal", "auto", "anillo"];

    fn test_app(seed: u64) -> App<StdRng> {
        let words = WordList::new(WORDS).unwrap();
        let engine =
            GameEngine::with_rng(words, GameConfig::new(3, 20), StdRng::seed_from_u64(seed))
                .unwrap();
        App::new(engine)
    }

    fn type_word(app: &mut App<StdRng>, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
    }

    /// Try every listed word until the round advances
    fn solve_current(app: &mut App<StdRng>) {
        let score = app.engine.state().score;
        for word in WORDS {
            type_word(app, word);
            app.submit_guess().unwrap();
            if app.engine.state().score > score {
                return;
            }
            while !app.engine.user_guess().is_empty() {
                app.pop_char();
            }
        }
        panic!("no listed word matched");
    }

    #[test]
    fn typing_edits_engine_guess() {
        let mut app = test_app(1);
        type_word(&mut app, "auto");
        assert_eq!(app.engine.user_guess(), "auto");

        app.pop_char();
        assert_eq!(app.engine.user_guess(), "aut");
    }

    #[test]
    fn guess_length_is_capped() {
        let mut app = test_app(2);
        type_word(&mut app, &"a".repeat(MAX_GUESS_LEN + 10));
        assert_eq!(app.engine.user_guess().len(), MAX_GUESS_LEN);
    }

    #[test]
    fn empty_submit_is_rejected_without_checking() {
        let mut app = test_app(3);
        app.submit_guess().unwrap();

        assert!(!app.engine.state().is_guessed_word_wrong);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn wrong_guess_reports_error() {
        let mut app = test_app(4);
        type_word(&mut app, "zebra");
        app.submit_guess().unwrap();

        assert!(app.engine.state().is_guessed_word_wrong);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("ZEBRA"));
    }

    #[test]
    fn correct_guess_counts() {
        let mut app = test_app(5);
        solve_current(&mut app);

        assert_eq!(app.engine.state().score, 20);
        assert_eq!(app.stats.words_guessed, 1);
        assert_eq!(app.input_mode(), InputMode::Guessing);
    }

    #[test]
    fn finishing_game_records_stats() {
        let mut app = test_app(6);
        solve_current(&mut app);
        app.skip_word().unwrap();
        solve_current(&mut app);

        assert_eq!(app.input_mode(), InputMode::GameOver);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.best_score, 40);
        assert_eq!(app.stats.words_skipped, 1);

        // Skipping after the end changes nothing
        app.skip_word().unwrap();
        assert_eq!(app.stats.words_skipped, 1);
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn new_game_keeps_stats() {
        let mut app = test_app(7);
        for _ in 0..3 {
            app.skip_word().unwrap();
        }
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.best_score, 0);

        app.new_game().unwrap();

        assert_eq!(app.input_mode(), InputMode::Guessing);
        assert_eq!(app.engine.state().current_word_count, 1);
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = test_app(8);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
