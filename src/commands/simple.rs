//! Simple interactive CLI mode
//!
//! Text-based game without TUI. Round banners and feedback are printed by an
//! observer on the engine's state stream; the loop below only reads input.

use crate::core::GameState;
use crate::game::{GameConfig, GameEngine};
use crate::output::{print_final_score, print_round, print_welcome};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

/// What changed between two consecutive snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A session started (first snapshot or a reset)
    NewSession,
    /// The previous word was guessed and a new round began
    Correct,
    /// The previous word was skipped and a new round began
    Skipped,
    /// A guess was checked and did not match
    WrongGuess,
    /// The last round finished; `scored` tells whether it ended on a correct guess
    GameOver { scored: bool },
    /// Nothing visible changed
    Unchanged,
}

/// Classify the change from `prev` to `next`
///
/// A reset to round 1 that draws the same scramble is indistinguishable from
/// no change here; [`TransitionTracker`] handles resets explicitly.
#[must_use]
pub fn classify(prev: Option<&GameState>, next: &GameState) -> Transition {
    let Some(prev) = prev else {
        return Transition::NewSession;
    };

    if next.is_game_over && !prev.is_game_over {
        return Transition::GameOver {
            scored: next.score > prev.score,
        };
    }

    let restarted = (prev.is_game_over && !next.is_game_over)
        || next.current_word_count < prev.current_word_count;
    if restarted {
        return Transition::NewSession;
    }

    if next.current_word_count > prev.current_word_count {
        if next.score > prev.score {
            Transition::Correct
        } else {
            Transition::Skipped
        }
    } else if next.is_guessed_word_wrong {
        Transition::WrongGuess
    } else {
        Transition::Unchanged
    }
}

/// Turns successive snapshots into transitions
///
/// The input loop raises the reset flag right before `reset_game`, so the next
/// snapshot is always reported as a new session.
#[derive(Debug, Default)]
pub struct TransitionTracker {
    last: Option<GameState>,
    reset_pending: Rc<Cell<bool>>,
}

impl TransitionTracker {
    /// Shared flag to set before resetting the engine
    #[must_use]
    pub fn reset_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.reset_pending)
    }

    pub fn observe(&mut self, next: &GameState) -> Transition {
        let transition = if self.reset_pending.replace(false) {
            Transition::NewSession
        } else {
            classify(self.last.as_ref(), next)
        };
        self.last = Some(next.clone());
        transition
    }
}

fn render_transition(transition: Transition, state: &GameState, config: &GameConfig) {
    match transition {
        Transition::NewSession => {
            println!("\n🔄 New game started!\n");
            print_round(state, config);
        }
        Transition::Correct => {
            println!("{}\n", "✅ Correct!".green().bold());
            print_round(state, config);
        }
        Transition::Skipped => {
            println!("{}\n", "⏭  Skipped.".yellow());
            print_round(state, config);
        }
        Transition::WrongGuess => {
            println!("{}", "❌ Wrong guess, try again!".red().bold());
        }
        Transition::GameOver { scored } => {
            if scored {
                println!("{}", "✅ Correct!".green().bold());
            }
            print_final_score(state, config);
        }
        Transition::Unchanged => {}
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the engine
/// cannot draw a new word.
pub fn run_simple<R: Rng>(engine: &mut GameEngine<R>) -> Result<()> {
    let config = *engine.config();
    print_welcome(&config);

    let mut tracker = TransitionTracker::default();
    let reset_flag = tracker.reset_flag();
    let subscription = engine.subscribe(move |state| {
        render_transition(tracker.observe(state), state, &config);
    });

    let result = play_loop(engine, &reset_flag);
    engine.unsubscribe(subscription);
    result
}

fn restart<R: Rng>(engine: &mut GameEngine<R>, reset_flag: &Cell<bool>) -> Result<()> {
    reset_flag.set(true);
    let result = engine.reset_game();
    reset_flag.set(false);
    Ok(result?)
}

fn play_loop<R: Rng>(engine: &mut GameEngine<R>, reset_flag: &Cell<bool>) -> Result<()> {
    loop {
        if engine.state().is_game_over {
            match get_user_input("Play again? (yes/no)")?
                .map(|s| s.to_lowercase())
                .as_deref()
            {
                Some("yes" | "y") => {
                    restart(engine, reset_flag)?;
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let Some(input) = get_user_input("Your guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.as_str() {
            ":quit" | ":q" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":skip" | ":s" => engine.skip_word()?,
            ":new" | ":n" => restart(engine, reset_flag)?,
            "" => {}
            guess => {
                engine.set_user_guess(guess);
                engine.check_user_guess()?;
            }
        }
    }
}

/// Get user input with a prompt, or `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
