//! Display functions for the line-mode game

use super::formatters::{round_bar, score_verdict, spaced_letters};
use crate::core::GameState;
use crate::game::GameConfig;
use colored::Colorize;

/// Print the banner and instructions shown before the first round
pub fn print_welcome(config: &GameConfig) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Unscramble - Word Game                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Unscramble {} words. Each correct answer is worth {} points.",
        config.max_rounds.to_string().bright_cyan().bold(),
        config.score_increase.to_string().bright_cyan().bold()
    );
    println!("Commands: ':skip' to skip a word, ':new' to restart, ':quit' to exit\n");
}

/// Print the scrambled word for the round in progress
pub fn print_round(state: &GameState, config: &GameConfig) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Round {}/{} [{}]   Score: {}",
        state.current_word_count,
        config.max_rounds,
        round_bar(state.current_word_count, config.max_rounds, 20),
        state.score.to_string().bright_green().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "\n   {}\n",
        spaced_letters(&state.current_scrambled_word)
            .bright_yellow()
            .bold()
    );
}

/// Print the final score summary
pub fn print_final_score(state: &GameState, config: &GameConfig) {
    let max_score = config.max_rounds.saturating_mul(config.score_increase);

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "              🎉  G A M E   O V E R  🎉".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Final score: {} / {}",
        state.score.to_string().bright_cyan().bold(),
        max_score
    );
    println!("  {}", score_verdict(state.score, max_score).bright_yellow());
    println!("\n{}", "═".repeat(60).bright_cyan());
}
