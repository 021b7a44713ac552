//! Formatting utilities for terminal output

/// Format a scrambled word as spaced capital letters, e.g. `"L A M I N A"`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    let filled = (u64::from(value.min(max)) * width as u64 / u64::from(max)) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many rounds of the session have been reached
#[must_use]
pub fn round_bar(round: u32, max_rounds: u32, width: usize) -> String {
    create_progress_bar(round, max_rounds, width)
}

/// Short verdict on a final score
#[must_use]
pub fn score_verdict(score: u32, max_score: u32) -> &'static str {
    if max_score == 0 {
        return "Game complete";
    }
    match (u64::from(score) * 100 / u64::from(max_score)).min(100) {
        100 => "🏆 Perfect game!",
        80..=99 => "⭐ Excellent!",
        50..=79 => "👍 Well played!",
        1..=49 => "✨ Keep practicing!",
        _ => "😅 Better luck next time!",
    }
}
