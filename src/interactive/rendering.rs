//! TUI rendering with ratatui
//!
//! Layout and widgets for the unscramble game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{score_verdict, spaced_letters};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word panel
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[1]);

    render_word_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 UNSCRAMBLE - Word Game")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_word_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let state = app.engine.state();
    let config = app.engine.config();

    let content = if state.is_game_over {
        let max_score = config.max_rounds.saturating_mul(config.score_increase);
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("You scored {} of {max_score}", state.score)),
            Line::from(score_verdict(state.score, max_score)),
        ]
    } else {
        let word_style = if state.is_guessed_word_wrong {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                spaced_letters(&state.current_scrambled_word),
                word_style,
            )),
            Line::from(""),
            Line::from(format!(
                "{} letters",
                state.current_scrambled_word.chars().count()
            )),
        ];
        if state.is_guessed_word_wrong {
            lines.push(Line::from(Span::styled(
                "Wrong guess!",
                Style::default().fg(Color::Red),
            )));
        }
        lines
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Round {}/{} ",
                    state.current_word_count, config.max_rounds
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Round progress gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_round_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_round_progress<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let state = app.engine.state();
    let max_rounds = app.engine.config().max_rounds;
    let completed = if state.is_game_over {
        max_rounds
    } else {
        state.current_word_count - 1
    };
    let progress_pct = (u64::from(completed) * 100 / u64::from(max_rounds.max(1))) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct.min(100))
        .label(format!(
            "{completed}/{max_rounds} rounds | score {}",
            state.score
        ));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, content, color) = match app.input_mode() {
        InputMode::GameOver => (
            " 🎉 GAME OVER 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter your guess | Enter to check, TAB to skip ",
            app.engine.user_guess(),
            if app.engine.state().is_guessed_word_wrong {
                Color::Red
            } else {
                Color::Yellow
            },
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let score_text = format!("Score: {}", app.engine.state().score);
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let stats_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!(
        "Guessed: {} | Skipped: {}",
        app.stats.words_guessed, app.stats.words_skipped
    );
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help_text = match app.input_mode() {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Check | TAB: Skip",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
