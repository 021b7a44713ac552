//! Unscramble - CLI
//!
//! Word unscramble game with TUI and line-mode front-ends.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use unscramble::{
    commands::run_simple,
    core::WordList,
    game::{GameConfig, GameEngine},
    wordlists::{MAX_ROUNDS, SCORE_INCREASE, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Unscramble the letters to find the hidden word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of words per game
    #[arg(short, long, global = true, default_value_t = MAX_ROUNDS)]
    rounds: u32,

    /// Points awarded for each correct answer
    #[arg(long, global = true, default_value_t = SCORE_INCREASE)]
    score_increase: u32,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Log engine activity to stderr (line mode only)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    match wordlist {
        "builtin" => WordList::builtin().context("embedded word list is invalid"),
        path => load_from_file(path).with_context(|| format!("failed to load word list '{path}'")),
    }
}

fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so logs only go out in line mode
    if matches!(command, Commands::Simple) {
        init_logging(cli.verbose);
    }

    let words = load_wordlist(&cli.wordlist)?;
    let config = GameConfig::new(cli.rounds, cli.score_increase);
    let engine = GameEngine::new(words, config).context("cannot start a game")?;

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple => run_simple_command(engine),
    }
}

fn run_simple_command(mut engine: GameEngine) -> Result<()> {
    run_simple(&mut engine)
}

fn run_play_command(engine: GameEngine) -> Result<()> {
    use unscramble::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
