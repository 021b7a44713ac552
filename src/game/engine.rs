//! Game engine
//!
//! Runs one session: picks unused words, scrambles them, checks guesses,
//! keeps score and publishes a new `GameState` after every transition.

use super::{GameConfig, StateStream, SubscriptionId};
use crate::core::{GameError, GameState, WordList, shuffle_word};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Random draws tried before picking directly among the unused words
pub const MAX_PICK_ATTEMPTS: usize = 32;

/// Result of checking the current guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched; score was awarded and the round advanced
    Correct,
    /// The guess did not match; nothing but the wrong-guess flag changed
    Incorrect,
    /// The session is over, so the guess was not checked
    GameOver,
}

/// State machine for a single unscramble session
///
/// The engine is the only writer of its [`StateStream`]. The unscrambled word
/// for the active round never leaves the engine.
///
/// # Examples
/// ```
/// use unscramble::core::WordList;
/// use unscramble::game::{GameConfig, GameEngine, GuessOutcome};
///
/// let words = WordList::new(["animal", "auto", "anillo"]).unwrap();
/// let mut engine = GameEngine::new(words, GameConfig::new(3, 20)).unwrap();
/// assert_eq!(engine.state().current_word_count, 1);
///
/// engine.set_user_guess("not it");
/// assert_eq!(engine.check_user_guess().unwrap(), GuessOutcome::Incorrect);
/// assert!(engine.state().is_guessed_word_wrong);
///
/// engine.skip_word().unwrap();
/// assert_eq!(engine.state().current_word_count, 2);
/// assert_eq!(engine.state().score, 0);
/// ```
pub struct GameEngine<R: Rng = ThreadRng> {
    words: WordList,
    config: GameConfig,
    rng: R,
    used_words: FxHashSet<String>,
    current_word: String,
    user_guess: String,
    stream: StateStream,
}

impl GameEngine<ThreadRng> {
    /// Create an engine using the thread-local random generator and start a session
    ///
    /// # Errors
    /// Returns `GameError` if `config` cannot be played on `words`.
    pub fn new(words: WordList, config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(words, config, rand::rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing randomness from `rng` and start a session
    ///
    /// # Errors
    /// Returns `GameError` if `config` cannot be played on `words`.
    pub fn with_rng(words: WordList, config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate(&words)?;

        let mut engine = Self {
            words,
            config,
            rng,
            used_words: FxHashSet::default(),
            current_word: String::new(),
            user_guess: String::new(),
            stream: StateStream::new(GameState::default()),
        };
        engine.reset_game()?;
        Ok(engine)
    }

    /// Start a new session from round one
    ///
    /// # Errors
    /// Returns `GameError` if no word can be drawn.
    pub fn reset_game(&mut self) -> Result<(), GameError> {
        self.used_words.clear();
        self.user_guess.clear();

        let scrambled = self.pick_random_word_and_shuffle()?;
        self.stream.publish(GameState::first_round(scrambled));

        debug!(max_rounds = self.config.max_rounds, "session started");
        Ok(())
    }

    /// Store the player's provisional input
    pub fn set_user_guess(&mut self, guess: impl Into<String>) {
        self.user_guess = guess.into();
    }

    /// Check the stored guess against the current word
    ///
    /// Comparison ignores case and surrounding whitespace. A wrong guess keeps
    /// the guess text so the player can edit it.
    ///
    /// # Errors
    /// Returns `GameError` if advancing to the next round fails to draw a word.
    pub fn check_user_guess(&mut self) -> Result<GuessOutcome, GameError> {
        if self.stream.value().is_game_over {
            return Ok(GuessOutcome::GameOver);
        }

        if self.user_guess.trim().to_lowercase() == self.current_word {
            let updated_score = self
                .stream
                .value()
                .score
                .saturating_add(self.config.score_increase);
            self.update_game_state(updated_score)?;
            self.user_guess.clear();

            debug!(score = updated_score, "correct guess");
            Ok(GuessOutcome::Correct)
        } else {
            let wrong = GameState {
                is_guessed_word_wrong: true,
                ..self.stream.value().clone()
            };
            self.stream.publish(wrong);

            debug!(round = self.stream.value().current_word_count, "wrong guess");
            Ok(GuessOutcome::Incorrect)
        }
    }

    /// Give up on the current word without scoring and move to the next round
    ///
    /// Does nothing once the game is over.
    ///
    /// # Errors
    /// Returns `GameError` if the next word cannot be drawn.
    pub fn skip_word(&mut self) -> Result<(), GameError> {
        if self.stream.value().is_game_over {
            return Ok(());
        }

        let score = self.stream.value().score;
        self.update_game_state(score)?;
        self.user_guess.clear();

        debug!(round = self.stream.value().current_word_count, "word skipped");
        Ok(())
    }

    fn update_game_state(&mut self, updated_score: u32) -> Result<(), GameError> {
        let round = self.stream.value().current_word_count;

        let next = if round < self.config.max_rounds {
            GameState {
                current_scrambled_word: self.pick_random_word_and_shuffle()?,
                current_word_count: round + 1,
                score: updated_score,
                is_guessed_word_wrong: false,
                is_game_over: false,
            }
        } else {
            debug!(score = updated_score, "game over");
            GameState {
                score: updated_score,
                is_guessed_word_wrong: false,
                is_game_over: true,
                ..self.stream.value().clone()
            }
        };

        self.stream.publish(next);
        Ok(())
    }

    fn pick_random_word_and_shuffle(&mut self) -> Result<String, GameError> {
        let mut picked = None;
        for _ in 0..MAX_PICK_ATTEMPTS {
            let candidate = self
                .words
                .words()
                .choose(&mut self.rng)
                .ok_or(GameError::EmptyWordList)?;
            if !self.used_words.contains(candidate) {
                picked = Some(candidate.clone());
                break;
            }
        }

        let word = match picked {
            Some(word) => word,
            None => {
                // Most words are used up; draw uniformly among the rest
                let unused: Vec<&str> = self
                    .words
                    .iter()
                    .filter(|w| !self.used_words.contains(*w))
                    .collect();
                unused
                    .choose(&mut self.rng)
                    .map(|w| (*w).to_string())
                    .ok_or(GameError::WordListExhausted)?
            }
        };

        let scrambled = shuffle_word(&word, &mut self.rng)?;
        self.used_words.insert(word.clone());
        self.current_word = word;
        Ok(scrambled)
    }

    /// The latest published snapshot
    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.stream.value()
    }

    /// The guess text currently held by the engine
    #[inline]
    #[must_use]
    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    /// Number of words drawn so far this session
    #[must_use]
    pub fn used_word_count(&self) -> usize {
        self.used_words.len()
    }

    /// Observe state changes; see [`StateStream::subscribe`]
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + 'static,
    {
        self.stream.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.stream.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scenario_engine(seed: u64) -> GameEngine<StdRng> {
        let words = WordList::new(["animal", "auto", "anillo"]).unwrap();
        GameEngine::with_rng(words, GameConfig::new(3, 20), StdRng::seed_from_u64(seed)).unwrap()
    }

    fn builtin_engine(seed: u64) -> GameEngine<StdRng> {
        GameEngine::with_rng(
            WordList::builtin().unwrap(),
            GameConfig::default(),
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    fn sorted_chars(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    fn guess_correctly<R: Rng>(engine: &mut GameEngine<R>) -> GuessOutcome {
        let answer = engine.current_word.clone();
        engine.set_user_guess(answer);
        engine.check_user_guess().unwrap()
    }

    #[test]
    fn new_engine_starts_first_round() {
        let engine = scenario_engine(1);
        let state = engine.state();

        assert_eq!(state.current_word_count, 1);
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over);
        assert!(!state.is_guessed_word_wrong);
        assert!(engine.words().contains(&engine.current_word));
        assert_eq!(engine.used_word_count(), 1);
        assert_eq!(engine.user_guess(), "");
    }

    #[test]
    fn scrambled_word_is_anagram_of_current_word() {
        for seed in 0..20 {
            let engine = builtin_engine(seed);
            let scrambled = &engine.state().current_scrambled_word;
            assert_ne!(scrambled, &engine.current_word);
            assert_eq!(sorted_chars(scrambled), sorted_chars(&engine.current_word));
        }
    }

    #[test]
    fn correct_guess_scores_and_advances() {
        let mut engine = scenario_engine(2);

        assert_eq!(guess_correctly(&mut engine), GuessOutcome::Correct);

        let state = engine.state();
        assert_eq!(state.score, 20);
        assert_eq!(state.current_word_count, 2);
        assert!(!state.is_guessed_word_wrong);
        assert_eq!(engine.user_guess(), "");
    }

    #[test]
    fn guess_is_case_insensitive_and_trimmed() {
        let mut engine = scenario_engine(3);
        engine.current_word = "animal".to_string();

        engine.set_user_guess("AnImAl");
        assert_eq!(engine.check_user_guess().unwrap(), GuessOutcome::Correct);

        engine.current_word = "auto".to_string();
        engine.set_user_guess("  Auto \n");
        assert_eq!(engine.check_user_guess().unwrap(), GuessOutcome::Correct);
        assert_eq!(engine.state().score, 40);
    }

    #[test]
    fn incorrect_guess_only_sets_flag() {
        let mut engine = scenario_engine(4);
        let before = engine.state().clone();

        engine.set_user_guess("zebra");
        assert_eq!(engine.check_user_guess().unwrap(), GuessOutcome::Incorrect);

        let after = engine.state();
        assert!(after.is_guessed_word_wrong);
        assert_eq!(after.score, before.score);
        assert_eq!(after.current_word_count, before.current_word_count);
        assert_eq!(after.current_scrambled_word, before.current_scrambled_word);
        assert_eq!(engine.user_guess(), "zebra");
    }

    #[test]
    fn empty_guess_is_incorrect() {
        let mut engine = scenario_engine(5);
        assert_eq!(engine.check_user_guess().unwrap(), GuessOutcome::Incorrect);
        assert!(engine.state().is_guessed_word_wrong);
    }

    #[test]
    fn correct_guess_clears_wrong_flag() {
        let mut engine = scenario_engine(6);
        engine.set_user_guess("wrong");
        engine.check_user_guess().unwrap();
        assert!(engine.state().is_guessed_word_wrong);

        guess_correctly(&mut engine);
        assert!(!engine.state().is_guessed_word_wrong);
    }

    #[test]
    fn skip_advances_without_score() {
        let mut engine = scenario_engine(7);
        engine.set_user_guess("wrong");
        engine.check_user_guess().unwrap();

        engine.skip_word().unwrap();

        let state = engine.state();
        assert_eq!(state.current_word_count, 2);
        assert_eq!(state.score, 0);
        assert!(!state.is_guessed_word_wrong);
        assert_eq!(engine.user_guess(), "");
    }

    #[test]
    fn three_correct_guesses_end_the_game() {
        let mut engine = scenario_engine(8);

        guess_correctly(&mut engine);
        guess_correctly(&mut engine);
        assert_eq!(engine.state().current_word_count, 3);
        assert!(!engine.state().is_game_over);

        guess_correctly(&mut engine);

        let state = engine.state();
        assert_eq!(state.score, 60);
        assert_eq!(state.current_word_count, 3);
        assert!(state.is_game_over);
    }

    #[test]
    fn wrong_guess_before_last_round_keeps_score() {
        let mut engine = scenario_engine(9);
        guess_correctly(&mut engine);
        guess_correctly(&mut engine);

        engine.set_user_guess("nope");
        assert_eq!(engine.check_user_guess().unwrap(), GuessOutcome::Incorrect);

        let state = engine.state();
        assert!(state.is_guessed_word_wrong);
        assert_eq!(state.score, 40);
        assert_eq!(state.current_word_count, 3);
        assert!(!state.is_game_over);
    }

    #[test]
    fn game_over_is_terminal() {
        let mut engine = scenario_engine(10);
        engine.skip_word().unwrap();
        engine.skip_word().unwrap();
        engine.skip_word().unwrap();
        assert!(engine.state().is_game_over);

        let frozen = engine.state().clone();
        let word = engine.current_word.clone();

        engine.skip_word().unwrap();
        engine.set_user_guess(word.clone());
        assert_eq!(engine.check_user_guess().unwrap(), GuessOutcome::GameOver);

        assert_eq!(engine.state(), &frozen);
        assert_eq!(engine.current_word, word);
        assert_eq!(engine.used_word_count(), 3);
    }

    #[test]
    fn no_word_repeats_within_session() {
        for seed in 0..10 {
            let mut engine = scenario_engine(seed);
            let mut seen = vec![engine.current_word.clone()];
            while !engine.state().is_game_over {
                engine.skip_word().unwrap();
                if !engine.state().is_game_over {
                    seen.push(engine.current_word.clone());
                }
            }

            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 3, "seed {seed} repeated a word");
        }
    }

    #[test]
    fn full_builtin_session_uses_distinct_words() {
        let mut engine = builtin_engine(99);
        let mut seen = FxHashSet::default();
        seen.insert(engine.current_word.clone());

        for _ in 1..engine.config().max_rounds {
            guess_correctly(&mut engine);
            assert!(seen.insert(engine.current_word.clone()));
        }
        guess_correctly(&mut engine);

        assert!(engine.state().is_game_over);
        assert_eq!(engine.state().score, 200);
        assert_eq!(engine.state().current_word_count, 10);
    }

    #[test]
    fn reset_starts_over() {
        let mut engine = scenario_engine(11);
        guess_correctly(&mut engine);
        engine.skip_word().unwrap();
        engine.skip_word().unwrap();
        assert!(engine.state().is_game_over);
        engine.set_user_guess("leftover");

        engine.reset_game().unwrap();

        let state = engine.state();
        assert_eq!(state.current_word_count, 1);
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over);
        assert!(!state.is_guessed_word_wrong);
        assert_eq!(engine.used_word_count(), 1);
        assert_eq!(engine.user_guess(), "");
        assert!(engine.words().contains(&engine.current_word));
    }

    #[test]
    fn pick_chooses_only_unused_word() {
        let words = WordList::new(["animal", "auto", "anillo", "zebra"]).unwrap();
        let mut engine =
            GameEngine::with_rng(words, GameConfig::new(4, 20), StdRng::seed_from_u64(12))
                .unwrap();

        for word in ["animal", "auto", "anillo"] {
            engine.used_words.insert(word.to_string());
        }
        engine.used_words.remove("zebra");
        engine.pick_random_word_and_shuffle().unwrap();

        assert_eq!(engine.current_word, "zebra");
    }

    #[test]
    fn pick_fails_when_exhausted() {
        let mut engine = scenario_engine(13);
        for word in ["animal", "auto", "anillo"] {
            engine.used_words.insert(word.to_string());
        }

        assert_eq!(
            engine.pick_random_word_and_shuffle(),
            Err(GameError::WordListExhausted)
        );
    }

    #[test]
    fn failed_scramble_leaves_word_unused() {
        let mut engine = scenario_engine(15);
        engine.words = WordList::unchecked(vec!["zzz".to_string()]);
        engine.used_words.clear();
        let word = engine.current_word.clone();

        assert_eq!(
            engine.pick_random_word_and_shuffle(),
            Err(GameError::UnscramblableWord("zzz".to_string()))
        );
        assert_eq!(engine.used_word_count(), 0);
        assert_eq!(engine.current_word, word);
    }

    #[test]
    fn undersized_word_list_fails_fast() {
        let words = WordList::new(["animal", "auto"]).unwrap();
        let result = GameEngine::with_rng(words, GameConfig::new(3, 20), StdRng::seed_from_u64(0));

        assert!(matches!(
            result,
            Err(GameError::WordListTooSmall {
                available: 2,
                required: 3
            })
        ));
    }

    #[test]
    fn observers_see_every_transition() {
        let mut engine = scenario_engine(14);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = engine.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        engine.set_user_guess("wrong");
        engine.check_user_guess().unwrap();
        engine.skip_word().unwrap();

        {
            let seen = seen.borrow();
            assert_eq!(seen.len(), 3);
            assert_eq!(seen[0].current_word_count, 1);
            assert!(seen[1].is_guessed_word_wrong);
            assert_eq!(seen[2].current_word_count, 2);
            assert_eq!(&seen[2], engine.state());
        }

        // Buffer edits are not state transitions
        engine.set_user_guess("typing");
        assert_eq!(seen.borrow().len(), 3);

        assert!(engine.unsubscribe(id));
        engine.reset_game().unwrap();
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn thread_rng_engine_constructs() {
        let engine = GameEngine::new(WordList::builtin().unwrap(), GameConfig::default()).unwrap();
        assert_eq!(engine.state().current_word_count, 1);
    }
}
