//! The game controller.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::view::GameView;
use crate::core::{GameConfig, GameRng, GameRngState, GameState, GameStatus, Message, Word};
use crate::dictionary::{Dictionary, DictionarySource};
use crate::error::GameError;
use crate::rules::{StartWordSelector, TurnValidator, Verdict};

/// Owns one game of shiritori.
///
/// ## Lifecycle
///
/// - `new`: not ready; every submit is ignored
/// - `start`: load the dictionary, draw an opening word
/// - `submit`: play a word
/// - `reset`: throw the game away and `start` again
///
/// Failures never escape: a dictionary that fails to load or a missing
/// opening word become the current message, and the game stays in a
/// well-defined state until the next reset.
pub struct GameController {
    source: Box<dyn DictionarySource>,
    config: GameConfig,
    validator: TurnValidator,
    selector: StartWordSelector,
    rng: GameRng,
    /// `None` until a load succeeds.
    dictionary: Option<Arc<Dictionary>>,
    state: GameState,
}

impl GameController {
    /// Create a controller. Call `start` before submitting words.
    ///
    /// A `history_limit` of 0 is raised to 1.
    #[must_use]
    pub fn new(source: impl DictionarySource + 'static, mut config: GameConfig) -> Self {
        if config.history_limit == 0 {
            warn!("history_limit of 0 raised to 1");
            config.history_limit = 1;
        }

        Self {
            source: Box::new(source),
            validator: TurnValidator::from_config(&config),
            selector: StartWordSelector::from_config(&config),
            rng: GameRng::from_seed_or_entropy(config.seed),
            dictionary: None,
            state: GameState::new(config.history_limit),
            config,
        }
    }

    // === Operations ===

    /// Load the dictionary and open a new game.
    ///
    /// On success the history holds the opening word and there is no
    /// message. If the dictionary fails to load the controller stays not
    /// ready; if no opening word is found the game starts with an empty
    /// history.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> &GameState {
        self.begin(None)
    }

    /// Discard the current game and start a new one.
    ///
    /// The dictionary is reloaded and a fresh opening word is drawn.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        self.begin(Some(Message::Restarted))
    }

    /// Play a word.
    ///
    /// Ignored (no change at all) when the controller is not ready, the
    /// game has ended, or the input is blank.
    #[instrument(skip(self))]
    pub fn submit(&mut self, input: &str) -> Verdict {
        let Some(dictionary) = self.dictionary.as_deref() else {
            debug!("Dictionary not loaded, ignoring input");
            return Verdict::Ignored;
        };

        if self.state.is_ended() {
            debug!("Game has ended, ignoring input");
            return Verdict::Ignored;
        }

        let verdict = self.validator.evaluate(&self.state, dictionary, input);
        self.apply(&verdict);
        verdict
    }

    /// Play a word, reporting anything but acceptance as an error.
    ///
    /// Applies the move exactly like `submit`.
    pub fn try_submit(&mut self, input: &str) -> Result<Word, GameError> {
        if !self.is_ready() {
            return Err(GameError::NotReady);
        }
        if self.state.is_ended() {
            return Err(GameError::GameEnded);
        }

        match self.submit(input) {
            Verdict::Accepted(word) => Ok(word),
            Verdict::Rejected(rejection) => Err(rejection.into()),
            Verdict::Terminated(termination, _) => Err(termination.into()),
            Verdict::Ignored => Err(GameError::BlankInput),
        }
    }

    /// Replace the current game with a prepared state.
    ///
    /// The dictionary is left as loaded.
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
    }

    /// Rewind the RNG to a position saved with `rng_state`.
    ///
    /// The next `reset` then draws the same opening word it drew after
    /// the save.
    pub fn restore_rng(&mut self, rng: &GameRngState) {
        self.rng = GameRng::from_state(rng);
    }

    // === Queries ===

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Raw words, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.state.history_raw()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Latest outcome message.
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.state.message()
    }

    /// The sound the next word must start with.
    #[must_use]
    pub fn expected_sound(&self) -> Option<char> {
        self.state.expected_sound()
    }

    /// Check if a dictionary is loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.dictionary.is_some()
    }

    /// The loaded dictionary.
    #[must_use]
    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.as_deref()
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// RNG position, for replaying start-word draws.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Owned snapshot for a presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> GameView {
        GameView::from(&self.state)
    }

    // === Internals ===

    fn begin(&mut self, message: Option<Message>) -> &GameState {
        self.state = GameState::new(self.config.history_limit);

        match self.open() {
            Ok(start) => {
                info!(start = start.raw(), "Game started");
                self.state = GameState::with_opening(start, self.config.history_limit);
                if let Some(message) = message {
                    self.state.set_message(message);
                }
            }
            Err(err) => {
                warn!(error = %err, "Game could not start normally");
                if let Some(message) = err.message() {
                    self.state.set_message(message);
                }
            }
        }

        &self.state
    }

    /// Load the dictionary and draw an opening word.
    fn open(&mut self) -> Result<Word, GameError> {
        self.dictionary = None;

        let dictionary = Arc::new(self.source.load()?);
        self.dictionary = Some(Arc::clone(&dictionary));

        self.selector
            .select(&dictionary, &mut self.rng)
            .ok_or(GameError::NoStartWordFound)
    }

    fn apply(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Ignored => {}
            Verdict::Accepted(word) => {
                debug!(word = word.raw(), "Accepted");
                self.state.record(word.clone());
            }
            Verdict::Rejected(rejection) => {
                debug!(%rejection, "Rejected");
            }
            Verdict::Terminated(termination, word) => {
                info!(word = word.raw(), %termination, "Game over");
                self.state.record(word.clone());
                self.state.end();
            }
        }

        if let Some(message) = verdict.message() {
            self.state.set_message(message);
        }
    }
}
