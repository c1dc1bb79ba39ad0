//! Opening word selection.

use tracing::{debug, warn};

use crate::core::{GameConfig, GameRng, StartStrategy, Word};
use crate::dictionary::Dictionary;

/// Picks a random legal opening word: one that neither starts nor ends
/// with `ン`.
///
/// ## Example
///
/// ```
/// use shiritori::core::GameRng;
/// use shiritori::dictionary::Dictionary;
/// use shiritori::rules::StartWordSelector;
///
/// let dictionary = Dictionary::from_words(["ほん", "りんご"]);
/// let mut rng = GameRng::new(1);
///
/// let start = StartWordSelector::default().select(&dictionary, &mut rng);
/// assert_eq!(start.unwrap().raw(), "りんご");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StartWordSelector {
    strategy: StartStrategy,
}

impl StartWordSelector {
    /// Create a selector with the given strategy.
    #[must_use]
    pub fn new(strategy: StartStrategy) -> Self {
        Self { strategy }
    }

    /// Create a selector from a game configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.start_strategy)
    }

    /// Bounded-retry selector with the given number of attempts.
    #[must_use]
    pub fn bounded(attempts: usize) -> Self {
        Self::new(StartStrategy::BoundedRetry { attempts })
    }

    /// The configured strategy.
    #[must_use]
    pub fn strategy(&self) -> StartStrategy {
        self.strategy
    }

    /// Select an opening word.
    ///
    /// Returns `None` if no legal opener was found: with `BoundedRetry`
    /// after all attempts are spent, with `Prefiltered` only when the
    /// dictionary has no legal opener at all.
    pub fn select(&self, dictionary: &Dictionary, rng: &mut GameRng) -> Option<Word> {
        let start = match self.strategy {
            StartStrategy::BoundedRetry { attempts } => Self::select_bounded(dictionary, rng, attempts),
            StartStrategy::Prefiltered => Self::select_prefiltered(dictionary, rng),
        };

        match &start {
            Some(word) => debug!(word = word.raw(), "Selected opening word"),
            None => warn!(strategy = ?self.strategy, words = dictionary.len(), "No opening word found"),
        }

        start
    }

    fn select_bounded(dictionary: &Dictionary, rng: &mut GameRng, attempts: usize) -> Option<Word> {
        (0..attempts)
            .map_while(|_| dictionary.sample(rng))
            .map(Word::new)
            .find(Word::is_legal_opener)
    }

    fn select_prefiltered(dictionary: &Dictionary, rng: &mut GameRng) -> Option<Word> {
        let candidates = dictionary.start_candidates();
        rng.choose(&candidates).copied().map(Word::new)
    }
}
