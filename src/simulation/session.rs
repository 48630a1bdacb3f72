use crate::card::CardDatabase;
use crate::game::{Game, GameConfig, GameError, GameResult, Library, Player};
use crate::rng::GameRng;
use crate::simulation::deck::Deck;
use crate::simulation::summary::Summary;
use crate::strategy::Strategy;
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

/// Games played by `simulate` when no count is given
pub const DEFAULT_TRIALS: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Number of trials must be positive")]
    InvalidTrials,
    #[error("No games have been simulated")]
    NoResults,
    #[error("None of the {0} games reached the damage threshold")]
    NoConvergedTrials(usize),
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}

/// Runs many independent goldfish games of one deck and strategy.
///
/// Trial `i` shuffles with a generator seeded `seed + i`, so a session with a
/// fixed seed gives the same results run sequentially or in parallel.
pub struct Session<'a> {
    deck: Deck,
    strategy: &'a dyn Strategy,
    db: &'a CardDatabase,
    config: GameConfig,
    seed: u64,
    parallel: bool,
    results: Vec<GameResult>,
}

impl<'a> Session<'a> {
    pub fn new(deck: Deck, strategy: &'a dyn Strategy, db: &'a CardDatabase) -> Self {
        Session {
            deck,
            strategy,
            db,
            config: GameConfig::default(),
            seed: GameRng::new(None).seed(),
            parallel: false,
            results: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run trials on the rayon pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one game with a fresh library, player and game
    pub fn game(&self, rng: &mut GameRng) -> Result<GameResult, GameError> {
        let library = Library::new(&self.deck, rng);
        let player = Player::new(library, self.strategy);
        Game::new(player, self.db, self.config).goldfish()
    }

    fn trial(&self, index: usize) -> Result<GameResult, GameError> {
        self.game(&mut GameRng::for_trial(self.seed, index))
    }

    /// Play `trials` games, replacing any earlier results
    pub fn simulate(&mut self, trials: usize) -> Result<&mut Self, SessionError> {
        self.simulate_with_progress(trials, |_| {})
    }

    /// Like `simulate`, calling `on_trial` as each game finishes.
    /// In parallel mode the callback runs on worker threads in no particular order.
    pub fn simulate_with_progress<F>(
        &mut self,
        trials: usize,
        on_trial: F,
    ) -> Result<&mut Self, SessionError>
    where
        F: Fn(&GameResult) + Sync,
    {
        if trials == 0 {
            return Err(SessionError::InvalidTrials);
        }
        self.config.validate()?;
        self.results.clear();

        let session = &*self;
        let run = |i: usize| -> Result<GameResult, GameError> {
            let result = session.trial(i)?;
            on_trial(&result);
            Ok(result)
        };
        let results: Result<Vec<_>, GameError> = if session.parallel {
            (0..trials).into_par_iter().map(run).collect()
        } else {
            (0..trials).map(run).collect()
        };

        self.results = results?;
        info!(
            "simulated {} games of {} (seed {})",
            trials,
            self.strategy.name(),
            self.seed
        );
        Ok(self)
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    /// Mean win turn over the games that reached the threshold
    pub fn mean(&self) -> Result<f64, SessionError> {
        Ok(self.summary()?.mean)
    }

    pub fn summary(&self) -> Result<Summary, SessionError> {
        Summary::from_results(&self.results)
    }

    /// Like `summary`, but a batch where no game reached the threshold is
    /// `Ok(None)` rather than an error
    pub fn converged_summary(&self) -> Result<Option<Summary>, SessionError> {
        match self.summary() {
            Ok(summary) => Ok(Some(summary)),
            Err(SessionError::NoConvergedTrials(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Win turn -> number of games
    pub fn distribution(&self) -> BTreeMap<u32, usize> {
        let mut distribution = BTreeMap::new();
        for turn in self.results.iter().filter_map(|r| r.win_turn) {
            *distribution.entry(turn).or_insert(0) += 1;
        }
        distribution
    }
}
