use crate::card::{CardDatabase, CardId};
use crate::game::player::Player;
use crate::game::zones::Multiset;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Damage that ends a goldfish game
pub const DAMAGE_THRESHOLD: u32 = 20;

/// Turn cap used when none is configured
pub const DEFAULT_MAX_TURNS: u32 = 50;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Card {card} is not in hand")]
    NotInHand { card: CardId },
    #[error("Game has already been played")]
    AlreadyStarted,
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(String),
}

/// When the player on the play skips their first draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FirstDrawRule {
    /// Checks for turn 0 after the turn counter has already been bumped,
    /// so the skip never fires and every turn draws.
    #[default]
    Literal,
    /// The player on the play skips the draw on turn 1.
    SkipOnPlay,
}

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub on_the_play: bool,
    pub first_draw: FirstDrawRule,
    /// Turns played before a game below the threshold is abandoned
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            on_the_play: false,
            first_draw: FirstDrawRule::Literal,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_turns == 0 {
            return Err(GameError::InvalidConfig(
                "max_turns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Complete,
    DidNotConverge,
}

/// Result of a single goldfish game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Turn on which the threshold was reached (None if the turn cap was hit first)
    pub win_turn: Option<u32>,
    pub turns: u32,
    pub damage_dealt: u32,
}

/// One playout: the player, their battlefield and the damage dealt so far
pub struct Game<'a> {
    pub(crate) player: Player<'a>,
    db: &'a CardDatabase,
    battlefield: Multiset,
    pub(crate) turn: u32,
    damage_dealt: u32,
    pub(crate) phase: GamePhase,
    config: GameConfig,
}

impl<'a> Game<'a> {
    pub fn new(player: Player<'a>, db: &'a CardDatabase, config: GameConfig) -> Self {
        Game {
            player,
            db,
            battlefield: Multiset::new(),
            turn: 0,
            damage_dealt: 0,
            phase: GamePhase::NotStarted,
            config,
        }
    }

    pub fn player(&self) -> &Player<'a> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player<'a> {
        &mut self.player
    }

    pub fn battlefield(&self) -> &Multiset {
        &self.battlefield
    }

    pub fn battlefield_mut(&mut self) -> &mut Multiset {
        &mut self.battlefield
    }

    pub fn db(&self) -> &'a CardDatabase {
        self.db
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn damage_dealt(&self) -> u32 {
        self.damage_dealt
    }

    pub fn on_the_play(&self) -> bool {
        self.config.on_the_play
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Damage only accumulates; the total never goes down
    pub fn deal_damage(&mut self, amount: u32) {
        self.damage_dealt = self.damage_dealt.saturating_add(amount);
        debug!(
            "turn {}: {} damage (total {})",
            self.turn, amount, self.damage_dealt
        );
    }

    pub fn has_won(&self) -> bool {
        self.damage_dealt >= DAMAGE_THRESHOLD
    }

    /// Snapshot of the game as a result
    pub fn result(&self) -> GameResult {
        GameResult {
            win_turn: if self.has_won() { Some(self.turn) } else { None },
            turns: self.turn,
            damage_dealt: self.damage_dealt,
        }
    }
}
