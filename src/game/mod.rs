pub mod player;
pub mod state;
pub mod turns;
pub mod zones;

pub use player::{Player, OPENING_HAND_SIZE};
pub use state::{
    FirstDrawRule, Game, GameConfig, GameError, GamePhase, GameResult, DAMAGE_THRESHOLD,
    DEFAULT_MAX_TURNS,
};
pub use zones::{Library, Multiset};
