use crate::game::Game;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a card type.
///
/// Cards carry no per-copy state, so a card in hand, in the library or on the
/// battlefield is just its id. Multiplicity lives in the containing zone.
/// Ids are issued by [`CardDatabase::register`](crate::card::CardDatabase::register).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub(crate) u16);

impl CardId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rules for one card type.
///
/// Both hooks receive the whole game and may change damage, lands or any
/// other exposed state.
pub trait Card: Send + Sync {
    fn name(&self) -> &str;

    /// Resolve a copy played from hand.
    /// Returns true if the copy stays on the battlefield, false if it is consumed.
    fn on_play(&self, game: &mut Game<'_>) -> bool;

    /// Called once per turn for every copy on the battlefield, before the
    /// strategy acts.
    fn each_turn(&self, game: &mut Game<'_>);
}
