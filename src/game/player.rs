use crate::card::CardId;
use crate::game::state::{Game, GameError};
use crate::game::zones::{Library, Multiset};
use crate::strategy::Strategy;
use log::trace;

/// Cards drawn by `draw_hand`
pub const OPENING_HAND_SIZE: usize = 7;

/// Per-game player state: library, hand, land count and the strategy making its choices
pub struct Player<'a> {
    library: Library,
    hand: Multiset,
    strategy: &'a dyn Strategy,
    pub lands: u32,
}

impl<'a> Player<'a> {
    pub fn new(library: Library, strategy: &'a dyn Strategy) -> Self {
        Player {
            library,
            hand: Multiset::new(),
            strategy,
            lands: 0,
        }
    }

    /// Draw one card. An empty library leaves the hand unchanged.
    pub fn draw(&mut self) -> &mut Self {
        match self.library.draw() {
            Some(card) => {
                trace!("draw {}", card);
                self.hand.add(card);
            }
            None => trace!("draw from empty library"),
        }
        self
    }

    pub fn draw_hand(&mut self) -> &mut Self {
        for _ in 0..OPENING_HAND_SIZE {
            self.draw();
        }
        self
    }

    /// Let the bound strategy play this turn
    pub fn turn(game: &mut Game<'a>) -> Result<(), GameError> {
        let strategy = game.player.strategy;
        strategy.turn(game)
    }

    pub fn hand(&self) -> &Multiset {
        &self.hand
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn add_land(&mut self) {
        self.lands += 1;
    }

    /// Take one copy of `card` out of hand
    pub(crate) fn remove_from_hand(&mut self, card: CardId) -> Result<(), GameError> {
        if self.hand.remove(card) {
            Ok(())
        } else {
            Err(GameError::NotInHand { card })
        }
    }
}
