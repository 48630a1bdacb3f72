use crate::card::CardId;
use crate::game::{Game, GameError};
use crate::strategy::{play_card, Strategy};

/// Fires one copy of a burn spell per turn, ignoring mana
#[derive(Debug, Clone, Copy)]
pub struct BurnStrategy {
    spell: CardId,
}

impl BurnStrategy {
    pub fn new(spell: CardId) -> Self {
        BurnStrategy { spell }
    }
}

impl Strategy for BurnStrategy {
    fn name(&self) -> &str {
        "burn"
    }

    fn turn(&self, game: &mut Game<'_>) -> Result<(), GameError> {
        if game.player().hand().contains(self.spell) {
            play_card(self.spell, game)?;
        }
        Ok(())
    }
}
