use crate::game::{Game, GameError, DAMAGE_THRESHOLD};
use crate::sims::cards::StandardCards;
use crate::strategy::{play_card, Strategy};

/// Pilots the Savannah / Savannah Lion / Lightning Bolt deck.
///
/// Every turn it makes its land drop, then either burns out the opponent if
/// the bolts in hand look like enough, or develops lions and spends leftover
/// lands on bolts.
#[derive(Debug, Clone, Copy)]
pub struct SavannahBoltStrategy {
    cards: StandardCards,
}

impl SavannahBoltStrategy {
    pub fn new(cards: StandardCards) -> Self {
        SavannahBoltStrategy { cards }
    }

    /// Rough damage available by going face with bolts now.
    /// Counts every permanent as a 4 damage threat.
    fn burn_estimate(&self, game: &Game<'_>) -> u32 {
        let hand = game.player().hand();
        let lands = game.player().lands;
        let expected_mana = if hand.contains(self.cards.savannah) {
            lands + 1
        } else {
            lands
        };
        let bolts = hand.count(self.cards.bolt);

        (lands + expected_mana).min(bolts) * 3
            + game.battlefield().len() as u32 * 4
            + game.damage_dealt()
    }
}

impl Strategy for SavannahBoltStrategy {
    fn name(&self) -> &str {
        "savannah-bolt"
    }

    fn turn(&self, game: &mut Game<'_>) -> Result<(), GameError> {
        let StandardCards { savannah, lion, bolt } = self.cards;

        if game.player().hand().contains(savannah) {
            play_card(savannah, game)?;
        }

        let bolts = game.player().hand().count(bolt);
        let lands = game.player().lands;

        if self.burn_estimate(game) >= DAMAGE_THRESHOLD {
            for _ in 0..bolts.min(lands) {
                play_card(bolt, game)?;
            }
            return Ok(());
        }

        let lions = game.player().hand().count(lion);
        for _ in 0..lions.min(lands) {
            play_card(lion, game)?;
        }
        for _ in 0..bolts.min(lands.saturating_sub(lions)) {
            play_card(bolt, game)?;
        }
        Ok(())
    }
}
