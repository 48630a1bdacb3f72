use crate::card::{Card, CardDatabase, CardDatabaseError, CardId};
use crate::game::Game;

/// Land. Adds to the land count and is not tracked on the battlefield.
pub struct Savannah;

impl Card for Savannah {
    fn name(&self) -> &str {
        "Savannah"
    }

    fn on_play(&self, game: &mut Game<'_>) -> bool {
        game.player_mut().add_land();
        false
    }

    fn each_turn(&self, _game: &mut Game<'_>) {}
}

/// 2/1 creature, attacks for 2 every turn after it lands
pub struct SavannahLion;

impl Card for SavannahLion {
    fn name(&self) -> &str {
        "Savannah Lion"
    }

    fn on_play(&self, _game: &mut Game<'_>) -> bool {
        true
    }

    fn each_turn(&self, game: &mut Game<'_>) {
        game.deal_damage(2);
    }
}

/// 3 damage on resolution.
///
/// Stays on the battlefield after resolving, where the Savannah strategy's
/// lethal estimate counts it.
pub struct LightningBolt;

impl Card for LightningBolt {
    fn name(&self) -> &str {
        "Lightning Bolt"
    }

    fn on_play(&self, game: &mut Game<'_>) -> bool {
        game.deal_damage(3);
        true
    }

    fn each_turn(&self, _game: &mut Game<'_>) {}
}

/// Ids of the reference cards in a database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardCards {
    pub savannah: CardId,
    pub lion: CardId,
    pub bolt: CardId,
}

pub fn register_standard_cards(db: &mut CardDatabase) -> Result<StandardCards, CardDatabaseError> {
    Ok(StandardCards {
        savannah: db.register(Savannah)?,
        lion: db.register(SavannahLion)?,
        bolt: db.register(LightningBolt)?,
    })
}
