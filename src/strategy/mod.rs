use crate::card::CardId;
use crate::game::{Game, GameError};
use log::debug;

/// Decision maker for one deck.
///
/// `turn` is called once per turn after the draw and after permanents have
/// triggered, and should make all of that turn's plays before returning.
/// Implementations read the game through `game.player()`, `game.battlefield()`
/// and `game.damage_dealt()` and act through [`play_card`].
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    fn turn(&self, game: &mut Game<'_>) -> Result<(), GameError>;
}

/// Play one copy of `card` from hand.
///
/// The copy is resolved with `on_play` and moved to the battlefield only if
/// that returns true. Fails with `NotInHand`, changing nothing, when the hand
/// holds no copy.
pub fn play_card(card: CardId, game: &mut Game<'_>) -> Result<(), GameError> {
    game.player_mut().remove_from_hand(card)?;

    let db = game.db();
    let rules = db.card(card);
    debug!("turn {}: play {}", game.turn(), rules.name());
    if rules.on_play(game) {
        game.battlefield_mut().add(card);
    }
    Ok(())
}
