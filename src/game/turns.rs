use crate::game::player::Player;
use crate::game::state::{FirstDrawRule, Game, GameError, GamePhase, GameResult, DAMAGE_THRESHOLD};
use log::debug;

impl<'a> Game<'a> {
    /// Whether this turn's draw step draws a card. Called after the turn counter is bumped.
    fn draws_this_turn(&self) -> bool {
        match self.config().first_draw {
            // Mirrors the old guard, which tested the counter after incrementing it
            FirstDrawRule::Literal => !(self.on_the_play() && self.turn == 0),
            FirstDrawRule::SkipOnPlay => !(self.on_the_play() && self.turn == 1),
        }
    }

    /// Play one turn: bump the counter, draw, trigger permanents, then let the strategy act
    pub fn take_turn(&mut self) -> Result<&mut Self, GameError> {
        self.turn += 1;

        if self.draws_this_turn() {
            self.player.draw();
        } else {
            debug!("turn {}: skipping draw on the play", self.turn);
        }

        // Snapshot first so cards entering during triggers wait a turn
        let db = self.db();
        let permanents: Vec<_> = self.battlefield().instances().collect();
        for card in permanents {
            db.card(card).each_turn(self);
        }

        Player::turn(self)?;

        debug!(
            "turn {}: hand {} cards, {} lands, {} permanents, {} damage",
            self.turn,
            self.player.hand().len(),
            self.player.lands,
            self.battlefield().len(),
            self.damage_dealt()
        );
        Ok(self)
    }

    /// Draw an opening hand and play turns until the damage threshold or the turn cap
    pub fn goldfish(&mut self) -> Result<GameResult, GameError> {
        if self.phase != GamePhase::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        self.config().validate()?;

        self.phase = GamePhase::InProgress;
        self.player.draw_hand();

        while self.damage_dealt() < DAMAGE_THRESHOLD {
            if self.turn >= self.config().max_turns {
                self.phase = GamePhase::DidNotConverge;
                debug!(
                    "gave up after {} turns with {} damage",
                    self.turn,
                    self.damage_dealt()
                );
                return Ok(self.result());
            }
            self.take_turn()?;
        }

        self.phase = GamePhase::Complete;
        debug!("goldfished on turn {}", self.turn);
        Ok(self.result())
    }
}
