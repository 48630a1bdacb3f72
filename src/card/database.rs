use crate::card::types::{Card, CardId};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CardDatabaseError {
    #[error("Card not found: {0}")]
    CardNotFound(String),
    #[error("Card already registered: {0}")]
    DuplicateCard(String),
    #[error("Card database is full ({0} cards)")]
    Full(usize),
}

/// Registry of card behaviours, keyed by id and by name
#[derive(Default)]
pub struct CardDatabase {
    cards: Vec<Box<dyn Card>>,
    by_name: HashMap<String, CardId>,
}

impl CardDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card type and return its id
    pub fn register<C: Card + 'static>(&mut self, card: C) -> Result<CardId, CardDatabaseError> {
        let name = card.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(CardDatabaseError::DuplicateCard(name));
        }
        let index = u16::try_from(self.cards.len())
            .map_err(|_| CardDatabaseError::Full(self.cards.len()))?;
        let id = CardId(index);
        self.cards.push(Box::new(card));
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Look up a card id by name
    pub fn get_card(&self, name: &str) -> Result<CardId, CardDatabaseError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CardDatabaseError::CardNotFound(name.to_string()))
    }

    /// Behaviour for an id.
    ///
    /// Ids only come from `register` on this database, so an unknown id is a
    /// programming error and panics.
    pub fn card(&self, id: CardId) -> &dyn Card {
        self.cards[id.index()].as_ref()
    }

    pub fn name(&self, id: CardId) -> &str {
        self.card(id).name()
    }

    pub fn card_names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.name()).collect()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}
