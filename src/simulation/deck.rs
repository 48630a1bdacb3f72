use crate::card::{CardDatabase, CardDatabaseError, CardId};
use crate::game::zones::Multiset;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid deck format at line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },
    #[error("Card database error: {0}")]
    DatabaseError(#[from] CardDatabaseError),
    #[error("Deck contains no cards")]
    EmptyDeck,
}

/// Most cards a parsed deck list may hold
pub const MAX_DECK_SIZE: usize = 10_000;

/// Deck list: how many copies of each card type. Fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Multiset,
}

impl Deck {
    /// Build from (card, count) pairs; repeated cards add up.
    /// An entry that would overflow its card's count is dropped.
    pub fn new<I: IntoIterator<Item = (CardId, u32)>>(entries: I) -> Self {
        let mut cards = Multiset::new();
        for (card, count) in entries {
            cards.add_many(card, count);
        }
        Deck { cards }
    }

    pub fn cards(&self) -> &Multiset {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// One entry per card
    pub fn expand(&self) -> Vec<CardId> {
        self.cards.instances().collect()
    }
}

/// Parse a deck list.
/// Format: "4 Card Name" per line, supports comments with # or //
pub fn parse_deck(content: &str, database: &CardDatabase) -> Result<Deck, DeckError> {
    let mut entries = Vec::new();
    let mut total: usize = 0;

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }

        let Some((count_str, card_name)) = trimmed.split_once(char::is_whitespace) else {
            return Err(DeckError::InvalidFormat {
                line: line_num + 1,
                reason: "Expected format: 'COUNT CARD_NAME'".to_string(),
            });
        };

        let count: u32 = count_str.parse().map_err(|_| DeckError::InvalidFormat {
            line: line_num + 1,
            reason: format!("'{}' is not a valid number", count_str),
        })?;

        total = total.saturating_add(count as usize);
        if total > MAX_DECK_SIZE {
            return Err(DeckError::InvalidFormat {
                line: line_num + 1,
                reason: format!("deck holds more than {} cards", MAX_DECK_SIZE),
            });
        }

        let card = database.get_card(card_name.trim())?;
        entries.push((card, count));
    }

    let deck = Deck::new(entries);
    if deck.is_empty() {
        return Err(DeckError::EmptyDeck);
    }
    Ok(deck)
}

pub fn parse_deck_file<P: AsRef<Path>>(
    path: P,
    database: &CardDatabase,
) -> Result<Deck, DeckError> {
    let content = std::fs::read_to_string(path)?;
    parse_deck(&content, database)
}
