use crate::card::CardId;
use crate::rng::GameRng;
use crate::simulation::deck::Deck;
use std::collections::BTreeMap;

/// Counted collection of card types (hand, battlefield, deck list).
///
/// Counts are never zero or negative: a key is dropped when its last copy
/// leaves, and removing an absent card is refused. Iteration follows
/// `CardId` order so a seeded game replays identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multiset {
    counts: BTreeMap<CardId, u32>,
    len: usize,
}

impl Multiset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: CardId) {
        self.add_many(card, 1);
    }

    /// Add `count` copies. Returns false, leaving the set untouched, if the
    /// card's count would overflow.
    pub fn add_many(&mut self, card: CardId, count: u32) -> bool {
        if count == 0 {
            return true;
        }
        let current = self.count(card);
        let (Some(total), Some(len)) = (
            current.checked_add(count),
            self.len.checked_add(count as usize),
        ) else {
            return false;
        };
        self.counts.insert(card, total);
        self.len = len;
        true
    }

    /// Remove one copy. Returns false, leaving the set untouched, if no copy is present.
    pub fn remove(&mut self, card: CardId) -> bool {
        match self.counts.get_mut(&card) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&card);
                }
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn count(&self, card: CardId) -> u32 {
        self.counts.get(&card).copied().unwrap_or(0)
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.counts.contains_key(&card)
    }

    /// Total number of copies
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct card types
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// (card, count) pairs
    pub fn iter(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        self.counts.iter().map(|(&card, &count)| (card, count))
    }

    /// One item per copy
    pub fn instances(&self) -> impl Iterator<Item = CardId> + '_ {
        self.iter()
            .flat_map(|(card, count)| std::iter::repeat(card).take(count as usize))
    }
}

impl FromIterator<CardId> for Multiset {
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        let mut set = Multiset::new();
        for card in iter {
            set.add(card);
        }
        set
    }
}

/// Library - the randomized draw pile for one game.
///
/// Shuffled once on construction; the top of the library is the end of the vec.
#[derive(Debug, Clone)]
pub struct Library {
    cards: Vec<CardId>,
}

impl Library {
    pub fn new(deck: &Deck, rng: &mut GameRng) -> Self {
        let mut cards = deck.expand();
        rng.shuffle(&mut cards);
        Library { cards }
    }

    /// Library in exactly the given order, last element on top
    pub fn from_cards(cards: Vec<CardId>) -> Self {
        Library { cards }
    }

    /// Take the top card, or None once the library is empty
    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// Re-randomize the remaining cards in place
    pub fn shuffle(&mut self, rng: &mut GameRng) -> &mut Self {
        rng.shuffle(&mut self.cards);
        self
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
}
