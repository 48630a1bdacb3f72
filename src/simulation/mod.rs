pub mod deck;
pub mod session;
pub mod summary;

pub use deck::{parse_deck, parse_deck_file, Deck, DeckError, MAX_DECK_SIZE};
pub use session::{Session, SessionError, DEFAULT_TRIALS};
pub use summary::Summary;
