//! The standard 52-card deck shared by the engine and tests.
//!
//! Built once at first use and read-only for the rest of the process
//! lifetime.

use std::sync::OnceLock;

use crate::constants::DECK_SIZE;

/// Card ranks in canonical order
pub const RANKS: [&str; 13] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

/// Card suits in canonical order
pub const SUITS: [&str; 4] = ["Hearts", "Diamonds", "Clubs", "Spades"];

static DECK: OnceLock<Vec<String>> = OnceLock::new();

/// The full "Rank of Suit" deck, in suit-major order.
pub fn standard_deck() -> &'static [String] {
    DECK.get_or_init(|| {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for rank in RANKS {
                cards.push(format!("{} of {}", rank, suit));
            }
        }
        cards
    })
}
