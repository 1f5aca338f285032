use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of cards on the board: 5 values, two cards each.
pub const CARD_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardValue {
    Apple,
    Banana,
    Watermelon,
    Strawberry,
    Pineapple,
}

impl CardValue {
    pub const ALL: [CardValue; 5] = [
        CardValue::Apple,
        CardValue::Banana,
        CardValue::Watermelon,
        CardValue::Strawberry,
        CardValue::Pineapple,
    ];

    /// Face symbol shown when the card is revealed.
    pub fn symbol(self) -> &'static str {
        match self {
            CardValue::Apple => "🍎",
            CardValue::Banana => "🍌",
            CardValue::Watermelon => "🍉",
            CardValue::Strawberry => "🍓",
            CardValue::Pineapple => "🍍",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u8,
    pub value: CardValue,
}

/// The fixed card set. Immutable after definition; only the display
/// order changes between games.
pub fn card_set() -> [Card; CARD_COUNT] {
    let mut cards = [Card {
        id: 0,
        value: CardValue::Apple,
    }; CARD_COUNT];
    for (i, value) in CardValue::ALL.into_iter().enumerate() {
        cards[i * 2] = Card {
            id: (i * 2 + 1) as u8,
            value,
        };
        cards[i * 2 + 1] = Card {
            id: (i * 2 + 2) as u8,
            value,
        };
    }
    cards
}

/// A fresh random permutation of the fixed card set.
pub fn shuffled_deck<R: Rng>(rng: &mut R) -> Vec<Card> {
    let mut deck = card_set().to_vec();
    deck.shuffle(rng);
    deck
}
