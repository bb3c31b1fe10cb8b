use rand::{seq::SliceRandom, Rng};

use crate::{card::Card, error::WarError};

pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Deck {
            cards: Card::deck(),
        }
    }

    /// Builds a deck from an explicit order. The last card is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn deal_one(&mut self) -> Result<Card, WarError> {
        self.cards.pop().ok_or(WarError::EmptyDeck)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}
