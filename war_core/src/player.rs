use std::collections::VecDeque;

use crate::{card::Card, error::WarError};

pub type PlayerId = usize;

/// Seat of the other player in a two-player game.
pub fn opponent(id: PlayerId) -> PlayerId {
    1 - id
}

/// A player and the cards in their hand. The front of the hand is the oldest
/// card and is drawn next; won cards go to the back.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: VecDeque<Card>,
}

impl Player {
    pub fn new(name: String) -> Self {
        Player {
            name,
            hand: VecDeque::new(),
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn hand(&self) -> &VecDeque<Card> {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn remove_one(&mut self) -> Result<Card, WarError> {
        self.hand.pop_front().ok_or_else(|| WarError::EmptyHand {
            player: self.name.clone(),
        })
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.extend(cards);
    }
}
