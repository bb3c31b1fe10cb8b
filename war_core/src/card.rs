use std::{cmp::Ordering, fmt};

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

/// A single playing card. Two cards are the same card only if suit and rank
/// match; gameplay compares them by [`Card::value`] alone.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    /// All 52 cards, suit by suit, each suit from Two up to Ace.
    pub fn deck() -> Vec<Card> {
        iproduct!(Suit::iter(), Rank::iter())
            .map(|(suit, rank)| Card::new(suit, rank))
            .collect()
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn compare_value(&self, other: &Card) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use std::{cmp::Ordering, collections::HashSet, str::FromStr};

    use strum::IntoEnumIterator;

    use crate::card::{Card, Rank, Suit};

    #[test]
    fn deck_should_contain_every_suit_and_rank_once() {
        let deck = Card::deck();

        assert_eq!(deck.len(), 52);
        assert_eq!(deck.iter().collect::<HashSet<_>>().len(), 52);
        for suit in Suit::iter() {
            assert_eq!(deck.iter().filter(|c| c.suit() == suit).count(), 13);
        }
    }

    #[test]
    fn deck_should_be_enumerated_suit_by_suit() {
        let deck = Card::deck();

        assert_eq!(deck[0], Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(deck[12], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(deck[13], Card::new(Suit::Diamonds, Rank::Two));
        assert_eq!(deck[51], Card::new(Suit::Clubs, Rank::Ace));
    }

    #[test]
    fn rank_values_should_run_from_two_to_fourteen() {
        let values = Rank::iter().map(|r| r.value()).collect::<Vec<_>>();

        assert_eq!(values, (2..=14).collect::<Vec<u8>>());
    }

    #[test]
    fn label_should_name_rank_and_suit() {
        assert_eq!(
            Card::new(Suit::Spades, Rank::Queen).to_string(),
            "Queen of Spades"
        );
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "Ten of Hearts");
    }

    #[test]
    fn compare_value_should_ignore_suit() {
        let seven_of_hearts = Card::new(Suit::Hearts, Rank::Seven);
        let seven_of_clubs = Card::new(Suit::Clubs, Rank::Seven);
        let ace_of_clubs = Card::new(Suit::Clubs, Rank::Ace);

        assert_eq!(seven_of_hearts.compare_value(&seven_of_clubs), Ordering::Equal);
        assert_ne!(seven_of_hearts, seven_of_clubs);
        assert_eq!(ace_of_clubs.compare_value(&seven_of_hearts), Ordering::Greater);
        assert_eq!(seven_of_clubs.compare_value(&ace_of_clubs), Ordering::Less);
    }

    #[test]
    fn ranks_and_suits_should_parse_from_their_names() {
        assert_eq!(Rank::from_str("King"), Ok(Rank::King));
        assert_eq!(Suit::from_str("Diamonds"), Ok(Suit::Diamonds));
        assert!(Rank::from_str("Joker").is_err());
    }
}
