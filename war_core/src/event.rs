use serde::{Deserialize, Serialize};

use crate::{card::Card, player::PlayerId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Dealt { hand_sizes: [usize; 2] },
    RoundStarted { round: usize, hand_sizes: [usize; 2] },
    Drew { player: PlayerId, card: Card },
    War,
    RoundWon { player: PlayerId, cards: usize },
    OutOfCards { player: PlayerId },
    CannotWar { player: PlayerId, cards_left: usize },
    Winner { player: PlayerId },
    RoundLimitReached { rounds: usize },
}
