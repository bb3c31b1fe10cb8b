use std::{error::Error, fmt};

/// Structural failures. Neither occurs in a correctly driven game; seeing one
/// means the deal or the round loop broke an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarError {
    EmptyDeck,
    EmptyHand { player: String },
}

impl fmt::Display for WarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarError::EmptyDeck => write!(f, "cannot deal from an empty deck"),
            WarError::EmptyHand { player } => {
                write!(f, "player {} has no card left to remove", player)
            }
        }
    }
}

impl Error for WarError {}
