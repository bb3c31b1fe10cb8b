use itertools::Itertools;
use log::error;

use war_core::{event::Event, observer::Observer};

pub enum OutputFormat {
    Text,
    Json,
}

pub struct ConsoleObserver {
    format: OutputFormat,
}

impl ConsoleObserver {
    pub fn new(format: OutputFormat) -> Self {
        ConsoleObserver { format }
    }

    pub fn format_event(event: &Event, players: &[&String]) -> String {
        match event {
            Event::Dealt { hand_sizes } => format!(
                "Dealt {} cards to each player",
                hand_sizes.iter().map(|n| n.to_string()).join(" and ")
            ),
            Event::RoundStarted { round, hand_sizes } => {
                let sizes = players
                    .iter()
                    .zip(hand_sizes)
                    .map(|(p, n)| format!("Player {} has {} cards", p, n))
                    .join("\n");
                format!("Round {}\n{}", round, sizes)
            }
            Event::Drew { player, card } => format!("Player {} draws {}", players[*player], card),
            Event::War => "WAR!".to_string(),
            Event::RoundWon { player, cards } => {
                format!("Player {} takes {} cards", players[*player], cards)
            }
            Event::OutOfCards { player } => {
                format!("Player {} out of cards! Game Over", players[*player])
            }
            Event::CannotWar { player, cards_left } => format!(
                "Player {} unable to play war with {} cards! Game Over at War",
                players[*player], cards_left
            ),
            Event::Winner { player } => format!("Player {} Wins!", players[*player]),
            Event::RoundLimitReached { rounds } => {
                format!("No winner after {} rounds, the game is a draw", rounds)
            }
        }
    }
}

impl Observer for ConsoleObserver {
    fn notify(&mut self, event: &Event, players: &[&String]) {
        match self.format {
            OutputFormat::Text => println!("{}", ConsoleObserver::format_event(event, players)),
            OutputFormat::Json => match serde_json::to_string(event) {
                Ok(line) => println!("{}", line),
                Err(e) => error!("could not encode {:?}: {}", event, e),
            },
        }
    }
}
