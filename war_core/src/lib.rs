use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use deck::Deck;
use error::WarError;
use event::Event;
use game_logic::{GameOver, RoundOutcome};
use game_state::GameState;
use observer::Observer;
use player::PlayerId;
use settings::GameSettings;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game_logic;
pub mod game_state;
pub mod observer;
pub mod player;
pub mod settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Finished { game_over: GameOver, rounds: usize },
    /// The round limit was reached before anyone ran out.
    DrawOut { rounds: usize },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::Finished { game_over, .. } => Some(game_over.winner),
            GameOutcome::DrawOut { .. } => None,
        }
    }

    pub fn rounds(&self) -> usize {
        match self {
            GameOutcome::Finished { rounds, .. } | GameOutcome::DrawOut { rounds } => *rounds,
        }
    }
}

/// Shuffles a fresh deck and plays it out.
pub fn run_game<O>(settings: &GameSettings, observer: &mut O) -> Result<GameOutcome, WarError>
where
    O: Observer + ?Sized,
{
    let mut deck = Deck::new();
    match settings.seed {
        Some(seed) => deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed)),
        None => deck.shuffle(&mut rand::thread_rng()),
    }
    run_from_deck(deck, settings, observer)
}

/// Plays a game from the deck exactly as given, without shuffling.
pub fn run_from_deck<O>(
    mut deck: Deck,
    settings: &GameSettings,
    observer: &mut O,
) -> Result<GameOutcome, WarError>
where
    O: Observer + ?Sized,
{
    let mut state = GameState::new(settings.player_names.clone());
    state.deal(&mut deck)?;
    state.notify(
        observer,
        Event::Dealt {
            hand_sizes: state.hand_sizes(),
        },
    );

    loop {
        if let Some(limit) = settings.round_limit {
            if state.round >= limit {
                warn!("no winner after {} rounds", state.round);
                state.notify(observer, Event::RoundLimitReached { rounds: state.round });
                return Ok(GameOutcome::DrawOut {
                    rounds: state.round,
                });
            }
        }

        if let RoundOutcome::GameOver(game_over) = state.play_round(observer)? {
            info!(
                "{} wins after {} rounds ({:?})",
                state.player(game_over.winner).name(),
                state.round,
                game_over.reason
            );
            return Ok(GameOutcome::Finished {
                game_over,
                rounds: state.round,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        deck::Deck, event::Event, observer::EventLog, run_from_deck, run_game,
        settings::GameSettings, GameOutcome,
    };

    fn seeded(seed: u64) -> GameSettings {
        GameSettings {
            seed: Some(seed),
            round_limit: Some(20_000),
            ..GameSettings::default()
        }
    }

    #[test]
    fn run_game_should_end_with_a_winner_or_a_draw_out() {
        let mut log = EventLog::new();

        let outcome = run_game(&seeded(3), &mut log).unwrap();

        assert!(outcome.rounds() > 0);
        match outcome {
            GameOutcome::Finished { game_over, .. } => {
                assert_eq!(
                    log.events.last(),
                    Some(&Event::Winner {
                        player: game_over.winner
                    })
                );
            }
            GameOutcome::DrawOut { rounds } => {
                assert_eq!(log.events.last(), Some(&Event::RoundLimitReached { rounds }));
            }
        }
    }

    #[test]
    fn round_limit_should_stop_the_game() {
        let settings = GameSettings {
            round_limit: Some(1),
            ..GameSettings::default()
        };

        // unshuffled, the first round is Ace of Clubs against King of Clubs
        let outcome = run_from_deck(Deck::new(), &settings, &mut EventLog::new()).unwrap();

        assert_eq!(outcome, GameOutcome::DrawOut { rounds: 1 });
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn first_event_should_report_the_deal() {
        let mut log = EventLog::new();

        run_game(&seeded(5), &mut log).unwrap();

        assert_eq!(
            log.events.first(),
            Some(&Event::Dealt {
                hand_sizes: [26, 26]
            })
        );
    }
}
