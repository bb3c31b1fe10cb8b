use std::cmp::Ordering;

use log::debug;

use crate::{
    card::Card,
    error::WarError,
    event::Event,
    game_state::GameState,
    observer::Observer,
    player::{opponent, PlayerId},
};

/// Cards each side lays face down before a war is re-compared.
pub const WAR_CARDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    OutOfCards,
    CannotWar { cards_left: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub reason: GameOverReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { winner: PlayerId, cards: usize },
    GameOver(GameOver),
}

impl GameState {
    /// Plays one round, including every war it escalates into.
    pub fn play_round<O: Observer + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<RoundOutcome, WarError> {
        self.round += 1;
        debug!("round {} starts with hands {:?}", self.round, self.hand_sizes());
        self.notify(
            observer,
            Event::RoundStarted {
                round: self.round,
                hand_sizes: self.hand_sizes(),
            },
        );

        if let Some(loser) = self.first_player_with_fewer_than(1) {
            self.notify(observer, Event::OutOfCards { player: loser });
            return Ok(self.game_over(loser, GameOverReason::OutOfCards, observer));
        }

        let mut piles: [Vec<Card>; 2] = [vec![], vec![]];
        let mut newest = [self.commit(0, &mut piles)?, self.commit(1, &mut piles)?];

        loop {
            for (id, card) in newest.iter().enumerate() {
                debug!("{} draws {}", self.players[id].name(), card);
                self.notify(
                    observer,
                    Event::Drew {
                        player: id,
                        card: *card,
                    },
                );
            }

            match newest[0].compare_value(&newest[1]) {
                Ordering::Greater => return Ok(self.award(0, piles, observer)),
                Ordering::Less => return Ok(self.award(1, piles, observer)),
                Ordering::Equal => {
                    debug!("war on {}", newest[0].rank());
                    self.notify(observer, Event::War);

                    if let Some(loser) = self.first_player_with_fewer_than(WAR_CARDS) {
                        let cards_left = self.players[loser].hand_size();
                        self.notify(
                            observer,
                            Event::CannotWar {
                                player: loser,
                                cards_left,
                            },
                        );
                        return Ok(self.game_over(
                            loser,
                            GameOverReason::CannotWar { cards_left },
                            observer,
                        ));
                    }

                    for _ in 0..WAR_CARDS {
                        newest = [self.commit(0, &mut piles)?, self.commit(1, &mut piles)?];
                    }
                }
            }
        }
    }

    /// Moves the front card of a hand onto that player's pile.
    fn commit(&mut self, id: PlayerId, piles: &mut [Vec<Card>; 2]) -> Result<Card, WarError> {
        let card = self.players[id].remove_one()?;
        piles[id].push(card);
        Ok(card)
    }

    fn first_player_with_fewer_than(&self, cards: usize) -> Option<PlayerId> {
        (0..self.players.len()).find(|&id| self.players[id].hand_size() < cards)
    }

    fn award<O: Observer + ?Sized>(
        &mut self,
        winner: PlayerId,
        piles: [Vec<Card>; 2],
        observer: &mut O,
    ) -> RoundOutcome {
        let [mut own, mut other] = piles;
        if winner == 1 {
            std::mem::swap(&mut own, &mut other);
        }
        let cards = own.len() + other.len();
        debug_assert_eq!(self.card_count() + cards, self.total_cards());

        self.players[winner].add_cards(own);
        self.players[winner].add_cards(other);
        debug!("{} wins {} cards", self.players[winner].name(), cards);
        self.notify(
            observer,
            Event::RoundWon {
                player: winner,
                cards,
            },
        );
        RoundOutcome::Won { winner, cards }
    }

    fn game_over<O: Observer + ?Sized>(
        &self,
        loser: PlayerId,
        reason: GameOverReason,
        observer: &mut O,
    ) -> RoundOutcome {
        let winner = opponent(loser);
        self.notify(observer, Event::Winner { player: winner });
        RoundOutcome::GameOver(GameOver {
            winner,
            loser,
            reason,
        })
    }
}
