use crate::{
    card::Card,
    deck::Deck,
    error::WarError,
    event::Event,
    observer::Observer,
    player::{Player, PlayerId},
};

pub struct GameState {
    pub(crate) players: [Player; 2],
    pub round: usize,
    total_cards: usize,
}

impl GameState {
    pub fn new(names: [String; 2]) -> Self {
        let [one, two] = names;
        GameState {
            players: [Player::new(one), Player::new(two)],
            round: 0,
            total_cards: 0,
        }
    }

    /// Starts from hands that are already dealt, front card first.
    pub fn with_hands(names: [String; 2], hands: [Vec<Card>; 2]) -> Self {
        let mut state = GameState::new(names);
        for (player, hand) in state.players.iter_mut().zip(hands) {
            state.total_cards += hand.len();
            player.add_cards(hand);
        }
        state
    }

    /// Deals one card at a time, alternating and starting with the first
    /// player, until the deck is empty.
    pub fn deal(&mut self, deck: &mut Deck) -> Result<(), WarError> {
        while !deck.is_empty() {
            for player in self.players.iter_mut() {
                player.add_card(deck.deal_one()?);
                self.total_cards += 1;
            }
        }
        Ok(())
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn player_names(&self) -> Vec<&String> {
        self.players.iter().map(|p| p.name()).collect()
    }

    pub fn hand_sizes(&self) -> [usize; 2] {
        [self.players[0].hand_size(), self.players[1].hand_size()]
    }

    /// Cards held in both hands, i.e. not on the table.
    pub fn card_count(&self) -> usize {
        self.players.iter().map(|p| p.hand_size()).sum()
    }

    pub(crate) fn notify<O: Observer + ?Sized>(&self, observer: &mut O, event: Event) {
        observer.notify(&event, &self.player_names());
    }
}
