/// Knobs for a single run. The rules themselves are fixed.
#[derive(Debug, Clone)]
pub struct GameSettings {
    /// Seed for the shuffle. `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Rounds after which the game is called a draw-out. `None` plays until
    /// someone wins, however long that takes.
    pub round_limit: Option<usize>,
    pub player_names: [String; 2],
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            seed: None,
            round_limit: None,
            player_names: ["One".to_string(), "Two".to_string()],
        }
    }
}
