use crate::club::Player;

pub struct ProduceYouthPlayersResult {
    pub players: Vec<Player>,
}

impl ProduceYouthPlayersResult {
    pub fn new(players: Vec<Player>) -> Self {
        ProduceYouthPlayersResult { players }
    }

    pub fn process(self, roster: &mut Vec<Player>) -> usize {
        let count = self.players.len();
        roster.extend(self.players);
        count
    }
}
