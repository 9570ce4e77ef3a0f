use crate::club::academy::result::ProduceYouthPlayersResult;
use crate::club::{Club, Player, PlayerGenerator, PlayerRequest};
use crate::error::SimulationResult;
use crate::nation::NationCollection;
use crate::utils::SeededRng;
use log::debug;

pub struct ClubAcademy<'c> {
    club: &'c Club,
    intake_size: usize,
}

impl<'c> ClubAcademy<'c> {
    pub fn new(club: &'c Club, intake_size: usize) -> Self {
        ClubAcademy { club, intake_size }
    }

    pub fn should_produce_players(&self, day: u32) -> bool {
        day == self.club.youth_intake_day
    }

    /// Generates the yearly intake. Ids continue after `last_player_id`.
    pub fn produce_youth_players(
        &self,
        nations: &NationCollection,
        rng: &mut SeededRng,
        last_player_id: u32,
        fully_scouted: bool,
    ) -> SimulationResult<ProduceYouthPlayersResult> {
        debug!("🎓 academy: {} starting yearly youth intake", self.club.name);

        let generator = PlayerGenerator::new(nations);
        let mut generated_players = Vec::with_capacity(self.intake_size);

        for i in 0..self.intake_size {
            let request = PlayerRequest::youth(last_player_id + 1 + i as u32).scouted(fully_scouted);
            let player = generator.generate(rng, self.club, request)?;

            debug!(
                "👤 academy: {} generated youth player: {} ({}, age {})",
                self.club.name,
                player.full_name,
                player.position.get_short_name(),
                player.age
            );

            generated_players.push(player);
        }

        debug!(
            "✅ academy: {} completed youth intake with {} new players",
            self.club.name,
            generated_players.len()
        );

        Ok(ProduceYouthPlayersResult::new(generated_players))
    }
}

/// Highest id in use, so new players never collide with existing ones.
pub fn last_player_id(players: &[Player]) -> u32 {
    players.iter().map(|p| p.id).max().unwrap_or(0)
}
