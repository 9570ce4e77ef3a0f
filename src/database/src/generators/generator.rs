use crate::StaffGenerator;
use guildball_core::club::{
    Club, Player, PlayerGenerator, PlayerPositionType, PlayerRequest, Staff,
    SCOUTING_KNOWLEDGE_FULL,
};
use guildball_core::config::GameConfig;
use guildball_core::nation::NationCollection;
use guildball_core::{Logging, SeededRng, SimulationResult};
use log::info;
use serde::{Deserialize, Serialize};

/// Positions of a full squad, repeated when a squad is larger.
pub const SQUAD_TEMPLATE: [(PlayerPositionType, usize); 4] = [
    (PlayerPositionType::Goalkeeper, 3),
    (PlayerPositionType::Defender, 7),
    (PlayerPositionType::Midfielder, 7),
    (PlayerPositionType::Forward, 5),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorld {
    pub players: Vec<Player>,
    pub staff: Vec<Staff>,
}

impl GeneratedWorld {
    /// Marks every player of `club_id` as fully scouted.
    pub fn reveal_club(&mut self, club_id: u32) -> usize {
        let mut revealed = 0;

        for player in self.players.iter_mut().filter(|p| p.club_id == club_id) {
            player.player_attributes.scouting_knowledge = SCOUTING_KNOWLEDGE_FULL;
            revealed += 1;
        }

        revealed
    }

    pub fn club_players(&self, club_id: u32) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.club_id == club_id)
    }
}

pub struct WorldGenerator;

impl WorldGenerator {
    pub fn initialize_world(
        seed: u32,
        clubs: &[Club],
        nations: &NationCollection,
    ) -> SimulationResult<GeneratedWorld> {
        Self::initialize_world_with(seed, clubs, nations, &GameConfig::default())
    }

    /// Clubs are processed in slice order from a single stream, so the same
    /// seed and inputs always give the same world.
    pub fn initialize_world_with(
        seed: u32,
        clubs: &[Club],
        nations: &NationCollection,
        config: &GameConfig,
    ) -> SimulationResult<GeneratedWorld> {
        Logging::estimate_result(
            || Self::generate(seed, clubs, nations, config.squad_size),
            "world generated",
        )
    }

    fn generate(
        seed: u32,
        clubs: &[Club],
        nations: &NationCollection,
        squad_size: usize,
    ) -> SimulationResult<GeneratedWorld> {
        let mut rng = SeededRng::new(seed);

        let player_generator = PlayerGenerator::new(nations);
        let staff_generator = StaffGenerator::new(nations);
        let positions = Self::squad_positions();

        let mut players = Vec::with_capacity(clubs.len() * squad_size);
        let mut staff = Vec::new();

        let mut next_player_id = 1;
        let mut next_staff_id = 1;

        for club in clubs {
            for slot in 0..squad_size {
                let position = positions[slot % positions.len()];
                let request = PlayerRequest::senior(next_player_id, position);

                players.push(player_generator.generate(&mut rng, club, request)?);
                next_player_id += 1;
            }

            let club_staff = staff_generator.generate_for_club(&mut rng, club, next_staff_id)?;
            next_staff_id += club_staff.len() as u32;
            staff.extend(club_staff);
        }

        info!(
            "🌍 world generated from seed {}: {} clubs, {} players, {} staff",
            seed,
            clubs.len(),
            players.len(),
            staff.len()
        );

        Ok(GeneratedWorld { players, staff })
    }

    pub fn squad_positions() -> Vec<PlayerPositionType> {
        SQUAD_TEMPLATE
            .iter()
            .flat_map(|(position, count)| std::iter::repeat_n(*position, *count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;
    use guildball_core::club::{ABILITY_MAX, SCOUTING_KNOWLEDGE_DEFAULT};
    use std::collections::HashSet;

    fn reference() -> (Vec<Club>, NationCollection) {
        let database = DatabaseLoader::load().unwrap();

        (database.clubs().unwrap(), database.nations())
    }

    #[test]
    fn test_squad_template_has_22_slots() {
        let positions = WorldGenerator::squad_positions();

        assert_eq!(positions.len(), 22);
        assert_eq!(positions.iter().filter(|p| **p == PlayerPositionType::Goalkeeper).count(), 3);
        assert_eq!(positions.iter().filter(|p| **p == PlayerPositionType::Forward).count(), 5);
    }

    #[test]
    fn test_world_counts_and_ids() {
        let (clubs, nations) = reference();

        let world = WorldGenerator::initialize_world(42, &clubs, &nations).unwrap();

        assert_eq!(world.players.len(), clubs.len() * 22);
        assert_eq!(world.staff.len(), clubs.len() * 6);

        let ids: Vec<u32> = world.players.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=world.players.len() as u32).collect::<Vec<_>>());

        let staff_ids: HashSet<u32> = world.staff.iter().map(|s| s.id).collect();
        assert_eq!(staff_ids.len(), world.staff.len());

        for club in &clubs {
            assert_eq!(world.club_players(club.id).count(), 22);
            assert_eq!(
                world
                    .club_players(club.id)
                    .filter(|p| p.position == PlayerPositionType::Goalkeeper)
                    .count(),
                3
            );
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let (clubs, nations) = reference();

        let first = WorldGenerator::initialize_world(7, &clubs, &nations).unwrap();
        let second = WorldGenerator::initialize_world(7, &clubs, &nations).unwrap();
        let other = WorldGenerator::initialize_world(8, &clubs, &nations).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_generated_players_hold_invariants() {
        let (clubs, nations) = reference();
        let config = GameConfig {
            squad_size: 1000,
            ..GameConfig::default()
        };

        let world = WorldGenerator::initialize_world_with(3, &clubs, &nations, &config).unwrap();

        assert_eq!(world.players.len(), 10_000);
        for player in &world.players {
            assert!(player.validate().is_ok(), "player {} invalid", player.id);
            assert!(player.current_ability() <= player.potential_ability());
            assert!(player.potential_ability() <= ABILITY_MAX);
            assert!((18..=34).contains(&player.age));
            assert_eq!(player.player_attributes.scouting_knowledge, SCOUTING_KNOWLEDGE_DEFAULT);
        }
    }

    #[test]
    fn test_reveal_club() {
        let (clubs, nations) = reference();
        let mut world = WorldGenerator::initialize_world(11, &clubs, &nations).unwrap();

        assert_eq!(world.reveal_club(clubs[0].id), 22);
        assert!(world.club_players(clubs[0].id).all(|p| p.player_attributes.is_fully_scouted()));
        assert!(!world.club_players(clubs[1].id).any(|p| p.player_attributes.is_fully_scouted()));
    }

    #[test]
    fn test_no_clubs_no_world() {
        let (_, nations) = reference();

        let world = WorldGenerator::initialize_world(1, &[], &nations).unwrap();

        assert!(world.players.is_empty());
        assert!(world.staff.is_empty());
    }
}
