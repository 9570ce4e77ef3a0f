use crate::club::player::training::result::PlayerTrainingResult;
use crate::club::{AttributeKind, Player};
use crate::utils::SeededRng;

/// Players at or above this age have stopped developing.
pub const TRAINING_AGE_LIMIT: u8 = 24;
const GROWTH_DIVISOR: f64 = 50.0;

#[derive(Debug)]
pub struct PlayerTraining;

impl PlayerTraining {
    /// One weekly session. Young players with headroom improve by one
    /// ability point with probability `(potential - current) / 50`.
    pub fn train(player: &Player, rng: &mut SeededRng) -> PlayerTrainingResult {
        if player.age >= TRAINING_AGE_LIMIT || !player.player_attributes.has_room_to_grow() {
            return PlayerTrainingResult::empty(player.id);
        }

        let headroom = (player.potential_ability() - player.current_ability()) as f64;

        if !rng.chance(headroom / GROWTH_DIVISOR) {
            return PlayerTrainingResult::empty(player.id);
        }

        let focus = rng
            .choice(&AttributeKind::ALL)
            .ok()
            .copied();

        PlayerTrainingResult::new(player.id, 1, focus)
    }

    pub fn train_all(players: &[Player], rng: &mut SeededRng) -> Vec<PlayerTrainingResult> {
        players
            .iter()
            .map(|player| Self::train(player, rng))
            .filter(|result| !result.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerAttributes, PlayerPositionType, PlayerSkills};
    use crate::shared::FullName;

    fn create_test_player(id: u32, age: u8, current: u8, potential: u8) -> Player {
        let mut skills = PlayerSkills::default();
        for kind in AttributeKind::ALL {
            skills.set(kind, 10);
        }

        Player::builder()
            .id(id)
            .full_name(FullName::new("Test".to_string(), format!("Player{}", id)))
            .club_id(1)
            .nation_id(1)
            .age(age)
            .position(PlayerPositionType::Midfielder)
            .skills(skills)
            .player_attributes(PlayerAttributes {
                current_ability: current,
                potential_ability: potential,
                ..Default::default()
            })
            .build()
            .expect("Failed to build test player")
    }

    #[test]
    fn test_veterans_do_not_train() {
        let player = create_test_player(1, 24, 40, 90);
        let mut rng = SeededRng::new(1);

        for _ in 0..200 {
            assert!(PlayerTraining::train(&player, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_capped_players_do_not_train() {
        let player = create_test_player(1, 18, 70, 70);
        let mut rng = SeededRng::new(2);

        for _ in 0..200 {
            assert!(PlayerTraining::train(&player, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_large_headroom_always_grows() {
        // headroom of 50 or more makes the chance certain
        let player = create_test_player(1, 17, 30, 90);
        let mut rng = SeededRng::new(3);

        let result = PlayerTraining::train(&player, &mut rng);

        assert_eq!(result.ability_gain, 1);
    }

    #[test]
    fn test_training_never_exceeds_potential() {
        let mut players: Vec<Player> = (1..=30)
            .map(|id| create_test_player(id, 16, 50 + (id as u8 % 10), 62))
            .collect();
        let mut rng = SeededRng::new(4);

        for _ in 0..100 {
            let results = PlayerTraining::train_all(&players, &mut rng);
            for result in results {
                result.process(&mut players);
            }
        }

        for player in &players {
            assert!(player.current_ability() <= player.potential_ability());
            assert!(player.validate().is_ok());
        }
        assert!(players.iter().any(|p| p.current_ability() == 62));
    }
}
