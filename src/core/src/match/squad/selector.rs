use crate::club::{AttributeKind, Player, PlayerPositionType, PlayerSkills, Playstyle};
use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_SQUAD_SIZE: usize = 11;

/// The match-time view of a player, detached from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub id: u32,
    pub club_id: u32,
    pub name: String,
    pub position: PlayerPositionType,
    pub current_ability: u8,
    pub playstyle: Playstyle,
    pub skills: PlayerSkills,
}

impl MatchPlayer {
    pub fn from_player(player: &Player) -> Self {
        MatchPlayer {
            id: player.id,
            club_id: player.club_id,
            name: player.full_name.display_name().to_string(),
            position: player.position,
            current_ability: player.current_ability(),
            playstyle: player.playstyle,
            skills: player.skills,
        }
    }

    /// Attribute as used in a contest, scaled by the playstyle.
    pub fn effective(&self, attribute: AttributeKind) -> f32 {
        self.skills.get(attribute) as f32 * self.playstyle.multiplier(attribute)
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position == PlayerPositionType::Goalkeeper
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSquad {
    pub club_id: u32,
    pub main_squad: Vec<MatchPlayer>,
}

impl MatchSquad {
    pub fn average_ability(&self) -> f32 {
        if self.main_squad.is_empty() {
            return 0.0;
        }

        let total: u32 = self.main_squad.iter().map(|p| p.current_ability as u32).sum();
        total as f32 / self.main_squad.len() as f32
    }

    /// The XI's goalkeeper, or the most agile member standing in.
    pub fn keeper(&self) -> Option<&MatchPlayer> {
        self.main_squad.iter().find(|p| p.is_goalkeeper()).or_else(|| {
            self.main_squad
                .iter()
                .max_by(|a, b| {
                    a.skills
                        .physical
                        .agility
                        .cmp(&b.skills.physical.agility)
                        .then_with(|| b.id.cmp(&a.id))
                })
        })
    }

    /// Non-keepers, or the whole XI when nobody else is available.
    pub fn outfield(&self) -> Vec<&MatchPlayer> {
        let outfield: Vec<&MatchPlayer> =
            self.main_squad.iter().filter(|p| !p.is_goalkeeper()).collect();

        if outfield.is_empty() {
            self.main_squad.iter().collect()
        } else {
            outfield
        }
    }

    pub fn by_position(&self, position: PlayerPositionType) -> Vec<&MatchPlayer> {
        self.main_squad.iter().filter(|p| p.position == position).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.main_squad.is_empty()
    }
}

pub struct SquadSelector;

impl SquadSelector {
    /// Best XI by current ability; ties keep the lower id.
    pub fn select(club_id: u32, players: &[Player]) -> MatchSquad {
        let main_squad: Vec<MatchPlayer> = players
            .iter()
            .filter(|p| p.club_id == club_id)
            .sorted_by(|a, b| Self::compare(a, b))
            .take(DEFAULT_SQUAD_SIZE)
            .map(MatchPlayer::from_player)
            .collect();

        if main_squad.len() < DEFAULT_SQUAD_SIZE {
            warn!(
                "not enough players for a full squad at club {}: {}",
                club_id,
                main_squad.len()
            );
        }

        debug!("selected {} players for club {}", main_squad.len(), club_id);

        MatchSquad { club_id, main_squad }
    }

    fn compare(a: &Player, b: &Player) -> Ordering {
        b.current_ability()
            .cmp(&a.current_ability())
            .then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerAttributes;
    use crate::shared::FullName;

    fn create_test_player(id: u32, club_id: u32, position: PlayerPositionType, ability: u8, agility: u8) -> Player {
        let mut skills = PlayerSkills::default();
        for kind in AttributeKind::ALL {
            skills.set(kind, 10);
        }
        skills.physical.agility = agility;

        Player::builder()
            .id(id)
            .full_name(FullName::new("Test".to_string(), format!("Player{}", id)))
            .club_id(club_id)
            .nation_id(1)
            .age(25)
            .position(position)
            .skills(skills)
            .player_attributes(PlayerAttributes {
                current_ability: ability,
                potential_ability: 99,
                ..Default::default()
            })
            .build()
            .expect("Failed to build test player")
    }

    #[test]
    fn test_select_takes_top_eleven_of_club() {
        let mut players: Vec<Player> = (1..=16)
            .map(|id| create_test_player(id, 1, PlayerPositionType::Midfielder, 40 + id as u8, 10))
            .collect();
        players.push(create_test_player(99, 2, PlayerPositionType::Forward, 99, 10));

        let squad = SquadSelector::select(1, &players);

        assert_eq!(squad.main_squad.len(), 11);
        assert!(squad.main_squad.iter().all(|p| p.club_id == 1));
        assert_eq!(squad.main_squad[0].id, 16);
        assert_eq!(squad.main_squad[10].id, 6);
    }

    #[test]
    fn test_short_squad_selects_everyone() {
        let players: Vec<Player> = (1..=4)
            .map(|id| create_test_player(id, 1, PlayerPositionType::Defender, 50, 10))
            .collect();

        assert_eq!(SquadSelector::select(1, &players).main_squad.len(), 4);
        assert!(SquadSelector::select(7, &players).is_empty());
    }

    #[test]
    fn test_keeper_prefers_goalkeeper() {
        let players = vec![
            create_test_player(1, 1, PlayerPositionType::Forward, 80, 20),
            create_test_player(2, 1, PlayerPositionType::Goalkeeper, 40, 5),
        ];

        let squad = SquadSelector::select(1, &players);

        assert_eq!(squad.keeper().map(|p| p.id), Some(2));
        assert_eq!(squad.outfield().len(), 1);
    }

    #[test]
    fn test_keeper_falls_back_to_most_agile() {
        let players = vec![
            create_test_player(1, 1, PlayerPositionType::Forward, 80, 12),
            create_test_player(2, 1, PlayerPositionType::Defender, 70, 17),
            create_test_player(3, 1, PlayerPositionType::Midfielder, 60, 9),
        ];

        let squad = SquadSelector::select(1, &players);

        assert_eq!(squad.keeper().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_average_ability() {
        let players = vec![
            create_test_player(1, 1, PlayerPositionType::Forward, 80, 12),
            create_test_player(2, 1, PlayerPositionType::Defender, 60, 17),
        ];

        assert_eq!(SquadSelector::select(1, &players).average_ability(), 70.0);
        assert_eq!(MatchSquad::default().average_ability(), 0.0);
    }
}
