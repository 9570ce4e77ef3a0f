use crate::club::player::builder::PlayerBuilder;
use crate::club::{
    Morale, PlayerAttributes, PlayerSkills, PlayerTrait, Playstyle, Rarity, ATTRIBUTE_MAX,
    ATTRIBUTE_MIN,
};
use crate::error::{SimulationError, SimulationResult};
use crate::shared::FullName;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,
    pub club_id: u32,
    pub nation_id: u32,
    pub age: u8,

    pub position: PlayerPositionType,
    pub preferred_foot: PlayerPreferredFoot,
    pub rarity: Rarity,
    pub playstyle: Playstyle,
    pub skills: PlayerSkills,
    pub player_attributes: PlayerAttributes,
    pub morale: Morale,
    pub traits: Vec<PlayerTrait>,
    pub squad_status: PlayerSquadStatus,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn current_ability(&self) -> u8 {
        self.player_attributes.current_ability
    }

    pub fn potential_ability(&self) -> u8 {
        self.player_attributes.potential_ability
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position == PlayerPositionType::Goalkeeper
    }

    /// Checks the generation invariants. A failure here is a generator bug.
    pub fn validate(&self) -> SimulationResult<()> {
        if self.player_attributes.current_ability > self.player_attributes.potential_ability {
            return Err(SimulationError::InvariantViolation {
                player_id: self.id,
                reason: format!(
                    "current ability {} above potential {}",
                    self.player_attributes.current_ability, self.player_attributes.potential_ability
                ),
            });
        }

        if let Some((kind, value)) = self.skills.out_of_range() {
            return Err(SimulationError::InvariantViolation {
                player_id: self.id,
                reason: format!(
                    "{:?} = {} outside {}..={}",
                    kind, value, ATTRIBUTE_MIN, ATTRIBUTE_MAX
                ),
            });
        }

        Ok(())
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}, {}", self.full_name, self.position.get_short_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 4] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::Defender,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Forward,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::Defender => "DF",
            PlayerPositionType::Midfielder => "MF",
            PlayerPositionType::Forward => "FW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPreferredFoot {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSquadStatus {
    KeyPlayer,
    FirstTeam,
    Rotation,
    Prospect,
}

impl PlayerSquadStatus {
    pub fn from_ability(current_ability: u8, is_youth: bool) -> Self {
        if is_youth {
            return PlayerSquadStatus::Prospect;
        }

        match current_ability {
            75.. => PlayerSquadStatus::KeyPlayer,
            60..=74 => PlayerSquadStatus::FirstTeam,
            _ => PlayerSquadStatus::Rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::AttributeKind;

    fn valid_skills() -> PlayerSkills {
        let mut skills = PlayerSkills::default();
        for kind in AttributeKind::ALL {
            skills.set(kind, 10);
        }
        skills
    }

    fn create_test_player(current: u8, potential: u8) -> Player {
        Player::builder()
            .id(1)
            .full_name(FullName::new("Test".to_string(), "Player".to_string()))
            .club_id(1)
            .nation_id(1)
            .age(24)
            .position(PlayerPositionType::Midfielder)
            .skills(valid_skills())
            .player_attributes(PlayerAttributes {
                current_ability: current,
                potential_ability: potential,
                ..Default::default()
            })
            .build()
            .expect("Failed to build test player")
    }

    #[test]
    fn test_validate_accepts_consistent_player() {
        assert!(create_test_player(60, 70).validate().is_ok());
        assert!(create_test_player(70, 70).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_current_above_potential() {
        let result = create_test_player(71, 70).validate();

        assert!(matches!(result, Err(SimulationError::InvariantViolation { player_id: 1, .. })));
    }

    #[test]
    fn test_validate_rejects_out_of_range_attribute() {
        let mut player = create_test_player(50, 60);
        player.skills.arcane.warding = 0;

        assert!(player.validate().is_err());
    }

    #[test]
    fn test_squad_status_from_ability() {
        assert_eq!(PlayerSquadStatus::from_ability(80, false), PlayerSquadStatus::KeyPlayer);
        assert_eq!(PlayerSquadStatus::from_ability(60, false), PlayerSquadStatus::FirstTeam);
        assert_eq!(PlayerSquadStatus::from_ability(40, false), PlayerSquadStatus::Rotation);
        assert_eq!(PlayerSquadStatus::from_ability(80, true), PlayerSquadStatus::Prospect);
    }
}
