use crate::club::{AttributeKind, PlayerPositionType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Playstyle {
    Balanced,
    Poacher,
    Trickster,
    Enforcer,
    Anchor,
    Spellblade,
    Sentinel,
}

impl Playstyle {
    pub fn pool_for(position: PlayerPositionType) -> &'static [Playstyle] {
        match position {
            PlayerPositionType::Goalkeeper => &[Playstyle::Sentinel, Playstyle::Balanced],
            PlayerPositionType::Defender => {
                &[Playstyle::Enforcer, Playstyle::Anchor, Playstyle::Balanced]
            }
            PlayerPositionType::Midfielder => &[
                Playstyle::Trickster,
                Playstyle::Anchor,
                Playstyle::Spellblade,
                Playstyle::Balanced,
            ],
            PlayerPositionType::Forward => {
                &[Playstyle::Poacher, Playstyle::Trickster, Playstyle::Spellblade]
            }
        }
    }

    /// Scales an attribute when the player uses it in a contest.
    pub fn multiplier(&self, attribute: AttributeKind) -> f32 {
        match (self, attribute) {
            (Playstyle::Poacher, AttributeKind::Shooting) => 1.15,
            (Playstyle::Poacher, AttributeKind::Dribbling) => 0.95,
            (Playstyle::Trickster, AttributeKind::Dribbling) => 1.15,
            (Playstyle::Trickster, AttributeKind::Shooting) => 0.95,
            (Playstyle::Enforcer, AttributeKind::Tackling) => 1.15,
            (Playstyle::Anchor, AttributeKind::Tackling) => 1.1,
            (Playstyle::Anchor, AttributeKind::Dribbling) => 0.95,
            (Playstyle::Spellblade, AttributeKind::Shooting) => 1.05,
            (Playstyle::Spellblade, AttributeKind::Dribbling) => 1.05,
            (Playstyle::Sentinel, AttributeKind::Agility) => 1.1,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_has_a_pool() {
        for position in PlayerPositionType::ALL {
            assert!(!Playstyle::pool_for(position).is_empty());
        }
    }

    #[test]
    fn test_balanced_is_neutral() {
        for attribute in AttributeKind::ALL {
            assert_eq!(Playstyle::Balanced.multiplier(attribute), 1.0);
        }
        assert!(Playstyle::Poacher.multiplier(AttributeKind::Shooting) > 1.0);
    }
}
