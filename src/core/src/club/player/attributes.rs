use serde::{Deserialize, Serialize};

pub const ABILITY_MIN: u8 = 1;
pub const ABILITY_MAX: u8 = 100;

pub const SCOUTING_KNOWLEDGE_DEFAULT: u8 = 20;
pub const SCOUTING_KNOWLEDGE_FULL: u8 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    //ability
    pub current_ability: u8,
    pub potential_ability: u8,

    pub value: u64,

    // how much of the skill bundle the manager can see (0-100)
    pub scouting_knowledge: u8,
}

impl PlayerAttributes {
    /// Raises current ability by `amount`, never past potential.
    pub fn improve(&mut self, amount: u8) -> u8 {
        let before = self.current_ability;

        self.current_ability = self
            .current_ability
            .saturating_add(amount)
            .min(self.potential_ability);

        self.current_ability - before
    }

    pub fn has_room_to_grow(&self) -> bool {
        self.current_ability < self.potential_ability
    }

    pub fn add_scouting_knowledge(&mut self, amount: u8) {
        self.scouting_knowledge = self
            .scouting_knowledge
            .saturating_add(amount)
            .min(SCOUTING_KNOWLEDGE_FULL);
    }

    pub fn is_fully_scouted(&self) -> bool {
        self.scouting_knowledge >= SCOUTING_KNOWLEDGE_FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improve_never_exceeds_potential() {
        let mut attributes = PlayerAttributes {
            current_ability: 60,
            potential_ability: 62,
            ..Default::default()
        };

        assert_eq!(attributes.improve(5), 2);
        assert_eq!(attributes.current_ability, 62);
        assert!(!attributes.has_room_to_grow());
        assert_eq!(attributes.improve(1), 0);
    }

    #[test]
    fn test_scouting_knowledge_caps_at_full() {
        let mut attributes = PlayerAttributes {
            scouting_knowledge: 95,
            ..Default::default()
        };

        attributes.add_scouting_knowledge(30);
        assert!(attributes.is_fully_scouted());
        assert_eq!(attributes.scouting_knowledge, 100);
    }
}
