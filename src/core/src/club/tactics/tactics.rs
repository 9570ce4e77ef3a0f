use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tactics {
    pub formation: Formation,
    pub mentality: Mentality,
    pub pressing: u8,       // 1-20
    pub defensive_line: u8, // 1-20
}

impl Default for Tactics {
    fn default() -> Self {
        Tactics::new(Formation::T442, Mentality::Balanced)
    }
}

impl Tactics {
    pub fn new(formation: Formation, mentality: Mentality) -> Self {
        Tactics {
            formation,
            mentality,
            pressing: 10,
            defensive_line: 10,
        }
    }

    pub fn with_pressing(mut self, pressing: u8, defensive_line: u8) -> Self {
        self.pressing = pressing.clamp(1, 20);
        self.defensive_line = defensive_line.clamp(1, 20);
        self
    }

    pub fn formation_description(&self) -> &'static str {
        self.formation.description()
    }

    pub fn is_attacking(&self) -> bool {
        self.mentality == Mentality::Attacking
    }

    pub fn is_defensive(&self) -> bool {
        self.mentality == Mentality::Defensive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    T442,
    T433,
    T451,
    T352,
    T343,
    T4231,
}

impl Formation {
    pub fn description(&self) -> &'static str {
        match self {
            Formation::T442 => "4-4-2",
            Formation::T433 => "4-3-3",
            Formation::T451 => "4-5-1",
            Formation::T352 => "3-5-2",
            Formation::T343 => "3-4-3",
            Formation::T4231 => "4-2-3-1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mentality {
    Defensive,
    Balanced,
    Attacking,
}

impl Mentality {
    /// Flat adjustment to a side's rating in the whole-match simulator.
    pub fn rating_modifier(&self) -> f32 {
        match self {
            Mentality::Defensive => -5.0,
            Mentality::Balanced => 0.0,
            Mentality::Attacking => 5.0,
        }
    }

    /// Shift applied to a side's share of attacks in the live engine.
    pub fn attack_share_shift(&self) -> f32 {
        match self {
            Mentality::Defensive => -0.05,
            Mentality::Balanced => 0.0,
            Mentality::Attacking => 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentality_modifiers_are_symmetric() {
        assert_eq!(Mentality::Attacking.rating_modifier(), 5.0);
        assert_eq!(Mentality::Defensive.rating_modifier(), -5.0);
        assert_eq!(Mentality::Balanced.rating_modifier(), 0.0);
        assert_eq!(
            Mentality::Attacking.attack_share_shift(),
            -Mentality::Defensive.attack_share_shift()
        );
    }

    #[test]
    fn test_pressing_is_clamped() {
        let tactics = Tactics::new(Formation::T433, Mentality::Attacking).with_pressing(40, 0);

        assert_eq!(tactics.pressing, 20);
        assert_eq!(tactics.defensive_line, 1);
        assert_eq!(tactics.formation_description(), "4-3-3");
        assert!(tactics.is_attacking());
    }
}
