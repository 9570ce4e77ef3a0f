use serde::{Deserialize, Serialize};

pub const ATTRIBUTE_MIN: u8 = 1;
pub const ATTRIBUTE_MAX: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Pace,
    Strength,
    Stamina,
    Agility,
    Dribbling,
    Passing,
    Shooting,
    Tackling,
    FirstTouch,
    Vision,
    Composure,
    Positioning,
    WorkRate,
    Spellcraft,
    Warding,
    Channeling,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 16] = [
        AttributeKind::Pace,
        AttributeKind::Strength,
        AttributeKind::Stamina,
        AttributeKind::Agility,
        AttributeKind::Dribbling,
        AttributeKind::Passing,
        AttributeKind::Shooting,
        AttributeKind::Tackling,
        AttributeKind::FirstTouch,
        AttributeKind::Vision,
        AttributeKind::Composure,
        AttributeKind::Positioning,
        AttributeKind::WorkRate,
        AttributeKind::Spellcraft,
        AttributeKind::Warding,
        AttributeKind::Channeling,
    ];
}

pub fn clamp_attribute(value: i32) -> u8 {
    value.clamp(ATTRIBUTE_MIN as i32, ATTRIBUTE_MAX as i32) as u8
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub physical: Physical,
    pub technical: Technical,
    pub mental: Mental,
    pub arcane: Arcane,
}

impl PlayerSkills {
    pub fn get(&self, kind: AttributeKind) -> u8 {
        match kind {
            AttributeKind::Pace => self.physical.pace,
            AttributeKind::Strength => self.physical.strength,
            AttributeKind::Stamina => self.physical.stamina,
            AttributeKind::Agility => self.physical.agility,
            AttributeKind::Dribbling => self.technical.dribbling,
            AttributeKind::Passing => self.technical.passing,
            AttributeKind::Shooting => self.technical.shooting,
            AttributeKind::Tackling => self.technical.tackling,
            AttributeKind::FirstTouch => self.technical.first_touch,
            AttributeKind::Vision => self.mental.vision,
            AttributeKind::Composure => self.mental.composure,
            AttributeKind::Positioning => self.mental.positioning,
            AttributeKind::WorkRate => self.mental.work_rate,
            AttributeKind::Spellcraft => self.arcane.spellcraft,
            AttributeKind::Warding => self.arcane.warding,
            AttributeKind::Channeling => self.arcane.channeling,
        }
    }

    pub fn set(&mut self, kind: AttributeKind, value: u8) {
        let slot = match kind {
            AttributeKind::Pace => &mut self.physical.pace,
            AttributeKind::Strength => &mut self.physical.strength,
            AttributeKind::Stamina => &mut self.physical.stamina,
            AttributeKind::Agility => &mut self.physical.agility,
            AttributeKind::Dribbling => &mut self.technical.dribbling,
            AttributeKind::Passing => &mut self.technical.passing,
            AttributeKind::Shooting => &mut self.technical.shooting,
            AttributeKind::Tackling => &mut self.technical.tackling,
            AttributeKind::FirstTouch => &mut self.technical.first_touch,
            AttributeKind::Vision => &mut self.mental.vision,
            AttributeKind::Composure => &mut self.mental.composure,
            AttributeKind::Positioning => &mut self.mental.positioning,
            AttributeKind::WorkRate => &mut self.mental.work_rate,
            AttributeKind::Spellcraft => &mut self.arcane.spellcraft,
            AttributeKind::Warding => &mut self.arcane.warding,
            AttributeKind::Channeling => &mut self.arcane.channeling,
        };

        *slot = clamp_attribute(value as i32);
    }

    pub fn average(&self) -> f32 {
        let total: u32 = AttributeKind::ALL.iter().map(|k| self.get(*k) as u32).sum();

        total as f32 / AttributeKind::ALL.len() as f32
    }

    /// First attribute outside `ATTRIBUTE_MIN..=ATTRIBUTE_MAX`, if any.
    pub fn out_of_range(&self) -> Option<(AttributeKind, u8)> {
        AttributeKind::ALL
            .iter()
            .map(|k| (*k, self.get(*k)))
            .find(|(_, v)| !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(v))
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Physical {
    pub pace: u8,
    pub strength: u8,
    pub stamina: u8,
    pub agility: u8,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technical {
    pub dribbling: u8,
    pub passing: u8,
    pub shooting: u8,
    pub tackling: u8,
    pub first_touch: u8,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mental {
    pub vision: u8,
    pub composure: u8,
    pub positioning: u8,
    pub work_rate: u8,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arcane {
    pub spellcraft: u8,
    pub warding: u8,
    pub channeling: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_every_kind() {
        let mut skills = PlayerSkills::default();

        for (i, kind) in AttributeKind::ALL.iter().enumerate() {
            skills.set(*kind, (i + 1) as u8);
        }

        for (i, kind) in AttributeKind::ALL.iter().enumerate() {
            assert_eq!(skills.get(*kind), (i + 1) as u8);
        }
    }

    #[test]
    fn test_set_clamps_to_valid_range() {
        let mut skills = PlayerSkills::default();

        skills.set(AttributeKind::Shooting, 45);
        assert_eq!(skills.technical.shooting, ATTRIBUTE_MAX);

        skills.set(AttributeKind::Warding, 0);
        assert_eq!(skills.arcane.warding, ATTRIBUTE_MIN);
    }

    #[test]
    fn test_default_bundle_is_out_of_range() {
        let skills = PlayerSkills::default();

        assert_eq!(skills.out_of_range(), Some((AttributeKind::Pace, 0)));
    }
}
