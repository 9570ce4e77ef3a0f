use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Morale {
    Abysmal,
    Low,
    #[default]
    Neutral,
    Good,
    Superb,
}

impl Morale {
    const LADDER: [Morale; 5] = [
        Morale::Abysmal,
        Morale::Low,
        Morale::Neutral,
        Morale::Good,
        Morale::Superb,
    ];

    /// Moves `steps` rungs up (positive) or down the ladder, saturating at the ends.
    pub fn shifted(self, steps: i32) -> Morale {
        let idx = Self::LADDER.iter().position(|m| *m == self).unwrap_or(2) as i32;
        let target = (idx + steps).clamp(0, Self::LADDER.len() as i32 - 1);

        Self::LADDER[target as usize]
    }

    pub fn is_happy(&self) -> bool {
        *self > Morale::Neutral
    }

    pub fn description(&self) -> &'static str {
        match self {
            Morale::Abysmal => "abysmal",
            Morale::Low => "low",
            Morale::Neutral => "settled",
            Morale::Good => "good",
            Morale::Superb => "superb",
        }
    }
}
