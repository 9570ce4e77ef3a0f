use serde::{Deserialize, Serialize};

const LEGEND_THRESHOLD: f64 = 0.01;
const EPIC_THRESHOLD: f64 = 0.10;
const RARE_THRESHOLD: f64 = 0.40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legend,
}

impl Rarity {
    /// Maps a `[0, 1)` roll onto the fixed cumulative thresholds. Lower rolls
    /// are rarer, so the mapping is monotonic.
    pub fn from_roll(roll: f64) -> Self {
        if roll < LEGEND_THRESHOLD {
            Rarity::Legend
        } else if roll < EPIC_THRESHOLD {
            Rarity::Epic
        } else if roll < RARE_THRESHOLD {
            Rarity::Rare
        } else {
            Rarity::Common
        }
    }

    pub fn value_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.15,
            Rarity::Epic => 1.35,
            Rarity::Legend => 1.75,
        }
    }
}
