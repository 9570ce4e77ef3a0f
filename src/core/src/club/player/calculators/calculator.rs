use crate::club::{Rarity, ABILITY_MAX};

const VALUE_SCALE: f64 = 40_000_000.0;
const VALUE_EXPONENT: f64 = 2.2;
const VALUE_FLOOR: u64 = 10_000;

pub struct PlayerValueCalculator;

impl PlayerValueCalculator {
    /// Super-linear in current ability: elite ability is worth
    /// disproportionately more than solid ability.
    pub fn calculate(current_ability: u8, rarity: Rarity) -> u64 {
        let normalized = current_ability as f64 / ABILITY_MAX as f64;
        let base = VALUE_SCALE * normalized.powf(VALUE_EXPONENT);

        ((base * rarity.value_multiplier()).round() as u64).max(VALUE_FLOOR)
    }
}
