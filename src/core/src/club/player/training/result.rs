use crate::club::{clamp_attribute, AttributeKind, Player, PlayerValueCalculator};
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTrainingResult {
    pub player_id: u32,
    pub ability_gain: u8,
    pub focus: Option<AttributeKind>,
}

impl PlayerTrainingResult {
    pub fn new(player_id: u32, ability_gain: u8, focus: Option<AttributeKind>) -> Self {
        PlayerTrainingResult {
            player_id,
            ability_gain,
            focus,
        }
    }

    pub fn empty(player_id: u32) -> Self {
        PlayerTrainingResult::new(player_id, 0, None)
    }

    pub fn is_empty(&self) -> bool {
        self.ability_gain == 0
    }

    /// Applies the gain. Returns false when the player no longer exists.
    pub fn process(&self, players: &mut [Player]) -> bool {
        let Some(player) = players.iter_mut().find(|p| p.id == self.player_id) else {
            return false;
        };

        let gained = player.player_attributes.improve(self.ability_gain);
        if gained == 0 {
            return true;
        }

        if let Some(focus) = self.focus {
            let raised = clamp_attribute(player.skills.get(focus) as i32 + 1);
            player.skills.set(focus, raised);
        }

        player.player_attributes.value =
            PlayerValueCalculator::calculate(player.current_ability(), player.rarity);

        debug!(
            "training: {} improved to {} ({:?})",
            player.full_name,
            player.current_ability(),
            self.focus
        );

        true
    }
}
