use crate::error::{SimulationError, SimulationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub squad_size: usize,
    pub season_length_days: u32,
    pub first_match_day: u32,
    pub round_interval_days: u32,
    pub youth_intake_size: usize,
    pub morale_event_probability: f64,
    pub training_interval_days: u32,
    pub scouting_duration_days: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            squad_size: 22,
            season_length_days: 280,
            first_match_day: 7,
            round_interval_days: 7,
            youth_intake_size: 4,
            morale_event_probability: 0.08,
            training_interval_days: 7,
            scouting_duration_days: 14,
        }
    }
}

impl GameConfig {
    /// Last day a round can be scheduled on for `clubs` participants.
    pub fn last_round_day(&self, clubs: usize) -> u32 {
        let padded = clubs + clubs % 2;
        let rounds = (2 * padded.saturating_sub(1)) as u32;

        self.first_match_day + rounds.saturating_sub(1) * self.round_interval_days
    }

    pub fn fits_season(&self, clubs: usize) -> bool {
        self.last_round_day(clubs) <= self.season_length_days
    }

    /// A season for `clubs` participants must hold the whole double round
    /// robin, one round per match day.
    pub fn validate_for(&self, clubs: usize) -> SimulationResult<()> {
        if clubs > 1 && self.round_interval_days == 0 {
            return Err(SimulationError::InvalidState(
                "round interval must be at least one day".to_string(),
            ));
        }

        if !self.fits_season(clubs) {
            return Err(SimulationError::InvalidState(format!(
                "{} clubs need {} days but a season has {}",
                clubs,
                self.last_round_day(clubs),
                self.season_length_days
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_season_fits_twenty_clubs() {
        let config = GameConfig::default();

        assert_eq!(config.last_round_day(20), 7 + 37 * 7);
        assert!(config.fits_season(20));
        assert!(!config.fits_season(22));
    }

    #[test]
    fn test_validate_for_rejects_short_season() {
        let config = GameConfig {
            season_length_days: 60,
            ..GameConfig::default()
        };

        assert!(config.validate_for(4).is_ok());
        assert!(matches!(
            config.validate_for(10),
            Err(SimulationError::InvalidState(_))
        ));
    }

    #[test]
    fn test_validate_for_rejects_zero_interval() {
        let config = GameConfig {
            round_interval_days: 0,
            ..GameConfig::default()
        };

        assert!(config.validate_for(1).is_ok());
        assert!(config.validate_for(4).is_err());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "squad_size": 18 }"#).unwrap();

        assert_eq!(config.squad_size, 18);
        assert_eq!(config.season_length_days, 280);
    }
}
