use crate::club::Tactics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubColors {
    pub primary: String,
    pub secondary: String,
    #[serde(default)]
    pub accent: Option<String>,
}

impl ClubColors {
    pub fn palette(&self) -> Vec<&str> {
        let mut palette = vec![self.primary.as_str(), self.secondary.as_str()];

        if let Some(accent) = &self.accent {
            palette.push(accent.as_str());
        }

        palette
    }
}

impl Default for ClubColors {
    fn default() -> Self {
        ClubColors {
            primary: "#1e272d".to_string(),
            secondary: "#ffffff".to_string(),
            accent: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancialTier {
    Struggling,
    Modest,
    Stable,
    Wealthy,
    Elite,
}

impl FinancialTier {
    /// Where richer clubs skew staff quality.
    pub fn generation_bias(&self) -> f64 {
        match self {
            FinancialTier::Struggling => 0.2,
            FinancialTier::Modest => 0.35,
            FinancialTier::Stable => 0.5,
            FinancialTier::Wealthy => 0.65,
            FinancialTier::Elite => 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: u32,
    pub short_name: String,
    pub name: String,
    pub nation_id: u32,
    pub colors: ClubColors,
    pub financial_tier: FinancialTier,
    pub crest_tag: String,
    pub tactics: Tactics,
    pub youth_intake_day: u32,
    pub rivals: Vec<u32>,
}

impl Club {
    pub fn is_rival(&self, club_id: u32) -> bool {
        self.rivals.contains(&club_id)
    }
}
