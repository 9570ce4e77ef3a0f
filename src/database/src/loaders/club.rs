use crate::{DatabaseError, DatabaseLoader};
use guildball_core::club::{Club, ClubColors, FinancialTier, Formation, Mentality, Tactics};
use serde::Deserialize;

pub const CLUBS_FILE: &str = "clubs.json";

#[derive(Debug, Deserialize)]
pub struct ClubEntity {
    pub id: u32,
    pub short_name: String,
    pub name: String,
    pub nation_id: u32,
    pub colors: Vec<String>,
    pub financial_tier: FinancialTier,
    pub crest_tag: String,
    pub formation: Formation,
    pub mentality: Mentality,
    pub pressing: u8,
    pub defensive_line: u8,
    pub youth_intake_day: u32,
    #[serde(default)]
    pub rivals: Vec<u32>,
}

impl TryFrom<&ClubEntity> for Club {
    type Error = DatabaseError;

    fn try_from(entity: &ClubEntity) -> Result<Self, Self::Error> {
        let colors = match entity.colors.as_slice() {
            [primary, secondary] => ClubColors {
                primary: primary.clone(),
                secondary: secondary.clone(),
                accent: None,
            },
            [primary, secondary, accent] => ClubColors {
                primary: primary.clone(),
                secondary: secondary.clone(),
                accent: Some(accent.clone()),
            },
            other => {
                return Err(DatabaseError::InvalidData(format!(
                    "club {} has {} colors, expected 2 or 3",
                    entity.id,
                    other.len()
                )));
            }
        };

        Ok(Club {
            id: entity.id,
            short_name: entity.short_name.clone(),
            name: entity.name.clone(),
            nation_id: entity.nation_id,
            colors,
            financial_tier: entity.financial_tier,
            crest_tag: entity.crest_tag.clone(),
            tactics: Tactics::new(entity.formation, entity.mentality)
                .with_pressing(entity.pressing, entity.defensive_line),
            youth_intake_day: entity.youth_intake_day,
            rivals: entity.rivals.clone(),
        })
    }
}

pub struct ClubLoader;

impl ClubLoader {
    pub fn load() -> Result<Vec<ClubEntity>, DatabaseError> {
        DatabaseLoader::read(CLUBS_FILE)
    }
}
